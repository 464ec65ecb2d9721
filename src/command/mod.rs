//! Command-line parsing
//!
//! Splits one received line into comma-separated tokens and decodes the
//! decimal value carried by each token, in a single left-to-right pass.
//! Parsing is total: any byte sequence yields a well-formed
//! [`ParsedCommand`], so the console never has to reject operator input at
//! this layer.
//!
//! The whole line is parsed, command name included. For `wFPGA,36864,7` the
//! tokens are `wFPGA`, `36864`, `7` and the decoded values `[0, 36864, 7]`:
//! handlers read their address from token 1 and their data from token 2.

use crate::slice;

/// Number of tokens parsed per line: the command name plus two arguments.
pub const MAX_CMD_ARGS: usize = 3;

/// Longest token text preserved verbatim.
///
/// Longer tokens are truncated for [`ParsedCommand::raw`]; decimal decoding
/// still consumes every byte of the token.
pub const MAX_TOKEN_LENGTH: usize = 15;

/// Byte that separates tokens on the wire.
pub const TOKEN_SEPARATOR: u8 = b',';

/// The tokens of one parsed line, borrowed from the line buffer.
///
/// A `ParsedCommand` lives only as long as the line it was parsed from; it
/// is produced and consumed within a single dispatch. Token slots that were
/// never filled read as the empty slice and the value `0`, so handlers can
/// index their expected arguments without checking the count first (a
/// missing address argument simply becomes address 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedCommand<'a> {
    raw: [&'a [u8]; MAX_CMD_ARGS],
    values: [u32; MAX_CMD_ARGS],
    count: usize,
}

impl<'a> ParsedCommand<'a> {
    /// Token text at `index`, truncated to [`MAX_TOKEN_LENGTH`] bytes.
    ///
    /// The empty slice for unfilled or out-of-range indexes.
    pub fn raw(&self, index: usize) -> &'a [u8] {
        self.raw.get(index).copied().unwrap_or(&[])
    }

    /// Decoded decimal value of the token at `index`.
    ///
    /// `0` for unfilled or out-of-range indexes, and for tokens containing
    /// no digits.
    pub fn value(&self, index: usize) -> u32 {
        self.values.get(index).copied().unwrap_or(0)
    }

    /// Number of tokens found on the line.
    pub fn value_count(&self) -> usize {
        self.count
    }
}

/// Parses one line into up to [`MAX_CMD_ARGS`] tokens.
///
/// Tokens are delimited by [`TOKEN_SEPARATOR`]; an embedded `\n` stops
/// parsing. Within a token every ASCII digit contributes
/// `value = value * 10 + digit` with silent `u32` wraparound; non-digit
/// bytes contribute nothing to the value but stay part of the raw text.
/// An empty field between two separators is a real zero-valued token; a
/// trailing separator produces no trailing token. Bytes after the third
/// token are ignored.
///
/// # Examples
///
/// ```rust
/// use fpga_console::command::parse;
///
/// let cmd = parse(b"wFPGA,36864,7");
/// assert_eq!(cmd.value_count(), 3);
/// assert_eq!(cmd.raw(0), b"wFPGA");
/// assert_eq!(cmd.value(1), 36864);
/// assert_eq!(cmd.value(2), 7);
/// ```
pub fn parse(line: &[u8]) -> ParsedCommand<'_> {
    let mut raw: [&[u8]; MAX_CMD_ARGS] = [&[]; MAX_CMD_ARGS];
    let mut values = [0u32; MAX_CMD_ARGS];
    let mut count = 0;
    let mut i = 0;

    while count < MAX_CMD_ARGS && i < line.len() && line[i] != b'\n' {
        let start = i;
        let mut value: u32 = 0;

        while i < line.len() && line[i] != TOKEN_SEPARATOR && line[i] != b'\n' {
            let byte = line[i];
            if byte.is_ascii_digit() {
                value = value.wrapping_mul(10).wrapping_add(u32::from(byte - b'0'));
            }
            i += 1;
        }

        raw[count] = slice::with_len(line, start, (i - start).min(MAX_TOKEN_LENGTH));
        values[count] = value;
        count += 1;

        if i < line.len() && line[i] == TOKEN_SEPARATOR {
            i += 1;
        }
    }

    ParsedCommand { raw, values, count }
}
