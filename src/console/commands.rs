//! Built-in command table
//!
//! Dispatch is a linear scan over an ordered table: the first entry whose
//! name is a prefix of the received line wins. The line only has to *start
//! with* the name, so `rFPGA,36864` matches the `rFPGA` entry and any
//! trailing bytes (arguments, a stray `\r`) are left for the parser. With
//! prefix-overlapping names, table order is the tiebreak.
//!
//! A custom table can be handed to
//! [`Console::with_commands`](super::Console::with_commands); precedence is
//! always entry order.

/// What a matched command does.
///
/// Each variant is handled inside the console, which gives the handler
/// access to the register bus, the serial link, the queue, and the mode
/// flag in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Read the 32-bit register at the address argument and respond with
    /// its decimal value.
    ReadRegister,
    /// Write the data argument to the register at the address argument.
    WriteRegister,
    /// Respond with the design's version string.
    ReadVersion,
    /// Start capturing matched commands into the queue.
    EnterQueue,
    /// Stop capturing. The one action that executes even while capturing.
    ExitQueue,
    /// Replay every captured command in FIFO order.
    RunQueue,
    /// Forget the captured commands and restore queue capacity.
    ClearQueue,
    /// List the captured commands without executing them.
    PrintQueue,
    /// List the command names.
    Help,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Action {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Action::ReadRegister => defmt::write!(f, "ReadRegister"),
            Action::WriteRegister => defmt::write!(f, "WriteRegister"),
            Action::ReadVersion => defmt::write!(f, "ReadVersion"),
            Action::EnterQueue => defmt::write!(f, "EnterQueue"),
            Action::ExitQueue => defmt::write!(f, "ExitQueue"),
            Action::RunQueue => defmt::write!(f, "RunQueue"),
            Action::ClearQueue => defmt::write!(f, "ClearQueue"),
            Action::PrintQueue => defmt::write!(f, "PrintQueue"),
            Action::Help => defmt::write!(f, "Help"),
        }
    }
}

/// One row of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry {
    /// The name the line must start with.
    pub name: &'static str,
    /// What to do on a match.
    pub action: Action,
}

/// The built-in table, in dispatch order.
pub static COMMANDS: &[CommandEntry] = &[
    CommandEntry {
        name: "rFPGA",
        action: Action::ReadRegister,
    },
    CommandEntry {
        name: "wFPGA",
        action: Action::WriteRegister,
    },
    CommandEntry {
        name: "readFPGAVersion",
        action: Action::ReadVersion,
    },
    CommandEntry {
        name: "enterQueue",
        action: Action::EnterQueue,
    },
    CommandEntry {
        name: "exitQueue",
        action: Action::ExitQueue,
    },
    CommandEntry {
        name: "runQueue",
        action: Action::RunQueue,
    },
    CommandEntry {
        name: "clearQueue",
        action: Action::ClearQueue,
    },
    CommandEntry {
        name: "printQueue",
        action: Action::PrintQueue,
    },
    CommandEntry {
        name: "help",
        action: Action::Help,
    },
];

/// An ordered dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct CommandSet {
    entries: &'static [CommandEntry],
}

impl CommandSet {
    /// The built-in [`COMMANDS`] table.
    pub const fn builtin() -> Self {
        Self { entries: COMMANDS }
    }

    /// Wraps a custom table. Entry order is dispatch precedence.
    pub const fn new(entries: &'static [CommandEntry]) -> Self {
        Self { entries }
    }

    /// The table rows, in dispatch order.
    pub fn entries(&self) -> &'static [CommandEntry] {
        self.entries
    }

    /// Finds the first entry whose name is a prefix of `line`.
    pub fn find(&self, line: &[u8]) -> Option<&'static CommandEntry> {
        self.entries
            .iter()
            .find(|entry| line.starts_with(entry.name.as_bytes()))
    }
}

impl Default for CommandSet {
    fn default() -> Self {
        Self::builtin()
    }
}
