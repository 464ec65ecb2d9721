//! Bounds-checked byte views
//!
//! Total sub-view helpers over `&[u8]` for code that must never panic on
//! operator input. Out-of-range requests do not abort and do not clamp:
//! they yield the empty slice, and callers treat a zero-length view as the
//! failure signal wherever that distinction matters. Reads past the end
//! yield a `0` sentinel byte.
//!
//! Views are plain borrows of the underlying buffer, so the borrow checker
//! guarantees they never outlive it. No helper here allocates or copies.

/// Returns the view `buf[start..end]`, or the empty slice when the bounds
/// are invalid (`start > end` or `end > buf.len()`).
///
/// # Examples
///
/// ```rust
/// use fpga_console::slice::range;
///
/// let buf = b"rFPGA,36864";
/// assert_eq!(range(buf, 0, 5), b"rFPGA");
/// assert_eq!(range(buf, 6, 64), b"");
/// ```
pub fn range(buf: &[u8], start: usize, end: usize) -> &[u8] {
    if start <= end && end <= buf.len() {
        &buf[start..end]
    } else {
        &[]
    }
}

/// Returns the view of `len` bytes starting at `start`, or the empty slice
/// when the request does not fit in `buf` (including `start + len`
/// overflow).
pub fn with_len(buf: &[u8], start: usize, len: usize) -> &[u8] {
    match start.checked_add(len) {
        Some(end) => range(buf, start, end),
        None => &[],
    }
}

/// Returns the byte at `index`, or `0` when `index` is out of range.
///
/// The sentinel is indistinguishable from a genuine zero byte; callers that
/// care must check the length first.
pub fn get(buf: &[u8], index: usize) -> u8 {
    buf.get(index).copied().unwrap_or(0)
}

#[cfg(test)]
mod tests;
