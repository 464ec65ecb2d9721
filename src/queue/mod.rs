//! Deferred command FIFO
//!
//! A bounded queue of captured command lines. Slots are consumed front to
//! back and never reused: the `tail` cursor only moves forward, so a queue
//! that has been filled and drained stays full for new arrivals until
//! [`CommandQueue::clear`] resets both cursors. Batch workflows clear
//! between batches.
//!
//! Capture, replay, and inspection of the queue are driven by the console
//! (`enterQueue` / `runQueue` / `printQueue`); this module only owns the
//! storage and the cursor rules.

use heapless::Vec;

/// Number of command lines the queue can hold between clears.
pub const MAX_CMD_QUEUE: usize = 8;

/// Longest accepted command line, terminator excluded.
pub const MAX_LINE_LENGTH: usize = 64;

/// One captured command line.
pub type Line = Vec<u8, MAX_LINE_LENGTH>;

/// Errors reported by [`CommandQueue::enqueue`].
///
/// The console swallows these on the wire (a dropped line produces no
/// operator feedback); they exist so host code and tests can see what
/// happened.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// Every slot has been used since the last clear.
    Full,
    /// The line does not fit in a queue slot.
    Oversize,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Full => defmt::write!(f, "Full"),
            Error::Oversize => defmt::write!(f, "Oversize"),
        }
    }
}

/// Bounded FIFO of captured command lines.
///
/// # Examples
///
/// ```rust
/// use fpga_console::queue::CommandQueue;
///
/// let mut queue = CommandQueue::new();
/// queue.enqueue(b"wFPGA,36864,7").unwrap();
/// queue.enqueue(b"rFPGA,36864").unwrap();
///
/// assert_eq!(queue.dequeue().as_deref(), Some(&b"wFPGA,36864,7"[..]));
/// assert_eq!(queue.dequeue().as_deref(), Some(&b"rFPGA,36864"[..]));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Debug)]
pub struct CommandQueue {
    slots: [Line; MAX_CMD_QUEUE],
    head: usize,
    tail: usize,
}

impl Default for CommandQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandQueue {
    /// Creates an empty queue with all slots available.
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Line::new()),
            head: 0,
            tail: 0,
        }
    }

    /// Copies `line` into the next free slot.
    ///
    /// Fails with [`Error::Full`] once every slot has been used since the
    /// last [`clear`](Self::clear) — including slots that were already
    /// drained. Fails with [`Error::Oversize`] (storing nothing) when the
    /// line exceeds [`MAX_LINE_LENGTH`].
    pub fn enqueue(&mut self, line: &[u8]) -> Result<(), Error> {
        if self.is_full() {
            return Err(Error::Full);
        }

        let slot = &mut self.slots[self.tail];
        slot.clear();
        if slot.extend_from_slice(line).is_err() {
            return Err(Error::Oversize);
        }

        self.tail += 1;
        Ok(())
    }

    /// Removes and returns the oldest pending line, or `None` when nothing
    /// is pending.
    pub fn dequeue(&mut self) -> Option<Line> {
        if self.is_empty() {
            return None;
        }

        let line = self.slots[self.head].clone();
        self.head += 1;
        Some(line)
    }

    /// Resets both cursors, making every slot available again.
    ///
    /// This is the only operation that restores capacity. Slot contents are
    /// not scrubbed; they are overwritten on the next enqueue.
    pub fn clear(&mut self) {
        self.head = 0;
        self.tail = 0;
    }

    /// Number of pending lines.
    pub fn len(&self) -> usize {
        self.tail - self.head
    }

    /// `true` when no lines are pending.
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// `true` when no slot is free for a new line.
    ///
    /// A drained-but-uncleared queue is still full: capacity comes back
    /// only through [`clear`](Self::clear).
    pub fn is_full(&self) -> bool {
        self.tail >= MAX_CMD_QUEUE
    }

    /// Iterates over the pending lines in FIFO order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.slots[self.head..self.tail].iter().map(|l| l.as_slice())
    }
}

#[cfg(test)]
mod tests;
