//! The serial command console
//!
//! This module ties the pipeline together: bytes arrive from a
//! [`Transport`], accumulate into a bounded line, and every `\n` dispatches
//! the finished line against the command table. Handlers run against the
//! [`RegisterBus`] and answer on the same transport.
//!
//! ```text
//! ┌───────────┐    ┌─────────────┐    ┌──────────────┐    ┌─────────────┐
//! │ Transport │───▶│ Line Reader │───▶│ Dispatch     │───▶│ RegisterBus │
//! │ (UART)    │    │ (bounded)   │    │ (prefix scan)│    │ (MMIO)      │
//! └───────────┘    └─────────────┘    └──────┬───────┘    └─────────────┘
//!       ▲                                    │
//!       └────────── responses ◀──────────────┤
//!                                            ▼
//!                                     ┌──────────────┐
//!                                     │ CommandQueue │
//!                                     │ (deferred)   │
//!                                     └──────────────┘
//! ```
//!
//! # Immediate and queue mode
//!
//! The console starts in immediate mode: a dispatched line executes right
//! away and its non-empty response is printed with a trailing `\n`.
//! `enterQueue` switches to queue mode, where every *matched* line — except
//! `exitQueue`, which always executes — is captured into the
//! [`CommandQueue`] instead of executing. Unknown lines are silently
//! discarded in both modes and are never captured. When the queue is full,
//! captured lines are silently dropped.
//!
//! `runQueue` leaves queue mode first and then replays the captured lines
//! in FIFO order through the normal dispatch path, printing each non-empty
//! response. Replayed lines are real commands: a captured `enterQueue`
//! re-arms capture mid-replay, and later replayed lines get captured again.
//!
//! # A session
//!
//! ```text
//! > wFPGA,36864,7
//! > rFPGA,36864
//! 7
//! > enterQueue
//! > wFPGA,36868,1
//! > rFPGA,36868
//! > exitQueue
//! > printQueue
//! 0: wFPGA,36868,1
//! 1: rFPGA,36868
//! > runQueue
//! 1
//! > clearQueue
//! ```
//!
//! # Polling
//!
//! [`Console::poll`] is the superloop integration point: it consumes at
//! most one received byte per call and never blocks on receive, so the
//! loop's other work keeps running while an operator types. Lines longer
//! than [`MAX_LINE_LENGTH`](crate::queue::MAX_LINE_LENGTH) are truncated:
//! excess bytes are dropped (reported as [`PollEvent::Discarded`]) and the
//! truncated line still dispatches once on `\n`.

use core::fmt::Write as _;

use heapless::String;

use crate::bus::{
    ADDR_WORD, RegisterBus, VERSION_STRING_BASE, VERSION_STRING_SIZE, check_address,
};
use crate::command;
use crate::queue::{CommandQueue, Line};
use crate::uart::Transport;

mod commands;

pub use commands::{Action, COMMANDS, CommandEntry, CommandSet};

/// Longest response text a handler can produce.
///
/// Sized for the version string; register reads need at most ten digits.
pub const MAX_RESPONSE_LENGTH: usize = 64;

/// Response text of one executed command. Empty means the command is void
/// and nothing is printed.
pub type Response = String<MAX_RESPONSE_LENGTH>;

/// Console execution mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Dispatched lines execute as soon as they arrive.
    Immediate,
    /// Matched lines are captured into the queue instead of executing.
    Queue,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Mode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Mode::Immediate => defmt::write!(f, "Immediate"),
            Mode::Queue => defmt::write!(f, "Queue"),
        }
    }
}

/// What one [`Console::poll`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollEvent {
    /// No byte was waiting.
    Idle,
    /// A byte was added to the line accumulator.
    Buffered,
    /// A byte was dropped because the line accumulator is at capacity.
    Discarded,
    /// A `\n` completed a line and it was dispatched.
    Dispatched,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PollEvent {
    fn format(&self, f: defmt::Formatter) {
        match self {
            PollEvent::Idle => defmt::write!(f, "Idle"),
            PollEvent::Buffered => defmt::write!(f, "Buffered"),
            PollEvent::Discarded => defmt::write!(f, "Discarded"),
            PollEvent::Dispatched => defmt::write!(f, "Dispatched"),
        }
    }
}

/// The console: line reader, dispatch table, command queue, and mode flag
/// over a register bus and a serial link.
///
/// # Examples
///
/// ```rust
/// use fpga_console::console::{Console, Mode};
/// # use fpga_console::bus::RegisterBus;
/// # use fpga_console::uart::Transport;
/// # struct NullBus;
/// # impl RegisterBus for NullBus {
/// #     fn read_u8(&mut self, _addr: u32) -> u8 { 0 }
/// #     fn write_u8(&mut self, _addr: u32, _value: u8) {}
/// #     fn read_u32(&mut self, _addr: u32) -> u32 { 0 }
/// #     fn write_u32(&mut self, _addr: u32, _value: u32) {}
/// # }
/// # struct NullLink;
/// # impl Transport for NullLink {
/// #     fn try_recv(&mut self) -> Option<u8> { None }
/// #     fn send(&mut self, _byte: u8) {}
/// # }
///
/// let mut console = Console::new(NullBus, NullLink);
/// assert_eq!(console.mode(), Mode::Immediate);
///
/// console.process_line(b"enterQueue");
/// assert_eq!(console.mode(), Mode::Queue);
/// console.process_line(b"rFPGA,36864"); // captured, not executed
/// assert_eq!(console.queue().len(), 1);
/// ```
#[derive(Debug)]
pub struct Console<B: RegisterBus, T: Transport> {
    bus: B,
    link: T,
    commands: CommandSet,
    line: Line,
    queue: CommandQueue,
    mode: Mode,
}

impl<B: RegisterBus, T: Transport> Console<B, T> {
    /// Creates a console with the built-in command table.
    pub fn new(bus: B, link: T) -> Self {
        Self::with_commands(bus, link, CommandSet::builtin())
    }

    /// Creates a console with a custom command table.
    pub fn with_commands(bus: B, link: T, commands: CommandSet) -> Self {
        Self {
            bus,
            link,
            commands,
            line: Line::new(),
            queue: CommandQueue::new(),
            mode: Mode::Immediate,
        }
    }

    /// Restores the construction state: immediate mode, empty queue, empty
    /// line accumulator. The bus and link are untouched.
    pub fn reset(&mut self) {
        self.mode = Mode::Immediate;
        self.queue.clear();
        self.line.clear();
    }

    /// The current execution mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The captured-command queue.
    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    /// The register bus, for host harnesses that prepare device state.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// The serial link, for host harnesses that inject or inspect bytes.
    pub fn link_mut(&mut self) -> &mut T {
        &mut self.link
    }

    /// Consumes the console and returns the bus and the link.
    pub fn into_parts(self) -> (B, T) {
        (self.bus, self.link)
    }

    /// One superloop step: consume at most one received byte.
    ///
    /// A `\n` dispatches the accumulated line (newline excluded, possibly
    /// empty) exactly once and resets the accumulator. Any other byte is
    /// appended, or dropped once the line is at capacity. `\r` is ordinary
    /// data; prefix matching keeps CRLF terminals working.
    pub fn poll(&mut self) -> PollEvent {
        match self.link.try_recv() {
            None => PollEvent::Idle,
            Some(b'\n') => {
                let line = core::mem::take(&mut self.line);
                self.process_line(&line);
                PollEvent::Dispatched
            }
            Some(byte) => {
                if self.line.push(byte).is_ok() {
                    PollEvent::Buffered
                } else {
                    PollEvent::Discarded
                }
            }
        }
    }

    /// Polls forever. The bare-metal main loop when the firmware has
    /// nothing else to do.
    pub fn run(&mut self) -> ! {
        loop {
            self.poll();
        }
    }

    /// Dispatches one complete line (no terminator) and prints its
    /// non-empty response followed by `\n`.
    ///
    /// This is what [`poll`](Self::poll) calls on a finished line; it is
    /// public so alternative readers and tests can inject lines directly.
    pub fn process_line(&mut self, line: &[u8]) {
        let response = self.execute(line);
        if !response.is_empty() {
            write_line(&mut self.link, response.as_bytes());
        }
    }

    /// Looks up and runs one line; unknown lines fall through silently.
    fn execute(&mut self, line: &[u8]) -> Response {
        let Some(entry) = self.commands.find(line) else {
            return Response::new();
        };

        // Queue mode captures every matched command except the escape
        // hatch. A full queue drops the line with no feedback.
        if self.mode == Mode::Queue && entry.action != Action::ExitQueue {
            let _ = self.queue.enqueue(line);
            return Response::new();
        }

        self.run_action(entry.action, line)
    }

    fn run_action(&mut self, action: Action, line: &[u8]) -> Response {
        match action {
            Action::ReadRegister => self.read_register(line),
            Action::WriteRegister => self.write_register(line),
            Action::ReadVersion => self.read_version(),
            Action::EnterQueue => {
                self.mode = Mode::Queue;
                Response::new()
            }
            Action::ExitQueue => {
                self.mode = Mode::Immediate;
                Response::new()
            }
            Action::RunQueue => {
                self.run_queue();
                Response::new()
            }
            Action::ClearQueue => {
                self.queue.clear();
                Response::new()
            }
            Action::PrintQueue => {
                self.print_queue();
                Response::new()
            }
            Action::Help => {
                self.print_help();
                Response::new()
            }
        }
    }

    fn read_register(&mut self, line: &[u8]) -> Response {
        let cmd = command::parse(line);
        let addr = check_address(cmd.value(1));
        let value = self.bus.read_u32(addr);

        let mut response = Response::new();
        let _ = write!(response, "{}", value);
        response
    }

    fn write_register(&mut self, line: &[u8]) -> Response {
        let cmd = command::parse(line);
        let addr = check_address(cmd.value(1));
        self.bus.write_u32(addr, cmd.value(2));
        Response::new()
    }

    /// Reads the version ROM, one character per register word, skipping
    /// NUL padding.
    fn read_version(&mut self) -> Response {
        let mut response = Response::new();
        for slot in 0..VERSION_STRING_SIZE {
            let byte = self
                .bus
                .read_u8(VERSION_STRING_BASE + slot as u32 * ADDR_WORD);
            if byte != 0 {
                let _ = response.push(byte as char);
            }
        }
        response
    }

    /// Leaves queue mode, then replays the captured lines in FIFO order.
    ///
    /// Leaving first matters: replayed lines go through the normal
    /// dispatch path, and in queue mode they would all be captured again.
    fn run_queue(&mut self) {
        self.mode = Mode::Immediate;
        while let Some(line) = self.queue.dequeue() {
            self.process_line(&line);
        }
    }

    fn print_queue(&mut self) {
        let queue = &self.queue;
        let link = &mut self.link;

        if queue.is_empty() {
            write_line(link, b"Command queue empty");
            return;
        }

        for (index, pending) in queue.iter().enumerate() {
            let mut label: String<12> = String::new();
            let _ = write!(label, "{}: ", index);
            write_bytes(link, label.as_bytes());
            write_line(link, pending);
        }
    }

    fn print_help(&mut self) {
        let link = &mut self.link;
        write_line(link, b"Available Commands:");
        for entry in self.commands.entries() {
            write_line(link, entry.name.as_bytes());
        }
    }
}

fn write_bytes<T: Transport>(link: &mut T, bytes: &[u8]) {
    for &byte in bytes {
        link.send(byte);
    }
}

fn write_line<T: Transport>(link: &mut T, bytes: &[u8]) {
    write_bytes(link, bytes);
    link.send(b'\n');
}
