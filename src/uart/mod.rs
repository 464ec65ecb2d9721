//! Serial transport
//!
//! The console's only contact with the serial link is the [`Transport`]
//! trait: a byte-ready receive that never blocks and a send that blocks
//! only on the device-busy handshake. Firmware superloops stay responsive
//! because the poll step consumes at most one received byte per call.
//!
//! [`MmioUart`] is the register-level binding for the reference design's
//! UART block. Its register map, at word stride from the block base:
//!
//! | Offset | Register  | Semantics                            |
//! |--------|-----------|--------------------------------------|
//! | `+0`   | TX data   | outgoing byte                        |
//! | `+4`   | TX strobe | write `1` to latch and send          |
//! | `+8`   | TX busy   | non-zero while the transmitter works |
//! | `+12`  | RX data   | received byte; reading pops the FIFO |
//! | `+16`  | RX status | `0` when a byte is waiting           |

use crate::bus::{ADDR_WORD, RegisterBus, UART_BASE};

/// Offset of the transmit data register.
pub const TX_DATA_OFFSET: u32 = 0;
/// Offset of the transmit strobe register.
pub const TX_STROBE_OFFSET: u32 = ADDR_WORD;
/// Offset of the transmit busy flag.
pub const TX_BUSY_OFFSET: u32 = 2 * ADDR_WORD;
/// Offset of the receive data register.
pub const RX_DATA_OFFSET: u32 = 3 * ADDR_WORD;
/// Offset of the receive status flag.
pub const RX_STATUS_OFFSET: u32 = 4 * ADDR_WORD;

/// Byte-granular serial link.
///
/// Implemented by [`MmioUart`] on hardware and by in-memory pipes in test
/// harnesses.
pub trait Transport {
    /// Returns the next received byte, or `None` when nothing is waiting.
    /// Never blocks.
    fn try_recv(&mut self) -> Option<u8>;

    /// Sends one byte, waiting for the device to accept it.
    fn send(&mut self, byte: u8);
}

/// [`Transport`] implementation over the memory-mapped UART block.
#[derive(Debug)]
pub struct MmioUart<B: RegisterBus> {
    bus: B,
    base: u32,
}

impl<B: RegisterBus> MmioUart<B> {
    /// Binds the UART block at its reference-design base address.
    pub fn new(bus: B) -> Self {
        Self::with_base(bus, UART_BASE)
    }

    /// Binds the UART block at a custom base address.
    pub fn with_base(bus: B, base: u32) -> Self {
        Self { bus, base }
    }

    /// Releases the underlying bus handle.
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: RegisterBus> Transport for MmioUart<B> {
    fn try_recv(&mut self) -> Option<u8> {
        if self.bus.read_u8(self.base + RX_STATUS_OFFSET) == 0 {
            Some(self.bus.read_u8(self.base + RX_DATA_OFFSET))
        } else {
            None
        }
    }

    fn send(&mut self, byte: u8) {
        while self.bus.read_u8(self.base + TX_BUSY_OFFSET) != 0 {}
        self.bus.write_u8(self.base + TX_DATA_OFFSET, byte);
        self.bus.write_u8(self.base + TX_STROBE_OFFSET, 1);
    }
}
