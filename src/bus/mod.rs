//! Memory-mapped register access
//!
//! The console never touches hardware directly: every register access goes
//! through the [`RegisterBus`] trait, implemented by platform code (volatile
//! MMIO on a real soft CPU) or by an in-memory fake in tests. This module
//! also carries the fixed address map of the reference design and the
//! word-alignment rule applied to operator-supplied addresses.

/// Register stride in bytes; also the alignment unit for register
/// addresses.
pub const ADDR_WORD: u32 = 4;

/// Base address of the version string ROM.
pub const VERSION_STRING_BASE: u32 = 0x8000;

/// Number of character slots in the version string ROM, one per register
/// word.
pub const VERSION_STRING_SIZE: usize = 64;

/// Base address of the general-purpose register block.
pub const IO_BASE: u32 = 0x9000;

/// Base address of the UART register block.
pub const UART_BASE: u32 = 0x9100;

/// Byte- and word-granular access to the memory-mapped register space.
///
/// Methods take `&mut self` because device reads are not pure: reading a
/// register can pop a hardware FIFO or clear a flag. All four accesses are
/// infallible; the hardware contract has no failure path.
///
/// Implementations live outside this crate (platform MMIO) or inside test
/// harnesses (array-backed fakes).
pub trait RegisterBus {
    /// Reads the byte at `addr`.
    fn read_u8(&mut self, addr: u32) -> u8;

    /// Writes a byte to `addr`.
    fn write_u8(&mut self, addr: u32, value: u8);

    /// Reads the 32-bit word at `addr`.
    fn read_u32(&mut self, addr: u32) -> u32;

    /// Writes a 32-bit word to `addr`.
    fn write_u32(&mut self, addr: u32, value: u32);
}

/// Applies the word-alignment rule to an operator-supplied address.
///
/// Aligned addresses pass through unchanged. A misaligned address is
/// coerced to `0`, and the caller's access then proceeds at address 0 —
/// it is not rejected. Operators see the register at 0 instead of an error
/// for an off-by-one address; this coercion is part of the wire contract.
///
/// # Examples
///
/// ```rust
/// use fpga_console::bus::check_address;
///
/// assert_eq!(check_address(36864), 36864);
/// assert_eq!(check_address(36865), 0);
/// ```
pub fn check_address(addr: u32) -> u32 {
    if addr & (ADDR_WORD - 1) != 0 { 0 } else { addr }
}
