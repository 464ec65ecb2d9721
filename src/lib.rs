//! # fpga-console - Serial Command Console for FPGA Soft-CPU Firmware
//!
//! A lightweight command console that lets an operator poke a memory-mapped
//! FPGA design over a serial link. Lines of ASCII text arrive on a UART, get
//! parsed into comma-separated tokens, and dispatch against a fixed command
//! table to read and write 32-bit registers, query the design's version
//! string, or buffer commands for deferred batch execution. This library is
//! designed for soft-CPU firmware and supports `no_std` environments.
//!
//! ## Features
//!
//! ### Command Pipeline
//! - **Line Reader**: One-byte-per-poll accumulation with bounded buffers
//! - **Parser**: Comma-separated tokens with embedded decimal decoding
//! - **Dispatch Table**: Ordered prefix matching with first-match-wins precedence
//! - **Command Queue**: Bounded FIFO for deferred batch execution
//!
//! ### Hardware Seams
//! - [`bus::RegisterBus`]: the memory-mapped register contract, implemented
//!   by platform code (or an in-memory fake in tests)
//! - [`uart::Transport`]: byte-ready receive / busy-wait send, with
//!   [`uart::MmioUart`] as the register-level binding
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! fpga-console = "0.1.0"
//! ```
//!
//! ### Driving the console from a superloop
//!
//! ```rust
//! use fpga_console::bus::RegisterBus;
//! use fpga_console::console::{Console, PollEvent};
//! use fpga_console::uart::Transport;
//!
//! # struct DemoBus { regs: [u32; 16] }
//! # impl RegisterBus for DemoBus {
//! #     fn read_u8(&mut self, addr: u32) -> u8 { self.read_u32(addr) as u8 }
//! #     fn write_u8(&mut self, addr: u32, value: u8) { self.write_u32(addr, value as u32) }
//! #     fn read_u32(&mut self, addr: u32) -> u32 { self.regs[(addr as usize / 4) % 16] }
//! #     fn write_u32(&mut self, addr: u32, value: u32) { self.regs[(addr as usize / 4) % 16] = value }
//! # }
//! # struct DemoLink { rx: std::collections::VecDeque<u8>, tx: Vec<u8> }
//! # impl Transport for DemoLink {
//! #     fn try_recv(&mut self) -> Option<u8> { self.rx.pop_front() }
//! #     fn send(&mut self, byte: u8) { self.tx.push(byte) }
//! # }
//!
//! let bus = DemoBus { regs: [0; 16] };
//! let link = DemoLink {
//!     rx: b"wFPGA,16,7\nrFPGA,16\n".iter().copied().collect(),
//!     tx: Vec::new(),
//! };
//!
//! let mut console = Console::new(bus, link);
//! while console.poll() != PollEvent::Idle {}
//!
//! let (_, link) = console.into_parts();
//! assert_eq!(link.tx, b"7\n");
//! ```
//!
//! On hardware the loop body is the same; the bus is the platform's volatile
//! MMIO implementation and the link is [`uart::MmioUart`] over it.
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - FPGA soft CPUs (RISC-V, MicroBlaze, NIOS-class cores)
//! - Any bare-metal target supporting Rust's `core` library
//! - Host builds for testing, via in-memory bus and transport fakes
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt formatting support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Bounds-checked byte views.
///
/// Total (never-panicking) sub-view helpers over `&[u8]`, used by the
/// parser to carve token text out of a received line.
pub mod slice;

/// Command-line parsing.
///
/// Splits a received line into comma-separated tokens and decodes the
/// decimal value embedded in each one.
pub mod command;

/// Deferred command FIFO.
///
/// A bounded queue of captured command lines, consumed front to back with
/// no slot reuse until an explicit clear.
pub mod queue;

pub mod bus;

pub mod uart;

/// The console itself: dispatch table, queue-mode state machine, and the
/// per-iteration poll step that firmware superloops call.
pub mod console;
