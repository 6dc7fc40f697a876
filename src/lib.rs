//! # 6502 CPU Core
//!
//! A table-driven NMOS 6502 instruction-execution core: register file, status
//! flags, every documented addressing mode and opcode, per-opcode cycle
//! accounting, a three-line interrupt controller and an optional decode trace.
//!
//! The core knows nothing about the machine around it. Memory is anything that
//! implements [`MemoryBus`]; peripherals reach the CPU only through its
//! interrupt lines.
//!
//! ## Quick Start
//!
//! ```rust
//! use m6502::{BasicMemory, Status, CPU};
//!
//! let mut memory = BasicMemory::new();
//!
//! // Reset vector -> 0x8000
//! memory.load(0xFFFC, &[0x00, 0x80]);
//! // LDA #$42; TAX
//! memory.load(0x8000, &[0xA9, 0x42, 0xAA]);
//!
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//! assert_eq!(cpu.sp(), 0xFD);
//! assert!(cpu.status().contains(Status::INTERRUPT_DISABLE));
//!
//! assert_eq!(cpu.step(), Ok(2));
//! assert_eq!(cpu.step(), Ok(2));
//! assert_eq!(cpu.x(), 0x42);
//! assert_eq!(cpu.cycles(), 4);
//! ```
//!
//! ## Architecture
//!
//! - **Memory abstraction**: the CPU is generic over [`MemoryBus`]
//! - **Table-driven dispatch**: an [`InstructionTable`] maps each opcode to a
//!   mnemonic, an addressing mode and an execution function, alongside two
//!   cycle tables (base and page-crossed)
//! - **Extensible**: hosts may add, replace or remove entries at runtime
//! - **Shared interrupt lines**: [`InterruptLine`] handles can be raised from
//!   other threads
//!
//! ## Modules
//!
//! - `cpu` - CPU state and the fetch-decode-execute loop
//! - `registers` / `flags` - register file and status bits
//! - `addressing` - addressing modes and effective-address resolution
//! - `table` / `opcodes` - instruction table and default cycle tables
//! - `interrupts` - RESET/NMI/IRQ request lines
//! - `memory` - MemoryBus trait and a flat 64 KiB implementation
//! - `trace` - per-instruction decode records
//! - `config` / `error` - runtime switches and execution errors
//!
//! ## Logging
//!
//! The core emits [`tracing`] events: interrupt servicing at `debug`, unknown
//! opcodes at `warn`, and decode-trace lines at `info` under the
//! `m6502::decode` target. Install any subscriber to see them.

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod error;
pub mod flags;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod table;
pub mod trace;

// Instruction implementations are reachable only through the table
mod instructions;

pub use addressing::{AddressingMode, Operand};
pub use config::CpuConfig;
pub use cpu::CPU;
pub use error::ExecutionError;
pub use flags::Status;
pub use interrupts::{Interrupt, InterruptLine, InterruptLines};
pub use memory::{BasicMemory, MemoryBus};
pub use registers::Registers;
pub use table::{Exec, Instruction, InstructionStatus, InstructionTable};
pub use trace::DecodeTrace;
