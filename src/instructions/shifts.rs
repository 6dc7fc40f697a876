//! # Shift and Rotate Instructions
//!
//! This module implements the shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or on memory (read-modify-write). The bit
//! shifted out lands in Carry; Z and N follow the result.

use crate::{AddressingMode, InstructionStatus, MemoryBus, Status, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// # Examples
///
/// ```
/// use m6502::{BasicMemory, Status, CPU};
///
/// let mut memory = BasicMemory::new();
/// memory.load(0xFFFC, &[0x00, 0x80]);
/// memory.load(0x8000, &[0xA9, 0x81, 0x0A]); // LDA #$81; ASL A
///
/// let mut cpu = CPU::new(memory);
/// cpu.step().unwrap();
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x02);
/// assert!(cpu.status().contains(Status::CARRY));
/// ```
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    cpu.read_modify_write(mode, |p, value| {
        p.set(Status::CARRY, value & 0x80 != 0);
        p.set_zero_negative(value << 1)
    })
}

/// Executes the LSR (Logical Shift Right) instruction. N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    cpu.read_modify_write(mode, |p, value| {
        p.set(Status::CARRY, value & 0x01 != 0);
        p.set_zero_negative(value >> 1)
    })
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    cpu.read_modify_write(mode, |p, value| {
        let carry_in = p.contains(Status::CARRY) as u8;
        p.set(Status::CARRY, value & 0x80 != 0);
        p.set_zero_negative((value << 1) | carry_in)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    cpu.read_modify_write(mode, |p, value| {
        let carry_in = (p.contains(Status::CARRY) as u8) << 7;
        p.set(Status::CARRY, value & 0x01 != 0);
        p.set_zero_negative((value >> 1) | carry_in)
    })
}
