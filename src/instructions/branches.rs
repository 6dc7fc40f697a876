//! # Branch Instructions
//!
//! This module implements the conditional branch instructions:
//! - BCC/BCS: Branch on Carry Clear/Set
//! - BEQ/BNE: Branch on Equal/Not Equal (Zero flag)
//! - BMI/BPL: Branch on Minus/Plus (Negative flag)
//! - BVC/BVS: Branch on Overflow Clear/Set
//!
//! All branches use relative addressing: a signed offset from the address of
//! the next instruction.
//!
//! ## Timing
//!
//! - Branch not taken: 2 cycles
//! - Branch taken, same page: 3 cycles
//! - Branch taken, page crossed: 4 cycles

use crate::{AddressingMode, InstructionStatus, MemoryBus, Status, CPU};

/// Resolves the branch target and jumps there when `condition` holds.
fn branch<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    condition: bool,
) -> InstructionStatus {
    let target = cpu.resolve(mode);
    if !condition {
        return InstructionStatus::empty();
    }

    cpu.registers.pc = target.address;
    let mut status = InstructionStatus::BRANCH_TAKEN;
    status.set(InstructionStatus::PAGE_CROSSED, target.page_crossed);
    status
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let condition = !cpu.registers.p.contains(Status::CARRY);
    branch(cpu, mode, condition)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let condition = cpu.registers.p.contains(Status::CARRY);
    branch(cpu, mode, condition)
}

/// Executes the BEQ (Branch if Equal) instruction.
///
/// # Examples
///
/// ```
/// use m6502::{BasicMemory, CPU};
///
/// let mut memory = BasicMemory::new();
/// memory.load(0xFFFC, &[0x00, 0x80]);
/// memory.load(0x8000, &[0xA9, 0x00, 0xF0, 0x10]); // LDA #$00; BEQ +16
///
/// let mut cpu = CPU::new(memory);
/// cpu.step().unwrap();
/// assert_eq!(cpu.step().unwrap(), 3);
/// assert_eq!(cpu.pc(), 0x8014);
/// ```
pub(crate) fn execute_beq<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let condition = cpu.registers.p.contains(Status::ZERO);
    branch(cpu, mode, condition)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let condition = !cpu.registers.p.contains(Status::ZERO);
    branch(cpu, mode, condition)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let condition = cpu.registers.p.contains(Status::NEGATIVE);
    branch(cpu, mode, condition)
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let condition = !cpu.registers.p.contains(Status::NEGATIVE);
    branch(cpu, mode, condition)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let condition = !cpu.registers.p.contains(Status::OVERFLOW);
    branch(cpu, mode, condition)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let condition = cpu.registers.p.contains(Status::OVERFLOW);
    branch(cpu, mode, condition)
}
