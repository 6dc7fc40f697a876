//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set Z and N from the loaded byte and pay the page-cross penalty on
//! indexed modes. Stores touch no flags and always pay their fixed cost.

use crate::{AddressingMode, InstructionStatus, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// Loads a byte of memory into the accumulator, setting the zero and negative
/// flags as appropriate.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
///
/// # Examples
///
/// ```
/// use m6502::{BasicMemory, Status, CPU};
///
/// let mut memory = BasicMemory::new();
/// memory.load(0xFFFC, &[0x00, 0x80]);
/// memory.load(0x8000, &[0xA9, 0x00]); // LDA #$00
///
/// let mut cpu = CPU::new(memory);
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.a(), 0x00);
/// assert!(cpu.status().contains(Status::ZERO));
/// ```
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    cpu.registers.a = cpu.registers.p.set_zero_negative(value);
    status
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    cpu.registers.x = cpu.registers.p.set_zero_negative(value);
    status
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    cpu.registers.y = cpu.registers.p.set_zero_negative(value);
    status
}

/// Stores `value` at the address `mode` resolves to.
fn store<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, value: u8) -> InstructionStatus {
    let addr = cpu.resolve(mode).address;
    cpu.write(addr, value);

    // Store instructions do NOT have page crossing penalties
    InstructionStatus::empty()
}

/// Executes the STA (Store Accumulator) instruction. No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let value = cpu.registers.a;
    store(cpu, mode, value)
}

/// Executes the STX (Store X Register) instruction. No flags affected.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let value = cpu.registers.x;
    store(cpu, mode, value)
}

/// Executes the STY (Store Y Register) instruction. No flags affected.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let value = cpu.registers.y;
    store(cpu, mode, value)
}
