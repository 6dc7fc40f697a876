//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - BRK: Force Interrupt
//! - JMP: Jump (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - RTI: Return from Interrupt
//! - NOP: No Operation

use crate::interrupts::IRQ_VECTOR;
use crate::{AddressingMode, InstructionStatus, MemoryBus, Status, CPU};

/// Executes the BRK (Force Interrupt) instruction.
///
/// BRK is a two-byte instruction: the byte after the opcode is padding, so
/// the return address pushed is the opcode address + 2.
///
/// # Operation
///
/// 1. Push PC + 1 (PC already points past the opcode), high byte first
/// 2. Push status with B and the unused bit set
/// 3. Set the Interrupt Disable flag
/// 4. Load PC from the IRQ/BRK vector at 0xFFFE/0xFFFF
pub(crate) fn execute_brk<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.push16(cpu.registers.pc.wrapping_add(1));
    cpu.push(cpu.registers.p.pushed(true));
    cpu.registers.p.insert(Status::INTERRUPT_DISABLE);
    cpu.registers.pc = cpu.read_word(IRQ_VECTOR);
    InstructionStatus::empty()
}

/// Executes the JMP (Jump) instruction.
///
/// The indirect form reproduces the NMOS page-wrap bug: `JMP ($10FF)` reads
/// its high byte from 0x1000, not 0x1100.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.pc = cpu.resolve(mode).address;
    InstructionStatus::empty()
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR (return address - 1), so
/// that RTS can add one to land on the next instruction.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let target = cpu.resolve(mode).address;
    cpu.push16(cpu.registers.pc.wrapping_sub(1));
    cpu.registers.pc = target;
    InstructionStatus::empty()
}

/// Executes the RTS (Return from Subroutine) instruction.
pub(crate) fn execute_rts<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.pc = cpu.pull16().wrapping_add(1);
    InstructionStatus::empty()
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls status (B dropped, unused bit forced on) then PC. Unlike RTS the
/// pulled PC is used as-is.
pub(crate) fn execute_rti<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    let status = cpu.pull();
    cpu.registers.p = Status::pulled(status);
    cpu.registers.pc = cpu.pull16();
    InstructionStatus::empty()
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(
    _cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    InstructionStatus::empty()
}
