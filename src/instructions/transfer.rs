//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All set Z and N from the copied value except TXS, which touches no flags.

use crate::{AddressingMode, InstructionStatus, MemoryBus, CPU};

pub(crate) fn execute_tax<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.x = cpu.registers.p.set_zero_negative(cpu.registers.a);
    InstructionStatus::empty()
}

pub(crate) fn execute_tay<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.y = cpu.registers.p.set_zero_negative(cpu.registers.a);
    InstructionStatus::empty()
}

pub(crate) fn execute_txa<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.a = cpu.registers.p.set_zero_negative(cpu.registers.x);
    InstructionStatus::empty()
}

pub(crate) fn execute_tya<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.a = cpu.registers.p.set_zero_negative(cpu.registers.y);
    InstructionStatus::empty()
}

pub(crate) fn execute_tsx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.x = cpu.registers.p.set_zero_negative(cpu.registers.sp);
    InstructionStatus::empty()
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Unlike the other transfers, TXS does not affect any flags.
pub(crate) fn execute_txs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.sp = cpu.registers.x;
    InstructionStatus::empty()
}
