//! # Flag Instructions
//!
//! Set and clear individual status flags. Each is a single-byte, two-cycle
//! instruction with no other side effects. There is no SEV.

use crate::{AddressingMode, InstructionStatus, MemoryBus, Status, CPU};

fn update<M: MemoryBus>(cpu: &mut CPU<M>, flag: Status, value: bool) -> InstructionStatus {
    cpu.registers.p.set(flag, value);
    InstructionStatus::empty()
}

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    update(cpu, Status::CARRY, false)
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    update(cpu, Status::CARRY, true)
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
///
/// Takes effect before the next step's interrupt check.
pub(crate) fn execute_cli<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    update(cpu, Status::INTERRUPT_DISABLE, false)
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    update(cpu, Status::INTERRUPT_DISABLE, true)
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    update(cpu, Status::DECIMAL_MODE, false)
}

/// Executes the SED (Set Decimal Mode) instruction.
pub(crate) fn execute_sed<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    update(cpu, Status::DECIMAL_MODE, true)
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    update(cpu, Status::OVERFLOW, false)
}
