//! # Stack Instructions
//!
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The stack lives at 0x0100-0x01FF and grows downward. SP wraps within the
//! page in both directions.

use crate::{AddressingMode, InstructionStatus, MemoryBus, Status, CPU};

/// Executes the PHA (Push Accumulator) instruction. No flags affected.
pub(crate) fn execute_pha<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.push(cpu.registers.a);
    InstructionStatus::empty()
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte always has B (bit 4) and the unused bit (bit 5) set. The
/// live status register is not changed.
pub(crate) fn execute_php<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.push(cpu.registers.p.pushed(true));
    InstructionStatus::empty()
}

/// Executes the PLA (Pull Accumulator) instruction. Sets Z and N.
pub(crate) fn execute_pla<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    let value = cpu.pull();
    cpu.registers.a = cpu.registers.p.set_zero_negative(value);
    InstructionStatus::empty()
}

/// Executes the PLP (Pull Processor Status) instruction.
pub(crate) fn execute_plp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    let value = cpu.pull();
    cpu.registers.p = Status::pulled(value);
    InstructionStatus::empty()
}
