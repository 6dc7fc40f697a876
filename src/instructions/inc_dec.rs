//! # Increment and Decrement Instructions
//!
//! - INC/DEC: Increment/Decrement memory (read-modify-write)
//! - INX/INY: Increment X/Y
//! - DEX/DEY: Decrement X/Y
//!
//! All wrap at 8 bits and set Z and N from the result. Carry and Overflow are
//! never touched.

use crate::{AddressingMode, InstructionStatus, MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    cpu.read_modify_write(mode, |p, value| p.set_zero_negative(value.wrapping_add(1)))
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    cpu.read_modify_write(mode, |p, value| p.set_zero_negative(value.wrapping_sub(1)))
}

pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.x = cpu.registers.p.set_zero_negative(cpu.registers.x.wrapping_add(1));
    InstructionStatus::empty()
}

pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.y = cpu.registers.p.set_zero_negative(cpu.registers.y.wrapping_add(1));
    InstructionStatus::empty()
}

pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.x = cpu.registers.p.set_zero_negative(cpu.registers.x.wrapping_sub(1));
    InstructionStatus::empty()
}

pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _mode: AddressingMode,
) -> InstructionStatus {
    cpu.registers.y = cpu.registers.p.set_zero_negative(cpu.registers.y.wrapping_sub(1));
    InstructionStatus::empty()
}
