//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic
//! - CMP, CPX, CPY: Compare register with memory
//! - BIT: Bit test
//!
//! All of them read their operand, so indexed modes may report a page cross.
//!
//! ## Decimal Mode
//!
//! With decimal mode honoured and the D flag set, ADC and SBC follow NMOS BCD
//! behaviour. ADC takes Z from the binary sum and N/V from the high nibble before
//! the final adjustment. SBC takes every flag from the binary subtraction and
//! only adjusts the result.

use crate::{AddressingMode, InstructionStatus, MemoryBus, Status, CPU};

/// Binary A + value + C, setting N, V, Z and C.
fn add_binary<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.registers.a as u16;
    let m = value as u16;
    let carry = cpu.registers.p.contains(Status::CARRY) as u16;

    let p = &mut cpu.registers.p;
    let sum = p.set_carry_on_addition(a + m + carry);
    p.set_overflow_on_addition(a, m, sum);
    cpu.registers.a = p.set_zero_negative(sum as u8);
}

fn add_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.registers.a as u16;
    let m = value as u16;
    let carry = cpu.registers.p.contains(Status::CARRY) as u16;

    let mut low = (a & 0x0F) + (m & 0x0F) + carry;
    let mut high = (a >> 4) + (m >> 4);
    if low > 0x09 {
        low += 0x06;
    }
    if low > 0x0F {
        high += 1;
    }

    let p = &mut cpu.registers.p;
    p.set_zero((a + m + carry) as u8);
    p.set_negative((high << 4) as u8);
    p.set_overflow_on_addition(a, m, high << 4);

    if high > 0x09 {
        high += 0x06;
    }
    p.set(Status::CARRY, high > 0x0F);

    cpu.registers.a = ((high << 4) | (low & 0x0F)) as u8;
}

fn subtract_decimal<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.registers.a;
    let borrow = !cpu.registers.p.contains(Status::CARRY) as i16;

    // Flags come from the binary subtraction
    add_binary(cpu, !value);

    let mut low = (a & 0x0F) as i16 - (value & 0x0F) as i16 - borrow;
    let mut high = (a >> 4) as i16 - (value >> 4) as i16;
    if low < 0 {
        low -= 0x06;
        high -= 1;
    }
    if high < 0 {
        high -= 0x06;
    }

    cpu.registers.a = ((high << 4) | (low & 0x0F)) as u8;
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the unsigned sum exceeds 0xFF
/// - Zero (Z): Set if the result is 0
/// - Overflow (V): Set if two operands of equal sign give a result of the other sign
/// - Negative (N): Set if bit 7 of the result is set
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    if cpu.decimal_active() {
        add_decimal(cpu, value);
    } else {
        add_binary(cpu, value);
    }
    status
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A - M - (1 - C). In binary mode this is ADC of the operand's complement,
/// so carry clear means a borrow occurred.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    if cpu.decimal_active() {
        subtract_decimal(cpu, value);
    } else {
        add_binary(cpu, !value);
    }
    status
}

/// Executes the AND (Logical AND) instruction. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    let result = cpu.registers.a & value;
    cpu.registers.a = cpu.registers.p.set_zero_negative(result);
    status
}

/// Executes the ORA (Logical Inclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    let result = cpu.registers.a | value;
    cpu.registers.a = cpu.registers.p.set_zero_negative(result);
    status
}

/// Executes the EOR (Exclusive OR) instruction. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    let result = cpu.registers.a ^ value;
    cpu.registers.a = cpu.registers.p.set_zero_negative(result);
    status
}

/// Shared compare: C = register >= value, Z and N from register - value.
fn compare(p: &mut Status, register: u8, value: u8) {
    p.set(Status::CARRY, register >= value);
    p.set_zero_negative(register.wrapping_sub(value));
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    compare(&mut cpu.registers.p, cpu.registers.a, value);
    status
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    compare(&mut cpu.registers.p, cpu.registers.x, value);
    status
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    compare(&mut cpu.registers.p, cpu.registers.y, value);
    status
}

/// Executes the BIT (Bit Test) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M is 0
/// - Overflow (V): Bit 6 of M
/// - Negative (N): Bit 7 of M
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
) -> InstructionStatus {
    let (value, status) = cpu.read_operand(mode);
    let p = &mut cpu.registers.p;
    p.set_zero(cpu.registers.a & value);
    p.set_negative(value);
    p.set(Status::OVERFLOW, value & 0x40 != 0);
    status
}
