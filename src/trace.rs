//! # Decode Trace
//!
//! A per-step record of what the engine decoded, captured only while tracing is
//! enabled. The record is plain data filled in during execution; turning it into
//! text is a separate, pure rendering step ([`fmt::Display`]), so a disabled
//! trace costs nothing beyond a flag check.
//!
//! The rendered line keeps the fixed-width layout of the classic trace logs:
//!
//! ```text
//! 8000  A9 42     LDA #$42                        A:00 X:00 Y:00 P:24 SP:fd PC:8000
//! ```

use std::fmt;

use crate::{AddressingMode, Registers};

/// What was decoded during one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeTrace {
    /// Address of the opcode byte.
    pub address: u16,

    pub opcode: u8,

    pub mnemonic: &'static str,

    /// Addressing mode the instruction resolved, `Implicit` if it resolved none.
    pub mode: AddressingMode,

    /// Raw operand bytes following the opcode.
    pub operands: Vec<u8>,

    /// Effective address the operand resolved to.
    pub effective: Option<u16>,

    /// First byte read from (or replaced at) the effective address.
    pub value: Option<u8>,

    /// Registers before the instruction ran.
    pub registers: Registers,
}

impl DecodeTrace {
    pub fn new(address: u16, opcode: u8, mnemonic: &'static str, registers: Registers) -> Self {
        Self {
            address,
            opcode,
            mnemonic,
            mode: AddressingMode::Implicit,
            operands: Vec::new(),
            effective: None,
            value: None,
            registers,
        }
    }

    pub(crate) fn note_operand(&mut self, mode: AddressingMode, bytes: &[u8], effective: u16) {
        self.mode = mode;
        self.operands = bytes.to_vec();
        self.effective = match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => None,
            _ => Some(effective),
        };
    }

    pub(crate) fn note_value(&mut self, value: u8) {
        self.value.get_or_insert(value);
    }

    /// Operand bytes as space-separated hex, e.g. `34 12`.
    pub fn raw_operands(&self) -> String {
        self.operands
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Operand in assembler notation with resolved addresses, e.g. `$10,X @ 12 = 7F`.
    pub fn decoded_operands(&self) -> String {
        let byte = self.operands.first().copied().unwrap_or(0);
        let word = match self.operands.as_slice() {
            [low, high] => u16::from_le_bytes([*low, *high]),
            _ => byte as u16,
        };
        let effective = self.effective.unwrap_or(0);
        let regs = &self.registers;

        let mut text = match self.mode {
            AddressingMode::Implicit => String::new(),
            AddressingMode::Accumulator => "A".to_string(),
            AddressingMode::Immediate => return format!("#${byte:02X}"),
            AddressingMode::ZeroPage => format!("${byte:02X}"),
            AddressingMode::ZeroPageX => format!("${byte:02X},X @ {effective:02X}"),
            AddressingMode::ZeroPageY => format!("${byte:02X},Y @ {effective:02X}"),
            AddressingMode::Relative => format!("${effective:04X}"),
            AddressingMode::Absolute => format!("${word:04X}"),
            AddressingMode::AbsoluteX => format!("${word:04X},X @ {effective:04X}"),
            AddressingMode::AbsoluteY => format!("${word:04X},Y @ {effective:04X}"),
            AddressingMode::Indirect => format!("(${word:04X}) = {effective:04X}"),
            AddressingMode::IndirectX => format!(
                "(${byte:02X},X) @ {:02X} = {effective:04X}",
                byte.wrapping_add(regs.x)
            ),
            AddressingMode::IndirectY => format!(
                "(${byte:02X}),Y = {:04X} @ {effective:04X}",
                effective.wrapping_sub(regs.y as u16)
            ),
        };

        if let Some(value) = self.value {
            text.push_str(&format!(" = {value:02X}"));
        }
        text
    }
}

impl fmt::Display for DecodeTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04X}  {:02X} {:<5} {:>4} {:<26}  {:>25}",
            self.address,
            self.opcode,
            self.raw_operands(),
            self.mnemonic,
            self.decoded_operands(),
            self.registers.to_string()
        )
    }
}
