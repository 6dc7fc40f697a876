//! # Addressing Modes
//!
//! This module defines the 13 addressing modes supported by the 6502 processor
//! and the resolver that turns the operand bytes following an opcode into an
//! effective address.
//!
//! Resolution always starts with the program counter pointing at the first
//! operand byte. The resolver consumes the operand bytes, leaves the program
//! counter on the next opcode, and reports whether indexing moved the address
//! onto a different page. Immediate mode resolves to the address *of* the operand;
//! callers fetch the value themselves.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80,X (load from address 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80,Y (load from address 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label (branch if zero flag set, offset is relative to PC)
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X (load from address 0x1234 + X)
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y (load from address 0x1234 + Y)
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer.
    ///
    /// Example: JMP ($FFFC) (jump to address stored at 0xFFFC/0xFFFD)
    /// Only used by JMP instruction.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X) (add X to 0x40, read 16-bit address from that ZP location, load from result)
    /// Operand is added to X within zero page, then dereferenced.
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y (read 16-bit address from ZP 0x40, add Y, load from result)
    /// Operand is dereferenced to get base address, then Y is added.
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u16 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// Effective address. For implied and accumulator modes this is the
    /// unchanged program counter and carries no meaning.
    pub address: u16,

    /// Indexing (or a taken branch) landed on a different page than the base.
    pub page_crossed: bool,
}

impl Operand {
    const fn at(address: u16) -> Self {
        Self {
            address,
            page_crossed: false,
        }
    }
}

/// Returns true if both addresses lie in the same 256-byte page.
///
/// ```
/// use m6502::addressing::same_page;
///
/// assert!(same_page(0x0101, 0x01FF));
/// assert!(!same_page(0x01FF, 0x0200));
/// ```
pub const fn same_page(a: u16, b: u16) -> bool {
    (a ^ b) >> 8 == 0
}

impl<M: MemoryBus> CPU<M> {
    /// Fetches the byte at PC and advances PC past it.
    pub(crate) fn next_byte(&mut self) -> u8 {
        let value = self.memory.fetch(self.registers.pc);
        self.registers.pc = self.registers.pc.wrapping_add(1);
        value
    }

    /// Fetches a little-endian word at PC and advances PC past it.
    pub(crate) fn next_word(&mut self) -> u16 {
        let low = self.next_byte() as u16;
        let high = self.next_byte() as u16;
        (high << 8) | low
    }

    /// Reads a little-endian word from memory without touching PC.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let low = self.memory.fetch(addr) as u16;
        let high = self.memory.fetch(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Reads a pointer stored in page zero. The high byte wraps within page zero.
    fn zero_page_word(&self, zp: u8) -> u16 {
        let low = self.memory.fetch(zp as u16) as u16;
        let high = self.memory.fetch(zp.wrapping_add(1) as u16) as u16;
        (high << 8) | low
    }

    fn zero_page_indexed(&mut self, index: u8) -> Operand {
        let base = self.next_byte();
        Operand::at(base.wrapping_add(index) as u16)
    }

    fn absolute_indexed(&mut self, index: u8) -> Operand {
        let base = self.next_word();
        let address = base.wrapping_add(index as u16);
        Operand {
            address,
            page_crossed: !same_page(base, address),
        }
    }

    /// Resolves `mode` against the operand bytes at PC.
    pub(crate) fn resolve(&mut self, mode: AddressingMode) -> Operand {
        let start = self.registers.pc;

        let operand = match mode {
            AddressingMode::Implicit | AddressingMode::Accumulator => Operand::at(start),
            AddressingMode::Immediate => {
                self.registers.pc = start.wrapping_add(1);
                Operand::at(start)
            }
            AddressingMode::ZeroPage => Operand::at(self.next_byte() as u16),
            AddressingMode::ZeroPageX => self.zero_page_indexed(self.registers.x),
            AddressingMode::ZeroPageY => self.zero_page_indexed(self.registers.y),
            AddressingMode::Relative => {
                let offset = self.next_byte() as i8;
                let next = self.registers.pc;
                let target = next.wrapping_add_signed(offset as i16);
                Operand {
                    address: target,
                    page_crossed: !same_page(next, target),
                }
            }
            AddressingMode::Absolute => Operand::at(self.next_word()),
            AddressingMode::AbsoluteX => self.absolute_indexed(self.registers.x),
            AddressingMode::AbsoluteY => self.absolute_indexed(self.registers.y),
            AddressingMode::Indirect => {
                // NMOS bug: the pointer's high byte never carries into the next page.
                let pointer = self.next_word();
                let high_addr = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let low = self.memory.fetch(pointer) as u16;
                let high = self.memory.fetch(high_addr) as u16;
                Operand::at((high << 8) | low)
            }
            AddressingMode::IndirectX => {
                let zp = self.next_byte().wrapping_add(self.registers.x);
                Operand::at(self.zero_page_word(zp))
            }
            AddressingMode::IndirectY => {
                let zp = self.next_byte();
                let base = self.zero_page_word(zp);
                let address = base.wrapping_add(self.registers.y as u16);
                Operand {
                    address,
                    page_crossed: !same_page(base, address),
                }
            }
        };

        if let Some(trace) = self.trace.as_mut() {
            let mut bytes = [0u8; 2];
            let count = mode.operand_bytes();
            for (i, byte) in bytes.iter_mut().take(count as usize).enumerate() {
                *byte = self.memory.fetch(start.wrapping_add(i as u16));
            }
            trace.note_operand(mode, &bytes[..count as usize], operand.address);
        }

        operand
    }
}
