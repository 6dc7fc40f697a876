//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502 instructions,
//! organized by category. Each instruction is a standalone function matching
//! [`Exec`](crate::Exec): it takes the CPU (with PC just past the opcode) and the
//! addressing mode it was registered with, does its work, and reports page
//! crossing or a taken branch back to the engine.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingMode, Instruction, InstructionStatus, InstructionTable, MemoryBus, Status, CPU};

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` and fetches the byte it addresses.
    ///
    /// The status carries `PAGE_CROSSED` when indexing crossed a page, which
    /// read instructions hand straight back to the engine.
    pub(crate) fn read_operand(&mut self, mode: AddressingMode) -> (u8, InstructionStatus) {
        let operand = self.resolve(mode);
        let value = self.read(operand.address);
        let status = if operand.page_crossed {
            InstructionStatus::PAGE_CROSSED
        } else {
            InstructionStatus::empty()
        };
        (value, status)
    }

    /// Applies `op` to the accumulator or to the byte at the resolved address
    /// and writes the result back.
    pub(crate) fn read_modify_write(
        &mut self,
        mode: AddressingMode,
        op: impl FnOnce(&mut Status, u8) -> u8,
    ) -> InstructionStatus {
        if mode == AddressingMode::Accumulator {
            self.resolve(mode);
            self.registers.a = op(&mut self.registers.p, self.registers.a);
        } else {
            let addr = self.resolve(mode).address;
            let value = self.memory.fetch(addr);
            let result = op(&mut self.registers.p, value);
            self.write(addr, result);
        }

        // Read-modify-write always pays its worst case; both tables agree.
        InstructionStatus::empty()
    }
}

macro_rules! register {
    ($table:ident; $($opcode:literal $mnemonic:literal $mode:ident $exec:path;)*) => {
        $(
            $table.add(Instruction::new($opcode, $mnemonic, AddressingMode::$mode, $exec));
        )*
    };
}

/// Fills `table` with the 151 documented NMOS opcodes.
pub(crate) fn register_official<M: MemoryBus>(table: &mut InstructionTable<M>) {
    register! { table;
        // Load / store
        0xA9 "LDA" Immediate load_store::execute_lda;
        0xA5 "LDA" ZeroPage load_store::execute_lda;
        0xB5 "LDA" ZeroPageX load_store::execute_lda;
        0xAD "LDA" Absolute load_store::execute_lda;
        0xBD "LDA" AbsoluteX load_store::execute_lda;
        0xB9 "LDA" AbsoluteY load_store::execute_lda;
        0xA1 "LDA" IndirectX load_store::execute_lda;
        0xB1 "LDA" IndirectY load_store::execute_lda;
        0xA2 "LDX" Immediate load_store::execute_ldx;
        0xA6 "LDX" ZeroPage load_store::execute_ldx;
        0xB6 "LDX" ZeroPageY load_store::execute_ldx;
        0xAE "LDX" Absolute load_store::execute_ldx;
        0xBE "LDX" AbsoluteY load_store::execute_ldx;
        0xA0 "LDY" Immediate load_store::execute_ldy;
        0xA4 "LDY" ZeroPage load_store::execute_ldy;
        0xB4 "LDY" ZeroPageX load_store::execute_ldy;
        0xAC "LDY" Absolute load_store::execute_ldy;
        0xBC "LDY" AbsoluteX load_store::execute_ldy;
        0x85 "STA" ZeroPage load_store::execute_sta;
        0x95 "STA" ZeroPageX load_store::execute_sta;
        0x8D "STA" Absolute load_store::execute_sta;
        0x9D "STA" AbsoluteX load_store::execute_sta;
        0x99 "STA" AbsoluteY load_store::execute_sta;
        0x81 "STA" IndirectX load_store::execute_sta;
        0x91 "STA" IndirectY load_store::execute_sta;
        0x86 "STX" ZeroPage load_store::execute_stx;
        0x96 "STX" ZeroPageY load_store::execute_stx;
        0x8E "STX" Absolute load_store::execute_stx;
        0x84 "STY" ZeroPage load_store::execute_sty;
        0x94 "STY" ZeroPageX load_store::execute_sty;
        0x8C "STY" Absolute load_store::execute_sty;

        // Arithmetic and logic
        0x69 "ADC" Immediate alu::execute_adc;
        0x65 "ADC" ZeroPage alu::execute_adc;
        0x75 "ADC" ZeroPageX alu::execute_adc;
        0x6D "ADC" Absolute alu::execute_adc;
        0x7D "ADC" AbsoluteX alu::execute_adc;
        0x79 "ADC" AbsoluteY alu::execute_adc;
        0x61 "ADC" IndirectX alu::execute_adc;
        0x71 "ADC" IndirectY alu::execute_adc;
        0xE9 "SBC" Immediate alu::execute_sbc;
        0xE5 "SBC" ZeroPage alu::execute_sbc;
        0xF5 "SBC" ZeroPageX alu::execute_sbc;
        0xED "SBC" Absolute alu::execute_sbc;
        0xFD "SBC" AbsoluteX alu::execute_sbc;
        0xF9 "SBC" AbsoluteY alu::execute_sbc;
        0xE1 "SBC" IndirectX alu::execute_sbc;
        0xF1 "SBC" IndirectY alu::execute_sbc;
        0x29 "AND" Immediate alu::execute_and;
        0x25 "AND" ZeroPage alu::execute_and;
        0x35 "AND" ZeroPageX alu::execute_and;
        0x2D "AND" Absolute alu::execute_and;
        0x3D "AND" AbsoluteX alu::execute_and;
        0x39 "AND" AbsoluteY alu::execute_and;
        0x21 "AND" IndirectX alu::execute_and;
        0x31 "AND" IndirectY alu::execute_and;
        0x09 "ORA" Immediate alu::execute_ora;
        0x05 "ORA" ZeroPage alu::execute_ora;
        0x15 "ORA" ZeroPageX alu::execute_ora;
        0x0D "ORA" Absolute alu::execute_ora;
        0x1D "ORA" AbsoluteX alu::execute_ora;
        0x19 "ORA" AbsoluteY alu::execute_ora;
        0x01 "ORA" IndirectX alu::execute_ora;
        0x11 "ORA" IndirectY alu::execute_ora;
        0x49 "EOR" Immediate alu::execute_eor;
        0x45 "EOR" ZeroPage alu::execute_eor;
        0x55 "EOR" ZeroPageX alu::execute_eor;
        0x4D "EOR" Absolute alu::execute_eor;
        0x5D "EOR" AbsoluteX alu::execute_eor;
        0x59 "EOR" AbsoluteY alu::execute_eor;
        0x41 "EOR" IndirectX alu::execute_eor;
        0x51 "EOR" IndirectY alu::execute_eor;
        0xC9 "CMP" Immediate alu::execute_cmp;
        0xC5 "CMP" ZeroPage alu::execute_cmp;
        0xD5 "CMP" ZeroPageX alu::execute_cmp;
        0xCD "CMP" Absolute alu::execute_cmp;
        0xDD "CMP" AbsoluteX alu::execute_cmp;
        0xD9 "CMP" AbsoluteY alu::execute_cmp;
        0xC1 "CMP" IndirectX alu::execute_cmp;
        0xD1 "CMP" IndirectY alu::execute_cmp;
        0xE0 "CPX" Immediate alu::execute_cpx;
        0xE4 "CPX" ZeroPage alu::execute_cpx;
        0xEC "CPX" Absolute alu::execute_cpx;
        0xC0 "CPY" Immediate alu::execute_cpy;
        0xC4 "CPY" ZeroPage alu::execute_cpy;
        0xCC "CPY" Absolute alu::execute_cpy;
        0x24 "BIT" ZeroPage alu::execute_bit;
        0x2C "BIT" Absolute alu::execute_bit;

        // Shifts and rotates
        0x0A "ASL" Accumulator shifts::execute_asl;
        0x06 "ASL" ZeroPage shifts::execute_asl;
        0x16 "ASL" ZeroPageX shifts::execute_asl;
        0x0E "ASL" Absolute shifts::execute_asl;
        0x1E "ASL" AbsoluteX shifts::execute_asl;
        0x4A "LSR" Accumulator shifts::execute_lsr;
        0x46 "LSR" ZeroPage shifts::execute_lsr;
        0x56 "LSR" ZeroPageX shifts::execute_lsr;
        0x4E "LSR" Absolute shifts::execute_lsr;
        0x5E "LSR" AbsoluteX shifts::execute_lsr;
        0x2A "ROL" Accumulator shifts::execute_rol;
        0x26 "ROL" ZeroPage shifts::execute_rol;
        0x36 "ROL" ZeroPageX shifts::execute_rol;
        0x2E "ROL" Absolute shifts::execute_rol;
        0x3E "ROL" AbsoluteX shifts::execute_rol;
        0x6A "ROR" Accumulator shifts::execute_ror;
        0x66 "ROR" ZeroPage shifts::execute_ror;
        0x76 "ROR" ZeroPageX shifts::execute_ror;
        0x6E "ROR" Absolute shifts::execute_ror;
        0x7E "ROR" AbsoluteX shifts::execute_ror;

        // Increment / decrement
        0xE6 "INC" ZeroPage inc_dec::execute_inc;
        0xF6 "INC" ZeroPageX inc_dec::execute_inc;
        0xEE "INC" Absolute inc_dec::execute_inc;
        0xFE "INC" AbsoluteX inc_dec::execute_inc;
        0xC6 "DEC" ZeroPage inc_dec::execute_dec;
        0xD6 "DEC" ZeroPageX inc_dec::execute_dec;
        0xCE "DEC" Absolute inc_dec::execute_dec;
        0xDE "DEC" AbsoluteX inc_dec::execute_dec;
        0xE8 "INX" Implicit inc_dec::execute_inx;
        0xC8 "INY" Implicit inc_dec::execute_iny;
        0xCA "DEX" Implicit inc_dec::execute_dex;
        0x88 "DEY" Implicit inc_dec::execute_dey;

        // Branches
        0x90 "BCC" Relative branches::execute_bcc;
        0xB0 "BCS" Relative branches::execute_bcs;
        0xF0 "BEQ" Relative branches::execute_beq;
        0xD0 "BNE" Relative branches::execute_bne;
        0x30 "BMI" Relative branches::execute_bmi;
        0x10 "BPL" Relative branches::execute_bpl;
        0x50 "BVC" Relative branches::execute_bvc;
        0x70 "BVS" Relative branches::execute_bvs;

        // Control flow
        0x00 "BRK" Implicit control::execute_brk;
        0x4C "JMP" Absolute control::execute_jmp;
        0x6C "JMP" Indirect control::execute_jmp;
        0x20 "JSR" Absolute control::execute_jsr;
        0x60 "RTS" Implicit control::execute_rts;
        0x40 "RTI" Implicit control::execute_rti;
        0xEA "NOP" Implicit control::execute_nop;

        // Stack
        0x48 "PHA" Implicit stack::execute_pha;
        0x08 "PHP" Implicit stack::execute_php;
        0x68 "PLA" Implicit stack::execute_pla;
        0x28 "PLP" Implicit stack::execute_plp;

        // Flags
        0x18 "CLC" Implicit flags::execute_clc;
        0x38 "SEC" Implicit flags::execute_sec;
        0x58 "CLI" Implicit flags::execute_cli;
        0x78 "SEI" Implicit flags::execute_sei;
        0xD8 "CLD" Implicit flags::execute_cld;
        0xF8 "SED" Implicit flags::execute_sed;
        0xB8 "CLV" Implicit flags::execute_clv;

        // Transfers
        0xAA "TAX" Implicit transfer::execute_tax;
        0xA8 "TAY" Implicit transfer::execute_tay;
        0x8A "TXA" Implicit transfer::execute_txa;
        0x98 "TYA" Implicit transfer::execute_tya;
        0xBA "TSX" Implicit transfer::execute_tsx;
        0x9A "TXS" Implicit transfer::execute_txs;
    }
}
