//! # Instruction Table
//!
//! A flat 256-slot registry mapping an opcode byte to its instruction, plus the
//! two cycle-cost tables the engine charges from.
//!
//! Slots are filled by direct index: [`InstructionTable::add`] overwrites whatever
//! was registered for that opcode, [`InstructionTable::remove`] empties it. An
//! empty slot makes dispatch fail with
//! [`ExecutionError::UnimplementedOpcode`](crate::ExecutionError::UnimplementedOpcode)
//! instead of panicking.
//!
//! ## Registering Custom Instructions
//!
//! ```rust
//! use m6502::{AddressingMode, BasicMemory, Instruction, InstructionStatus, MemoryBus, CPU};
//!
//! // Undocumented 0x1A: a one-byte NOP on NMOS parts
//! fn nop<M: MemoryBus>(_cpu: &mut CPU<M>, _mode: AddressingMode) -> InstructionStatus {
//!     InstructionStatus::empty()
//! }
//!
//! let mut cpu = CPU::new(BasicMemory::new());
//! let table = cpu.instructions_mut();
//! table.add(Instruction::new(0x1A, "NOP", AddressingMode::Implicit, nop));
//! table.set_cycles(0x1A, 2, 2);
//! assert!(table.get(0x1A).is_some());
//! ```

use std::fmt;

use bitflags::bitflags;

use crate::opcodes::{CYCLES, CYCLES_PAGE_CROSS};
use crate::{AddressingMode, MemoryBus, CPU};

bitflags! {
    /// What an instruction reports back to the engine for cycle accounting.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct InstructionStatus: u8 {
        /// Charge from the page-cross cost table.
        const PAGE_CROSSED = 0b01;
        /// Charge one extra cycle for a taken branch.
        const BRANCH_TAKEN = 0b10;
    }
}

/// Behaviour of an instruction: performs addressing, memory access, register
/// and flag updates for the given mode.
pub type Exec<M> = fn(&mut CPU<M>, AddressingMode) -> InstructionStatus;

/// A registered instruction. Identity is the opcode.
pub struct Instruction<M: MemoryBus> {
    /// Instruction mnemonic (e.g. "LDA").
    pub mnemonic: &'static str,

    /// Opcode slot this instruction occupies.
    pub opcode: u8,

    /// Addressing mode passed to `exec`.
    pub mode: AddressingMode,

    /// The behaviour.
    pub exec: Exec<M>,
}

impl<M: MemoryBus> Instruction<M> {
    pub fn new(opcode: u8, mnemonic: &'static str, mode: AddressingMode, exec: Exec<M>) -> Self {
        Self {
            mnemonic,
            opcode,
            mode,
            exec,
        }
    }
}

impl<M: MemoryBus> Clone for Instruction<M> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: MemoryBus> Copy for Instruction<M> {}

impl<M: MemoryBus> fmt::Debug for Instruction<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("opcode", &format_args!("0x{:02X}", self.opcode))
            .field("mode", &self.mode)
            .finish()
    }
}

/// Opcode registry and cycle-cost tables.
pub struct InstructionTable<M: MemoryBus> {
    opcodes: [Option<Instruction<M>>; 256],
    cycles: [u8; 256],
    cycles_page_cross: [u8; 256],
}

impl<M: MemoryBus> InstructionTable<M> {
    /// An empty registry carrying the official NMOS cycle tables.
    pub fn new() -> Self {
        Self {
            opcodes: [None; 256],
            cycles: CYCLES,
            cycles_page_cross: CYCLES_PAGE_CROSS,
        }
    }

    /// A registry holding all 151 documented NMOS instructions.
    pub fn official() -> Self {
        let mut table = Self::new();
        crate::instructions::register_official(&mut table);
        table
    }

    /// Registers `instruction` in its opcode slot, replacing any previous entry.
    pub fn add(&mut self, instruction: Instruction<M>) {
        self.opcodes[instruction.opcode as usize] = Some(instruction);
    }

    /// Empties a slot, returning what was registered there.
    pub fn remove(&mut self, opcode: u8) -> Option<Instruction<M>> {
        self.opcodes[opcode as usize].take()
    }

    pub fn get(&self, opcode: u8) -> Option<Instruction<M>> {
        self.opcodes[opcode as usize]
    }

    /// Overrides both cycle costs for one opcode.
    pub fn set_cycles(&mut self, opcode: u8, base: u8, page_cross: u8) {
        self.cycles[opcode as usize] = base;
        self.cycles_page_cross[opcode as usize] = page_cross;
    }

    /// Cycles charged for `opcode` given what the instruction reported.
    pub fn cycles(&self, opcode: u8, status: InstructionStatus) -> u16 {
        let table = if status.contains(InstructionStatus::PAGE_CROSSED) {
            &self.cycles_page_cross
        } else {
            &self.cycles
        };
        let mut cycles = table[opcode as usize] as u16;
        if status.contains(InstructionStatus::BRANCH_TAKEN) {
            cycles += 1;
        }
        cycles
    }

    /// Number of populated slots.
    pub fn len(&self) -> usize {
        self.opcodes.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Populated slots in opcode order.
    pub fn iter(&self) -> impl Iterator<Item = &Instruction<M>> {
        self.opcodes.iter().flatten()
    }
}

impl<M: MemoryBus> Default for InstructionTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BasicMemory;

    fn marker<M: MemoryBus>(cpu: &mut CPU<M>, _mode: AddressingMode) -> InstructionStatus {
        cpu.registers.a = 0xEE;
        InstructionStatus::empty()
    }

    #[test]
    fn test_new_table_is_empty() {
        let table = InstructionTable::<BasicMemory>::new();
        assert!(table.is_empty());
        assert!(table.get(0xA9).is_none());
    }

    #[test]
    fn test_official_table() {
        let table = InstructionTable::<BasicMemory>::official();
        assert_eq!(table.len(), 151);
        for instruction in table.iter() {
            assert!(
                CYCLES[instruction.opcode as usize] > 0,
                "{} (0x{:02X}) has no cycle cost",
                instruction.mnemonic,
                instruction.opcode
            );
        }
    }

    #[test]
    fn test_add_overwrites() {
        let mut table = InstructionTable::<BasicMemory>::official();
        table.add(Instruction::new(0xA9, "XXX", AddressingMode::Implicit, marker));
        assert_eq!(table.len(), 151);
        assert_eq!(table.get(0xA9).map(|i| i.mnemonic), Some("XXX"));
    }

    #[test]
    fn test_remove() {
        let mut table = InstructionTable::<BasicMemory>::official();
        let removed = table.remove(0xEA);
        assert_eq!(removed.map(|i| i.mnemonic), Some("NOP"));
        assert!(table.get(0xEA).is_none());
        assert!(table.remove(0xEA).is_none());
        assert_eq!(table.len(), 150);
    }

    #[test]
    fn test_cycle_selection() {
        let table = InstructionTable::<BasicMemory>::new();
        assert_eq!(table.cycles(0xBD, InstructionStatus::empty()), 4);
        assert_eq!(table.cycles(0xBD, InstructionStatus::PAGE_CROSSED), 5);
        assert_eq!(table.cycles(0xD0, InstructionStatus::BRANCH_TAKEN), 3);
        assert_eq!(
            table.cycles(
                0xD0,
                InstructionStatus::BRANCH_TAKEN | InstructionStatus::PAGE_CROSSED
            ),
            4
        );
    }

    #[test]
    fn test_set_cycles() {
        let mut table = InstructionTable::<BasicMemory>::new();
        table.set_cycles(0x02, 3, 4);
        assert_eq!(table.cycles(0x02, InstructionStatus::empty()), 3);
        assert_eq!(table.cycles(0x02, InstructionStatus::PAGE_CROSSED), 4);
    }
}
