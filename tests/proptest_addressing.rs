//! Property-based tests for effective-address resolution.

use m6502::addressing::same_page;
use m6502::{BasicMemory, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<BasicMemory> {
    let mut memory = BasicMemory::new();
    memory.load(0xFFFC, &[0x00, 0x80]);
    CPU::new(memory)
}

proptest! {
    #[test]
    fn prop_same_page_matches_high_byte(a: u16, b: u16) {
        prop_assert_eq!(same_page(a, b), a >> 8 == b >> 8);
    }

    /// LDA zp,X never leaves page zero.
    #[test]
    fn prop_zero_page_x_wraps(base: u8, x: u8, value: u8) {
        let mut cpu = setup_cpu();
        let target = base.wrapping_add(x) as u16;
        cpu.memory_mut().load(0x8000, &[0xB5, base]);
        cpu.memory_mut().load(target, &[value]);
        cpu.registers_mut().x = x;

        prop_assert_eq!(cpu.step(), Ok(4));
        prop_assert_eq!(cpu.a(), value);
    }

    /// LDA abs,Y pays one extra cycle exactly when the page changes.
    #[test]
    fn prop_absolute_y_page_cross_cost(base in 0x0200u16..0x7F00, y: u8) {
        let mut cpu = setup_cpu();
        let [low, high] = base.to_le_bytes();
        cpu.memory_mut().load(0x8000, &[0xB9, low, high]);
        cpu.registers_mut().y = y;

        let expected = if same_page(base, base + y as u16) { 4 } else { 5 };
        prop_assert_eq!(cpu.step(), Ok(expected));
    }

    /// LDA (zp),Y compares the pointer base, not the zero-page address.
    #[test]
    fn prop_indirect_y_page_cross_cost(zp in 0u8..0xFF, pointer in 0x0200u16..0x7F00, y: u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xB1, zp]);
        cpu.memory_mut().load(zp as u16, &pointer.to_le_bytes());
        cpu.registers_mut().y = y;

        let expected = if same_page(pointer, pointer + y as u16) { 5 } else { 6 };
        prop_assert_eq!(cpu.step(), Ok(expected));
    }

    /// Branch targets are relative to the following instruction.
    #[test]
    fn prop_branch_target(offset: u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xD0, offset]);

        let cycles = cpu.step().unwrap();
        let target = 0x8002u16.wrapping_add_signed(offset as i8 as i16);
        prop_assert_eq!(cpu.pc(), target);
        prop_assert_eq!(cycles, if same_page(0x8002, target) { 3 } else { 4 });
    }
}
