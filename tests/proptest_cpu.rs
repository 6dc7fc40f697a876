//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to verify that CPU operations maintain
//! fundamental invariants across all possible input combinations.

use m6502::{BasicMemory, InstructionStatus, InstructionTable, MemoryBus, Status, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<BasicMemory> {
    let mut memory = BasicMemory::new();
    memory.load(0xFFFC, &[0x00, 0x80]);
    CPU::new(memory)
}

/// Every documented opcode.
fn official_opcodes() -> Vec<u8> {
    InstructionTable::<BasicMemory>::official()
        .iter()
        .map(|i| i.opcode)
        .collect()
}

proptest! {
    /// Any documented opcode executes and costs between 2 and 7 cycles.
    #[test]
    fn prop_official_opcode_cost_bounded(
        opcode in prop::sample::select(official_opcodes()),
        operands: [u8; 2],
        a: u8,
        x: u8,
        y: u8,
        p: u8,
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, operands[0], operands[1]]);
        {
            let registers = cpu.registers_mut();
            registers.a = a;
            registers.x = x;
            registers.y = y;
            registers.p = Status::pulled(p);
        }

        let cycles = cpu.step().unwrap();
        prop_assert!((2..=7).contains(&cycles), "0x{:02X} took {}", opcode, cycles);
        prop_assert_eq!(cpu.cycles(), cycles as u64);
    }

    /// The unused bit reads as 1 after any instruction.
    #[test]
    fn prop_unused_flag_always_set(
        opcode in prop::sample::select(official_opcodes()),
        stack: u8,
    ) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, 0x00, 0x02]);
        cpu.memory_mut().load(0x01FE, &[stack]);

        cpu.step().unwrap();
        prop_assert!(cpu.status().contains(Status::UNUSED));
    }

    #[test]
    fn prop_pulled_status_never_has_break(byte: u8) {
        let status = Status::pulled(byte);
        prop_assert!(!status.contains(Status::BREAK_COMMAND));
        prop_assert!(status.contains(Status::UNUSED));
        prop_assert_eq!(status.bits() & 0xCF, byte & 0xCF);
    }

    #[test]
    fn prop_pushed_status_sets_unused(bits: u8, brk: bool) {
        let byte = Status::from_bits_retain(bits).pushed(brk);
        prop_assert_eq!(byte & 0x20, 0x20);
        prop_assert_eq!(byte & 0x10 != 0, brk);
    }

    /// PHA stores at 0x0100 | SP and SP wraps within the page.
    #[test]
    fn prop_push_wraps_in_stack_page(sp: u8, a: u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x48, 0x68]);
        cpu.registers_mut().sp = sp;
        cpu.registers_mut().a = a;

        cpu.step().unwrap();
        prop_assert_eq!(cpu.sp(), sp.wrapping_sub(1));
        prop_assert_eq!(cpu.memory().fetch(0x0100 | sp as u16), a);

        cpu.registers_mut().a = !a;
        cpu.step().unwrap();
        prop_assert_eq!(cpu.sp(), sp);
        prop_assert_eq!(cpu.a(), a);
    }

    /// Binary ADC agrees with widened integer addition.
    #[test]
    fn prop_adc_binary(a: u8, m: u8, carry: bool) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0x69, m]);
        cpu.registers_mut().a = a;
        cpu.registers_mut().p.set(Status::CARRY, carry);

        cpu.step().unwrap();
        let sum = a as u16 + m as u16 + carry as u16;
        prop_assert_eq!(cpu.a(), sum as u8);
        prop_assert_eq!(cpu.status().contains(Status::CARRY), sum > 0xFF);
        prop_assert_eq!(cpu.status().contains(Status::ZERO), sum as u8 == 0);
        prop_assert_eq!(cpu.status().contains(Status::NEGATIVE), sum & 0x80 != 0);
    }

    /// CMP never changes A and sets C exactly when A >= M.
    #[test]
    fn prop_cmp(a: u8, m: u8) {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xC9, m]);
        cpu.registers_mut().a = a;

        cpu.step().unwrap();
        prop_assert_eq!(cpu.a(), a);
        prop_assert_eq!(cpu.status().contains(Status::CARRY), a >= m);
        prop_assert_eq!(cpu.status().contains(Status::ZERO), a == m);
    }

    /// set_zero_negative touches only Z and N, and passes the value through.
    #[test]
    fn prop_set_zero_negative_is_pure(p: u8, v: u8) {
        let mut after = Status::from_bits_retain(p);

        prop_assert_eq!(after.set_zero_negative(v), v);
        prop_assert_eq!(after.bits() & 0x7D, p & 0x7D);
        prop_assert_eq!(after.contains(Status::ZERO), v == 0);
        prop_assert_eq!(after.contains(Status::NEGATIVE), v & 0x80 != 0);
    }

    /// The page-cross table is never cheaper than the base table.
    #[test]
    fn prop_page_cross_never_cheaper(opcode: u8) {
        let table = InstructionTable::<BasicMemory>::official();
        let base = table.cycles(opcode, InstructionStatus::empty());
        let crossed = table.cycles(opcode, InstructionStatus::PAGE_CROSSED);
        prop_assert!(crossed >= base);
    }
}
