//! Fuzz target for CPU step execution.
//!
//! This target creates arbitrary CPU states, memory contents and pending
//! interrupts, then executes one step to find edge cases and crashes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use m6502::{BasicMemory, CpuConfig, Interrupt, Status, CPU};

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte
    p: u8,
    irq: bool,
    nmi: bool,
    decimal_mode: bool,
    break_is_error: bool,
    trace: bool,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = BasicMemory::new();

    // Reset -> 0x8000, NMI -> 0x9000, IRQ/BRK -> 0x9000
    memory.load(0xFFFA, &[0x00, 0x90, 0x00, 0x80, 0x00, 0x90]);
    memory.load(0x8000, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let state = &input.cpu_state;
    let config = CpuConfig {
        decimal_mode: state.decimal_mode,
        break_is_error: state.break_is_error,
        trace: state.trace,
    };
    let mut cpu = CPU::with_config(memory, config);

    {
        let registers = cpu.registers_mut();
        registers.a = state.a;
        registers.x = state.x;
        registers.y = state.y;
        registers.sp = state.sp;
        registers.p = Status::pulled(state.p);
    }
    cpu.set_interrupt(Interrupt::Irq, state.irq);
    cpu.set_interrupt(Interrupt::Nmi, state.nmi);

    let before = cpu.cycles();
    let result = cpu.step();

    // Invariants that must hold whatever the input
    assert!(cpu.status().contains(Status::UNUSED));
    if let Ok(cycles) = result {
        assert_eq!(cpu.cycles() - before, cycles as u64);
        assert!(cycles <= 14);
    }
    if let Some(trace) = cpu.last_trace() {
        let _ = trace.to_string();
    }
});
