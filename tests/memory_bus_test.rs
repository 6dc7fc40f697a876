//! Tests for BasicMemory and for driving the CPU through a custom bus.

use std::cell::Cell;

use m6502::{BasicMemory, MemoryBus, CPU};

#[test]
fn test_basic_memory_power_on_fill() {
    let memory = BasicMemory::new();
    assert_eq!(memory.fetch(0x0000), 0xFF);
    assert_eq!(memory.fetch(0xFFFF), 0xFF);
}

#[test]
fn test_store_returns_previous_value() {
    let mut memory = BasicMemory::new();
    assert_eq!(memory.store(0x1234, 0x42), 0xFF);
    assert_eq!(memory.store(0x1234, 0x43), 0x42);
    assert_eq!(memory.fetch(0x1234), 0x43);
}

#[test]
fn test_load_wraps_at_top_of_memory() {
    let mut memory = BasicMemory::new();
    memory.load(0xFFFF, &[0x01, 0x02]);
    assert_eq!(memory.fetch(0xFFFF), 0x01);
    assert_eq!(memory.fetch(0x0000), 0x02);
}

#[test]
fn test_disable_reads() {
    let mut memory = BasicMemory::new();
    memory.load(0x0200, &[0x12]);
    memory.set_disable_reads(true);

    assert!(memory.reads_disabled());
    assert_eq!(memory.fetch(0x0200), 0xFF);

    memory.set_disable_reads(false);
    assert_eq!(memory.fetch(0x0200), 0x12);
}

#[test]
fn test_disable_writes() {
    let mut memory = BasicMemory::new();
    memory.load(0x0200, &[0x12]);
    memory.set_disable_writes(true);

    assert!(memory.writes_disabled());
    assert_eq!(memory.store(0x0200, 0x99), 0x12);
    assert_eq!(memory.fetch(0x0200), 0x12);
}

#[test]
fn test_store_ignored_by_cpu_when_writes_disabled() {
    let mut memory = BasicMemory::new();
    memory.load(0xFFFC, &[0x00, 0x80]);
    memory.load(0x8000, &[0xA9, 0x42, 0x85, 0x10]);
    let mut cpu = CPU::new(memory);
    cpu.memory_mut().set_disable_writes(true);

    cpu.step().unwrap();
    cpu.step().unwrap();
    assert_eq!(cpu.memory().fetch(0x0010), 0xFF);
}

#[test]
fn test_reset_refills() {
    let mut memory = BasicMemory::new();
    memory.load(0x0000, &[0x00; 16]);
    memory.reset();
    assert_eq!(memory.fetch(0x0005), 0xFF);
}

/// Bus that counts fetches, to check the engine goes through the trait.
struct CountingBus {
    inner: BasicMemory,
    fetches: Cell<usize>,
}

impl MemoryBus for CountingBus {
    fn reset(&mut self) {
        self.inner.reset();
    }

    fn fetch(&self, addr: u16) -> u8 {
        self.fetches.set(self.fetches.get() + 1);
        self.inner.fetch(addr)
    }

    fn store(&mut self, addr: u16, value: u8) -> u8 {
        self.inner.store(addr, value)
    }
}

#[test]
fn test_cpu_over_custom_bus() {
    let mut inner = BasicMemory::new();
    inner.load(0xFFFC, &[0x00, 0x80]);
    inner.load(0x8000, &[0xAD, 0x00, 0x02]); // LDA $0200
    inner.load(0x0200, &[0x5A]);

    let mut cpu = CPU::new(CountingBus {
        inner,
        fetches: Cell::new(0),
    });
    let after_reset = cpu.memory().fetches.get();

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x5A);
    // Opcode, two operand bytes, the data byte
    assert_eq!(cpu.memory().fetches.get() - after_reset, 4);
}
