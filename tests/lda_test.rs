//! Tests for the load instructions (LDA, LDX, LDY).
//!
//! Tests cover:
//! - Every LDA addressing mode
//! - Flag updates (Z, N)
//! - Cycle counts including page crossing penalties

use m6502::{BasicMemory, Status, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<BasicMemory> {
    let mut memory = BasicMemory::new();
    memory.load(0xFFFC, &[0x00, 0x80]);
    CPU::new(memory)
}

// ========== Basic LDA Operation Tests ==========

#[test]
fn test_lda_immediate_basic() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x42]);

    assert_eq!(cpu.step(), Ok(2));

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.status().contains(Status::ZERO));
    assert!(!cpu.status().contains(Status::NEGATIVE));
    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_lda_zero_flag() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x00]);
    cpu.registers_mut().a = 0xFF;

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.status().contains(Status::ZERO));
    assert!(!cpu.status().contains(Status::NEGATIVE));
}

#[test]
fn test_lda_negative_flag() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA9, 0x80]);

    cpu.step().unwrap();

    assert_eq!(cpu.a(), 0x80);
    assert!(!cpu.status().contains(Status::ZERO));
    assert!(cpu.status().contains(Status::NEGATIVE));
}

// ========== Addressing Mode Tests ==========

#[test]
fn test_lda_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA5, 0x10]);
    cpu.memory_mut().load(0x0010, &[0x37]);

    assert_eq!(cpu.step(), Ok(3));
    assert_eq!(cpu.a(), 0x37);
}

#[test]
fn test_lda_zero_page_x_wraps() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB5, 0xFF]);
    cpu.memory_mut().load(0x0001, &[0x99]);
    cpu.registers_mut().x = 0x02;

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x99);
}

#[test]
fn test_lda_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xAD, 0x34, 0x12]);
    cpu.memory_mut().load(0x1234, &[0x56]);

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x56);
    assert_eq!(cpu.pc(), 0x8003);
}

#[test]
fn test_lda_absolute_x_no_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xBD, 0x00, 0x12]);
    cpu.memory_mut().load(0x1205, &[0x11]);
    cpu.registers_mut().x = 0x05;

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.a(), 0x11);
}

#[test]
fn test_lda_absolute_x_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xBD, 0xFF, 0x12]);
    cpu.memory_mut().load(0x1300, &[0x22]);
    cpu.registers_mut().x = 0x01;

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x22);
}

#[test]
fn test_lda_absolute_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB9, 0x80, 0x12]);
    cpu.memory_mut().load(0x1310, &[0x33]);
    cpu.registers_mut().y = 0x90;

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x33);
}

#[test]
fn test_lda_indirect_x() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA1, 0x20]);
    cpu.memory_mut().load(0x0024, &[0x00, 0x30]);
    cpu.memory_mut().load(0x3000, &[0x44]);
    cpu.registers_mut().x = 0x04;

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.a(), 0x44);
}

#[test]
fn test_lda_indirect_x_pointer_wraps_in_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA1, 0xFF]);
    cpu.memory_mut().load(0x00FF, &[0x00]);
    cpu.memory_mut().load(0x0000, &[0x40]);
    cpu.memory_mut().load(0x4000, &[0x66]);

    cpu.step().unwrap();
    assert_eq!(cpu.a(), 0x66);
}

#[test]
fn test_lda_indirect_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB1, 0x20]);
    cpu.memory_mut().load(0x0020, &[0x00, 0x30]);
    cpu.memory_mut().load(0x3010, &[0x55]);
    cpu.registers_mut().y = 0x10;

    assert_eq!(cpu.step(), Ok(5));
    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_lda_indirect_y_page_cross() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB1, 0x20]);
    cpu.memory_mut().load(0x0020, &[0xF0, 0x30]);
    cpu.memory_mut().load(0x3100, &[0x77]);
    cpu.registers_mut().y = 0x10;

    assert_eq!(cpu.step(), Ok(6));
    assert_eq!(cpu.a(), 0x77);
}

// ========== LDX / LDY ==========

#[test]
fn test_ldx_zero_page_y() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xB6, 0x10]);
    cpu.memory_mut().load(0x0013, &[0x80]);
    cpu.registers_mut().y = 0x03;

    assert_eq!(cpu.step(), Ok(4));
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.status().contains(Status::NEGATIVE));
}

#[test]
fn test_ldy_immediate_zero() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xA0, 0x00]);
    cpu.registers_mut().y = 0x12;

    assert_eq!(cpu.step(), Ok(2));
    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.status().contains(Status::ZERO));
}
