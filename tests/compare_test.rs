//! Tests for CMP, CPX and CPY.

use emu6502::{AddressSpace, Cpu};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup() -> (Cpu, AddressSpace) {
    let mut memory = AddressSpace::new();
    memory.write_word(0xFFFC, 0x8000);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

fn cmp_immediate(a: u8, operand: u8) -> Cpu {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0xC9);
    memory.write(0x8001, operand);
    cpu.set_a(a);
    cpu.step(&mut memory).unwrap();
    cpu
}

#[test]
fn test_cmp_equal() {
    let cpu = cmp_immediate(0x42, 0x42);
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
    assert_eq!(cpu.a(), 0x42);
}

#[test]
fn test_cmp_greater() {
    let cpu = cmp_immediate(0x50, 0x10);
    assert!(!cpu.flag_z());
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_less() {
    let cpu = cmp_immediate(0x10, 0x50);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_cmp_is_unsigned() {
    // 0x80 - 0x01 = 0x7F: carry set, N clear
    let cpu = cmp_immediate(0x80, 0x01);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_cmp_leaves_overflow() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0xC9);
    memory.write(0x8001, 0x01);
    cpu.set_flag_v(true);

    cpu.step(&mut memory).unwrap();
    assert!(cpu.flag_v());
}

#[test]
fn test_cpx_zero_page() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0xE4);
    memory.write(0x8001, 0x10);
    memory.write(0x0010, 0x05);
    cpu.set_x(0x05);

    assert_eq!(cpu.step(&mut memory), Ok(3));
    assert!(cpu.flag_z());
    assert!(cpu.flag_c());
}

#[test]
fn test_cpy_absolute() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0xCC);
    memory.write(0x8001, 0x00);
    memory.write(0x8002, 0x30);
    memory.write(0x3000, 0x09);
    cpu.set_y(0x08);

    assert_eq!(cpu.step(&mut memory), Ok(4));
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}
