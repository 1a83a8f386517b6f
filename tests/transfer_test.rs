//! Tests for the register transfer instructions.

use emu6502::{AddressSpace, Cpu};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup() -> (Cpu, AddressSpace) {
    let mut memory = AddressSpace::new();
    memory.write_word(0xFFFC, 0x8000);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

#[test]
fn test_tax() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0xAA);
    cpu.set_a(0x80);

    assert_eq!(cpu.step(&mut memory), Ok(2));
    assert_eq!(cpu.x(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_tay_zero() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0xA8);
    cpu.set_y(0x33);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_txa() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x8A);
    cpu.set_x(0x12);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0x12);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_tya() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x98);
    cpu.set_y(0xF0);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx_sets_flags() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0xBA);

    assert_eq!(cpu.step(&mut memory), Ok(2));
    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_sets_no_flags() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x9A);
    cpu.set_x(0x00);

    assert_eq!(cpu.step(&mut memory), Ok(2));
    assert_eq!(cpu.sp(), 0x00);
    assert!(!cpu.flag_z());
    assert_eq!(cpu.status(), 0x20);
}
