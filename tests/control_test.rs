//! Tests for JMP, JSR, RTS, BRK, RTI and NOP.

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
fn test_jmp_absolute() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x4C);
    memory.write_word(0x8001, 0x1234);

    assert_eq!(cpu.step(&mut memory), Ok(3));
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x6C);
    memory.write_word(0x8001, 0x0200);
    memory.write_word(0x0200, 0x4321);

    assert_eq!(cpu.step(&mut memory), Ok(5));
    assert_eq!(cpu.pc(), 0x4321);
}

#[test]
fn test_jmp_indirect_page_wrap_quirk() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x6C);
    memory.write_word(0x8001, 0x02FF);
    memory.write(0x02FF, 0x34);
    memory.write(0x0200, 0x12);
    memory.write(0x0300, 0x99);

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jsr_pushes_last_byte_address() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x20);
    memory.write_word(0x8001, 0x9000);

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFD);
    assert_eq!(memory.read(0x01FF), 0x80);
    assert_eq!(memory.read(0x01FE), 0x02);
}

#[test]
fn test_rts_adds_one() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x60);
    memory.write(0x01FE, 0x02);
    memory.write(0x01FF, 0x90);
    cpu.set_sp(0xFD);

    assert_eq!(cpu.step(&mut memory), Ok(6));
    assert_eq!(cpu.pc(), 0x9003);
    assert_eq!(cpu.sp(), 0xFF);
}

#[test]
fn test_jsr_rts_round_trip() {
    let mut memory = AddressSpace::new();
    memory.write_word(0xFFFC, 0x00B2);

    // 00B2: JSR $00C0
    memory.write(0x00B2, 0x20);
    memory.write_word(0x00B3, 0x00C0);
    // 00C0: LDA #$89 ; RTS
    memory.write(0x00C0, 0xA9);
    memory.write(0x00C1, 0x89);
    memory.write(0x00C2, 0x60);

    let mut cpu = Cpu::new();
    cpu.reset(&memory);

    cpu.execute(14, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x89);
    assert_eq!(cpu.pc(), 0x00B5);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.cycles(), 14);
}

#[test]
fn test_subroutine_with_padding_before_rts() {
    let mut memory = AddressSpace::new();
    memory.write_word(0xFFFC, 0x00B2);

    memory.write(0x00B2, 0x20);
    memory.write_word(0x00B3, 0x00C0);
    // 00C0: LDA #$89 ; NOP ; RTS at 00C3
    memory.write(0x00C0, 0xA9);
    memory.write(0x00C1, 0x89);
    memory.write(0x00C2, 0xEA);
    memory.write(0x00C3, 0x60);

    let mut cpu = Cpu::new();
    cpu.reset(&memory);

    cpu.execute(16, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x89);
    assert_eq!(cpu.pc(), 0x00B5);
}

#[test]
fn test_brk_pushes_state_and_vectors() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x00);
    memory.write_word(0xFFFE, 0x9000);
    cpu.set_flag_c(true);

    assert_eq!(cpu.step(&mut memory), Ok(7));
    assert_eq!(cpu.pc(), 0x9000);
    assert_eq!(cpu.sp(), 0xFC);
    assert!(cpu.flag_i());

    // Return address is BRK + 2
    assert_eq!(memory.read(0x01FF), 0x80);
    assert_eq!(memory.read(0x01FE), 0x02);
    // B and Unused set in the pushed copy
    assert_eq!(memory.read(0x01FD), 0x31);
}

#[test]
fn test_brk_rti_round_trip() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x00);
    memory.write(0x8002, 0xEA);
    memory.write_word(0xFFFE, 0x9000);
    memory.write(0x9000, 0x40);
    cpu.set_flag_n(true);

    cpu.step(&mut memory).unwrap();
    assert_eq!(cpu.step(&mut memory), Ok(6));

    assert_eq!(cpu.pc(), 0x8002);
    assert_eq!(cpu.sp(), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_i());
}

#[test]
fn test_rti_forces_unused_flag() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0x40);
    memory.write(0x01FD, 0x00);
    memory.write_word(0x01FE, 0x1234);
    cpu.set_sp(0xFC);

    cpu.step(&mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x1234);
    assert_eq!(cpu.status(), 0x20);
}

#[test]
fn test_nop() {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, 0xEA);
    cpu.set_a(0x12);

    assert_eq!(cpu.step(&mut memory), Ok(2));
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.a(), 0x12);
    assert_eq!(cpu.status(), 0x20);
}
