//! Tests for the opcode decode table and its agreement with the handlers.

use emu6502::{AddressSpace, AddressingMode, Cpu, Operation, DOCUMENTED_OPCODES, OPCODE_TABLE};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup() -> (Cpu, AddressSpace) {
    let mut memory = AddressSpace::new();
    memory.write_word(0xFFFC, 0x8000);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

#[test]
fn test_documented_opcode_count() {
    assert_eq!(DOCUMENTED_OPCODES, 151);
    assert_eq!(OPCODE_TABLE.iter().flatten().count(), 151);
}

#[test]
fn test_every_operation_is_reachable() {
    let mut mnemonics: Vec<&str> = OPCODE_TABLE.iter().flatten().map(|o| o.mnemonic()).collect();
    mnemonics.sort_unstable();
    mnemonics.dedup();
    assert_eq!(mnemonics.len(), 56);
}

#[test]
fn test_mode_counts_per_operation() {
    let modes = |operation: Operation| {
        OPCODE_TABLE
            .iter()
            .flatten()
            .filter(|o| o.operation == operation)
            .count()
    };

    assert_eq!(modes(Operation::Lda), 8);
    assert_eq!(modes(Operation::Sta), 7);
    assert_eq!(modes(Operation::Ldx), 5);
    assert_eq!(modes(Operation::Asl), 5);
    assert_eq!(modes(Operation::Jmp), 2);
    assert_eq!(modes(Operation::Bit), 2);
    assert_eq!(modes(Operation::Cpx), 3);
}

#[test]
fn test_branches_use_relative_mode() {
    for entry in OPCODE_TABLE.iter().flatten() {
        let is_branch = matches!(
            entry.operation,
            Operation::Bcc
                | Operation::Bcs
                | Operation::Beq
                | Operation::Bne
                | Operation::Bmi
                | Operation::Bpl
                | Operation::Bvc
                | Operation::Bvs
        );
        assert_eq!(is_branch, entry.mode == AddressingMode::Relative);
    }
}

#[test]
fn test_base_cycles_in_range() {
    for entry in OPCODE_TABLE.iter().flatten() {
        assert!((2..=7).contains(&entry.base_cycles), "{:?}", entry);
    }
}

/// Every documented opcode, executed with no page cross and no branch
/// taken, must cost exactly its table cycles and advance PC by its size.
#[test]
fn test_handlers_match_table_cycles() {
    for (byte, entry) in OPCODE_TABLE.iter().enumerate() {
        let Some(entry) = entry else { continue };

        let (mut cpu, mut memory) = setup();
        memory.write(0x8000, byte as u8);
        memory.write(0x8001, 0x10);
        memory.write(0x8002, 0x20);
        memory.write_word(0x0010, 0x3000);
        memory.write_word(0xFFFE, 0x9000);

        match entry.operation {
            Operation::Bcc => cpu.set_flag_c(true),
            Operation::Bcs => cpu.set_flag_c(false),
            Operation::Bne => cpu.set_flag_z(true),
            Operation::Beq => cpu.set_flag_z(false),
            Operation::Bpl => cpu.set_flag_n(true),
            Operation::Bmi => cpu.set_flag_n(false),
            Operation::Bvc => cpu.set_flag_v(true),
            Operation::Bvs => cpu.set_flag_v(false),
            _ => {}
        }

        let cycles = cpu.step(&mut memory).unwrap();
        assert_eq!(
            cycles, entry.base_cycles as u32,
            "{} {:?} (0x{:02X})",
            entry.mnemonic(),
            entry.mode,
            byte
        );

        let falls_through = !matches!(
            entry.operation,
            Operation::Jmp | Operation::Jsr | Operation::Rts | Operation::Rti | Operation::Brk
        );
        if falls_through {
            assert_eq!(
                cpu.pc(),
                0x8000 + entry.size_bytes() as u16,
                "{} {:?}",
                entry.mnemonic(),
                entry.mode
            );
        }
    }
}
