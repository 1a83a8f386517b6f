//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary register state and memory contents, then executes
//! one instruction. Invalid opcodes are expected; panics are not.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{AddressSpace, Cpu, ExecutionError};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV1BDIZC byte
    status: u8,
}

/// Memory regions for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (instruction + operands)
    instruction_bytes: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    /// Placed at 0x20F0 so indexed modes can cross into 0x2100
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    pc: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = AddressSpace::new();
    memory.write_word(0xFFFE, 0x9000);

    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.main_memory.iter().enumerate() {
        memory.write(0x20F0 + i as u16, byte);
    }
    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        memory.write(input.pc.wrapping_add(i as u16), byte);
    }
    memory.write_word(0xFFFC, input.pc);

    let mut cpu = Cpu::new();
    cpu.reset(&memory);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    let opcode = memory.read(input.pc);
    match cpu.step(&mut memory) {
        Ok(cycles) => {
            // Documented instructions take 2 to 7 cycles
            assert!((2..=7).contains(&cycles));
            assert_eq!(cpu.cycles(), cycles as u64);
        }
        Err(ExecutionError::InvalidOpcode { address, opcode: bad }) => {
            assert_eq!(address, input.pc);
            assert_eq!(bad, opcode);
            assert!(cpu.last_fault().is_some());
        }
    }

    // Unused always reads back as 1
    assert_eq!(cpu.status() & 0x20, 0x20);
});
