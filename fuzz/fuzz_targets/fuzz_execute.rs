//! Fuzz target for budgeted execution over an arbitrary image.
//!
//! Loads arbitrary bytes as a memory image and runs for an arbitrary
//! budget. The loop must terminate and never panic.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{AddressSpace, Cpu};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    image: Vec<u8>,
    budget: u16,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = AddressSpace::new();
    if memory.load_image(&input.image).is_err() {
        return;
    }

    let mut cpu = Cpu::new();
    cpu.reset(&memory);

    let budget = input.budget as u32;
    if cpu.execute(budget, &mut memory).is_ok() {
        // Overshoot is bounded by one instruction
        assert!(cpu.cycles() >= budget as u64);
        assert!(cpu.cycles() < budget as u64 + 7);
    }
});
