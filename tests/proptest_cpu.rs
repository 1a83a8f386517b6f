//! Property-based tests for CPU invariants.
//!
//! These tests use proptest to check flag and arithmetic behaviour against
//! reference formulas across the whole input space.

use emu6502::{AddressSpace, Cpu, CycleBudget, StatusFlags};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup() -> (Cpu, AddressSpace) {
    let mut memory = AddressSpace::new();
    memory.write_word(0xFFFC, 0x8000);
    let mut cpu = Cpu::new();
    cpu.reset(&memory);
    (cpu, memory)
}

fn run_immediate(opcode: u8, a: u8, operand: u8, carry: bool) -> Cpu {
    let (mut cpu, mut memory) = setup();
    memory.write(0x8000, opcode);
    memory.write(0x8001, operand);
    cpu.set_a(a);
    cpu.set_flag_c(carry);
    cpu.step(&mut memory).unwrap();
    cpu
}

proptest! {
    #[test]
    fn prop_status_pack_round_trip(status in any::<u8>()) {
        let flags = StatusFlags::unpack(status);
        prop_assert_eq!(flags.pack(), status | 0x20);
        prop_assert!(flags.unused);
    }

    #[test]
    fn prop_set_zn_touches_only_z_and_n(status in any::<u8>(), value in any::<u8>()) {
        let mut flags = StatusFlags::unpack(status);
        flags.set_zn(value);

        prop_assert_eq!(flags.zero, value == 0);
        prop_assert_eq!(flags.negative, value & 0x80 != 0);
        prop_assert_eq!(flags.pack() & 0x7D, (status | 0x20) & 0x7D);
    }

    #[test]
    fn prop_adc_matches_reference(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let cpu = run_immediate(0x69, a, m, carry);

        let sum = a as u16 + m as u16 + carry as u16;
        let signed = a as i8 as i16 + m as i8 as i16 + carry as i16;

        prop_assert_eq!(cpu.a(), sum as u8);
        prop_assert_eq!(cpu.flag_c(), sum > 0xFF);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
        prop_assert_eq!(cpu.flag_z(), sum as u8 == 0);
        prop_assert_eq!(cpu.flag_n(), sum as u8 & 0x80 != 0);
    }

    #[test]
    fn prop_sbc_matches_reference(a in any::<u8>(), m in any::<u8>(), carry in any::<bool>()) {
        let cpu = run_immediate(0xE9, a, m, carry);

        let borrow = !carry as i16;
        let diff = a as i16 - m as i16 - borrow;
        let signed = a as i8 as i16 - m as i8 as i16 - borrow;

        prop_assert_eq!(cpu.a(), diff as u8);
        prop_assert_eq!(cpu.flag_c(), diff >= 0);
        prop_assert_eq!(cpu.flag_v(), !(-128..=127).contains(&signed));
    }

    #[test]
    fn prop_cmp_matches_unsigned_order(a in any::<u8>(), m in any::<u8>()) {
        let cpu = run_immediate(0xC9, a, m, false);

        prop_assert_eq!(cpu.flag_c(), a >= m);
        prop_assert_eq!(cpu.flag_z(), a == m);
        prop_assert_eq!(cpu.flag_n(), a.wrapping_sub(m) & 0x80 != 0);
        prop_assert_eq!(cpu.a(), a);
    }

    #[test]
    fn prop_zero_page_x_stays_in_page_zero(base in any::<u8>(), x in any::<u8>(), value in any::<u8>()) {
        let (mut cpu, mut memory) = setup();
        memory.write(0x8000, 0xB5); // LDA zp,X
        memory.write(0x8001, base);
        memory.write(base.wrapping_add(x) as u16, value);
        cpu.set_x(x);

        prop_assert_eq!(cpu.step(&mut memory), Ok(4));
        prop_assert_eq!(cpu.a(), value);
    }

    #[test]
    fn prop_absolute_x_penalty_iff_page_cross(base in 0x0200u16..0x7F00, x in any::<u8>()) {
        let (mut cpu, mut memory) = setup();
        memory.write(0x8000, 0xBD); // LDA abs,X
        memory.write_word(0x8001, base);
        cpu.set_x(x);

        let crossed = (base & 0xFF00) != (base.wrapping_add(x as u16) & 0xFF00);
        let expected = if crossed { 5 } else { 4 };
        prop_assert_eq!(cpu.step(&mut memory), Ok(expected));
    }

    #[test]
    fn prop_push_pull_preserves_value(value in any::<u8>(), sp in any::<u8>()) {
        let (mut cpu, mut memory) = setup();
        memory.write(0x8000, 0x48); // PHA
        memory.write(0x8001, 0xA9); // LDA #$00
        memory.write(0x8002, 0x00);
        memory.write(0x8003, 0x68); // PLA
        cpu.set_a(value);
        cpu.set_sp(sp);

        for _ in 0..3 {
            cpu.step(&mut memory).unwrap();
        }

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cpu.sp(), sp);
    }

    #[test]
    fn prop_budget_overshoot_is_bounded(budget in 0u32..200) {
        let (mut cpu, mut memory) = setup();
        // Endless loop of 7-cycle INC abs,X followed by JMP back
        memory.write(0x8000, 0xFE);
        memory.write_word(0x8001, 0x3000);
        memory.write(0x8003, 0x4C);
        memory.write_word(0x8004, 0x8000);

        cpu.execute(budget, &mut memory).unwrap();

        prop_assert!(cpu.cycles() >= budget as u64);
        prop_assert!(cpu.cycles() < budget as u64 + 7);
    }

    #[test]
    fn prop_cycle_budget_accounting(charges in proptest::collection::vec(0u32..8, 0..32)) {
        let mut budget = CycleBudget::new(50);
        for &c in &charges {
            budget.charge(c);
        }
        let total: u64 = charges.iter().map(|&c| c as u64).sum();
        prop_assert_eq!(budget.spent(), total);
        prop_assert_eq!(budget.remaining(), 50 - total as i64);
    }
}
