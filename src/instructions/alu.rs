//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic, logical and compare operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND: Logical AND
//! - EOR: Exclusive OR
//! - ORA: Logical Inclusive OR
//! - BIT: Bit Test
//! - CMP, CPX, CPY: Compare register with memory
//!
//! Arithmetic is binary. The D flag is carried in the status register but
//! does not switch ADC/SBC to BCD.

use super::fetch_operand_value;
use crate::{AddressSpace, AddressingMode, Cpu, CycleBudget};

/// Executes the ADC (Add with Carry) instruction.
///
/// A = A + M + C, computed 9 bits wide.
///
/// # Flag Behavior
///
/// - Carry (C): Set if the 9-bit sum exceeds 0xFF
/// - Overflow (V): Set if A and M share a sign and the result does not
/// - Zero (Z), Negative (N): From the 8-bit result
pub(crate) fn execute_adc(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    add_with_carry(cpu, value);
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// A = A - M - (1 - C). Implemented as ADC of the one's complement of M, so
/// C acts as "not borrow": set before a subtraction with no borrow pending,
/// and set afterwards when no borrow occurred.
pub(crate) fn execute_sbc(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    add_with_carry(cpu, !value);
}

fn add_with_carry(cpu: &mut Cpu, value: u8) {
    let a = cpu.regs.a;
    let carry_in = cpu.regs.status.carry as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.regs.status.carry = sum > 0xFF;
    // Both inputs disagree in sign with the result.
    cpu.regs.status.overflow = (a ^ result) & (value ^ result) & 0x80 != 0;

    cpu.regs.a = result;
    cpu.regs.status.set_zn(result);
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    cpu.regs.a &= value;
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    cpu.regs.a ^= value;
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    cpu.regs.a |= value;
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// Executes the BIT (Bit Test) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A & M = 0 (the result is discarded)
/// - Negative (N): Bit 7 of M
/// - Overflow (V): Bit 6 of M
pub(crate) fn execute_bit(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    cpu.regs.status.zero = cpu.regs.a & value == 0;
    cpu.regs.status.negative = value & 0x80 != 0;
    cpu.regs.status.overflow = value & 0x40 != 0;
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    let register = cpu.regs.a;
    compare(cpu, register, value);
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    let register = cpu.regs.x;
    compare(cpu, register, value);
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    let register = cpu.regs.y;
    compare(cpu, register, value);
}

/// C = reg >= M, Z = reg == M, N = bit 7 of (reg - M). The difference is not stored.
fn compare(cpu: &mut Cpu, register: u8, value: u8) {
    let result = register.wrapping_sub(value);
    cpu.regs.status.carry = register >= value;
    cpu.regs.status.zero = register == value;
    cpu.regs.status.negative = result & 0x80 != 0;
}
