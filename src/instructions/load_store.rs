//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set Z and N from the loaded value and pay the page-crossing
//! penalty on indexed reads. Stores touch no flags and always pay the
//! indexing cycle.

use super::fetch_operand_value;
use crate::addressing::{Access, Operand};
use crate::{AddressSpace, AddressingMode, Cpu, CycleBudget};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    cpu.regs.a = value;
    cpu.regs.status.set_zn(value);
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    cpu.regs.x = value;
    cpu.regs.status.set_zn(value);
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = fetch_operand_value(cpu, mem, mode, cycles);
    cpu.regs.y = value;
    cpu.regs.status.set_zn(value);
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Flags affected: None
pub(crate) fn execute_sta(cpu: &mut Cpu, mem: &mut AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = cpu.regs.a;
    store(cpu, mem, mode, value, cycles);
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx(cpu: &mut Cpu, mem: &mut AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = cpu.regs.x;
    store(cpu, mem, mode, value, cycles);
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty(cpu: &mut Cpu, mem: &mut AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    let value = cpu.regs.y;
    store(cpu, mem, mode, value, cycles);
}

fn store(cpu: &mut Cpu, mem: &mut AddressSpace, mode: AddressingMode, value: u8, cycles: &mut CycleBudget) {
    if let Operand::Address(addr) = cpu.resolve_operand(mem, mode, Access::Write, cycles) {
        cpu.write_byte(mem, addr, value, cycles);
    }
}
