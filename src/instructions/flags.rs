//! # Status Flag Instructions
//!
//! This module implements status flag manipulation:
//! - CLC / SEC: Carry
//! - CLD / SED: Decimal mode
//! - CLI / SEI: Interrupt disable
//! - CLV: Overflow (there is no SEV)
//!
//! Each changes exactly one flag and costs one cycle after the fetch.

use crate::{Cpu, CycleBudget};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.status.carry = false;
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.status.decimal = false;
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.status.interrupt_disable = false;
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.status.overflow = false;
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.status.carry = true;
}

/// Executes the SED (Set Decimal Flag) instruction.
pub(crate) fn execute_sed(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.status.decimal = true;
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.status.interrupt_disable = true;
}
