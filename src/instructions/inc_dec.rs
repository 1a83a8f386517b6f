//! # Increment and Decrement Instructions
//!
//! This module implements increment and decrement operations:
//! - INC, DEC: memory, read-modify-write
//! - INX, INY, DEX, DEY: index registers, 2 cycles
//!
//! All wrap modulo 256 and set Z and N from the result.

use super::read_modify_write;
use crate::{AddressSpace, AddressingMode, Cpu, CycleBudget};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc(cpu: &mut Cpu, mem: &mut AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    read_modify_write(cpu, mem, mode, cycles, |flags, value| {
        let result = value.wrapping_add(1);
        flags.set_zn(result);
        result
    });
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec(cpu: &mut Cpu, mem: &mut AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    read_modify_write(cpu, mem, mode, cycles, |flags, value| {
        let result = value.wrapping_sub(1);
        flags.set_zn(result);
        result
    });
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.status.set_zn(cpu.regs.x);
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.status.set_zn(cpu.regs.y);
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.status.set_zn(cpu.regs.x);
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.status.set_zn(cpu.regs.y);
}
