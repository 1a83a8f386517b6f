//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BCC / BCS: Carry clear / set
//! - BNE / BEQ: Zero clear / set
//! - BPL / BMI: Negative clear / set
//! - BVC / BVS: Overflow clear / set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! applied to the address of the next instruction.
//!
//! Cycle timing:
//! - 2 cycles if branch not taken
//! - 3 cycles if branch taken to same page
//! - 4 cycles if branch taken to different page
//!
//! No flags are affected.

use crate::addressing::{page_crossed, Access, AddressingMode, Operand};
use crate::{AddressSpace, Cpu, CycleBudget};

fn branch_if(cpu: &mut Cpu, mem: &AddressSpace, condition: bool, cycles: &mut CycleBudget) {
    let Operand::Relative(offset) =
        cpu.resolve_operand(mem, AddressingMode::Relative, Access::Read, cycles)
    else {
        return;
    };

    if !condition {
        return;
    }

    let next = cpu.regs.pc;
    let target = next.wrapping_add_signed(offset as i16);

    cycles.charge(1);
    if page_crossed(next, target) {
        cycles.charge(1);
    }

    cpu.regs.pc = target;
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    let condition = !cpu.regs.status.carry;
    branch_if(cpu, mem, condition, cycles);
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    let condition = cpu.regs.status.carry;
    branch_if(cpu, mem, condition, cycles);
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    let condition = cpu.regs.status.zero;
    branch_if(cpu, mem, condition, cycles);
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    let condition = !cpu.regs.status.zero;
    branch_if(cpu, mem, condition, cycles);
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    let condition = cpu.regs.status.negative;
    branch_if(cpu, mem, condition, cycles);
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    let condition = !cpu.regs.status.negative;
    branch_if(cpu, mem, condition, cycles);
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    let condition = !cpu.regs.status.overflow;
    branch_if(cpu, mem, condition, cycles);
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    let condition = cpu.regs.status.overflow;
    branch_if(cpu, mem, condition, cycles);
}
