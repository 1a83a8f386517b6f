//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers:
//! - TAX: Transfer Accumulator to X
//! - TAY: Transfer Accumulator to Y
//! - TXA: Transfer X to Accumulator
//! - TYA: Transfer Y to Accumulator
//! - TSX: Transfer Stack Pointer to X
//! - TXS: Transfer X to Stack Pointer
//!
//! All take 2 cycles (opcode fetch + 1). Every transfer sets Z and N from
//! the copied value except TXS, which affects no flags.

use crate::{Cpu, CycleBudget};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.x = cpu.regs.a;
    cpu.regs.status.set_zn(cpu.regs.x);
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.y = cpu.regs.a;
    cpu.regs.status.set_zn(cpu.regs.y);
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.a = cpu.regs.x;
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.a = cpu.regs.y;
    cpu.regs.status.set_zn(cpu.regs.a);
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.x = cpu.regs.sp;
    cpu.regs.status.set_zn(cpu.regs.x);
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Flags affected: None
pub(crate) fn execute_txs(cpu: &mut Cpu, cycles: &mut CycleBudget) {
    cycles.charge(1);
    cpu.regs.sp = cpu.regs.x;
}
