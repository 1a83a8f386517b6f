//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA: Push Accumulator on Stack
//! - PHP: Push Processor Status on Stack
//! - PLA: Pull Accumulator from Stack
//! - PLP: Pull Processor Status from Stack
//!
//! The 6502 stack is located at memory addresses 0x0100-0x01FF and grows downward.
//! The stack pointer (SP) is an 8-bit register that serves as an offset into this
//! page. The full stack address is calculated as 0x0100 | SP.
//!
//! Pushes take 3 cycles (fetch, internal, write), pulls 4 (fetch, two
//! internal, read).

use crate::registers::StatusFlags;
use crate::{AddressSpace, Cpu, CycleBudget};

/// Executes the PHA (Push Accumulator) instruction.
///
/// Flags affected: None
pub(crate) fn execute_pha(cpu: &mut Cpu, mem: &mut AddressSpace, cycles: &mut CycleBudget) {
    cycles.charge(1);
    let value = cpu.regs.a;
    cpu.push_byte(mem, value, cycles);
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed byte carries the current B flag and Unused = 1.
pub(crate) fn execute_php(cpu: &mut Cpu, mem: &mut AddressSpace, cycles: &mut CycleBudget) {
    cycles.charge(1);
    let status = cpu.regs.status.pack();
    cpu.push_byte(mem, status, cycles);
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if pulled value = 0
/// - Negative (N): Set if bit 7 of pulled value is set
pub(crate) fn execute_pla(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    cycles.charge(2);
    let value = cpu.pull_byte(mem, cycles);
    cpu.regs.a = value;
    cpu.regs.status.set_zn(value);
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Every flag, B included, is restored from the pulled byte. Unused is
/// forced to 1 regardless of the stored bit.
pub(crate) fn execute_plp(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    cycles.charge(2);
    let status = cpu.pull_byte(mem, cycles);
    cpu.regs.status = StatusFlags::unpack(status);
}
