//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - BRK: Force Interrupt
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! JSR pushes the address of its own last byte (return address - 1); RTS
//! adds the 1 back. BRK skips a padding byte, so the pushed return address
//! is the BRK address + 2.

use crate::addressing::{Access, Operand};
use crate::cpu::IRQ_VECTOR;
use crate::registers::{StatusFlags, FLAG_BREAK};
use crate::{AddressSpace, AddressingMode, Cpu, CycleBudget};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): 3 cycles
/// - Indirect (0x6C): 5 cycles. The pointer's high byte is read from the
///   same page when the pointer sits at 0xXXFF.
///
/// Flags affected: None
pub(crate) fn execute_jmp(cpu: &mut Cpu, mem: &AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    if let Operand::Address(target) = cpu.resolve_operand(mem, mode, Access::Read, cycles) {
        cpu.regs.pc = target;
    }
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Cycle timing: 6 cycles (fetch, 2 operand bytes, internal, 2 pushes)
pub(crate) fn execute_jsr(cpu: &mut Cpu, mem: &mut AddressSpace, cycles: &mut CycleBudget) {
    let target = cpu.fetch_word(mem, cycles);
    cycles.charge(1);

    let return_address = cpu.regs.pc.wrapping_sub(1);
    cpu.push_word(mem, return_address, cycles);

    cpu.regs.pc = target;
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Cycle timing: 6 cycles (fetch, 2 internal, 2 pulls, PC increment)
pub(crate) fn execute_rts(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    cycles.charge(2);
    let return_address = cpu.pull_word(mem, cycles);
    cycles.charge(1);
    cpu.regs.pc = return_address.wrapping_add(1);
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// 1. Skips the padding byte after the opcode
/// 2. Pushes PC (BRK address + 2), high byte first
/// 3. Pushes the status byte with B = 1 and Unused = 1
/// 4. Sets the I flag
/// 5. Loads PC from the IRQ vector at 0xFFFE/0xFFFF
///
/// Cycle timing: 7 cycles
pub(crate) fn execute_brk(cpu: &mut Cpu, mem: &mut AddressSpace, cycles: &mut CycleBudget) {
    cpu.fetch_byte(mem, cycles);

    let return_address = cpu.regs.pc;
    cpu.push_word(mem, return_address, cycles);

    let status = cpu.regs.status.pack() | FLAG_BREAK;
    cpu.push_byte(mem, status, cycles);

    cpu.regs.status.interrupt_disable = true;
    cpu.regs.pc = cpu.read_word(mem, IRQ_VECTOR, cycles);
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte (Unused forced to 1), then PC. Unlike RTS there
/// is no +1 on the pulled address.
///
/// Cycle timing: 6 cycles
pub(crate) fn execute_rti(cpu: &mut Cpu, mem: &AddressSpace, cycles: &mut CycleBudget) {
    cycles.charge(2);
    let status = cpu.pull_byte(mem, cycles);
    cpu.regs.status = StatusFlags::unpack(status);
    cpu.regs.pc = cpu.pull_word(mem, cycles);
}

/// Executes the NOP (No Operation) instruction: one cycle after the fetch.
pub(crate) fn execute_nop(cycles: &mut CycleBudget) {
    cycles.charge(1);
}
