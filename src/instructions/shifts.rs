//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each works on the accumulator or, read-modify-write, on memory. The bit
//! shifted out lands in C; Z and N follow the result.

use super::read_modify_write;
use crate::{AddressSpace, AddressingMode, Cpu, CycleBudget};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// C = old bit 7, bit 0 becomes 0.
pub(crate) fn execute_asl(cpu: &mut Cpu, mem: &mut AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    read_modify_write(cpu, mem, mode, cycles, |flags, value| {
        flags.carry = value & 0x80 != 0;
        let result = value << 1;
        flags.set_zn(result);
        result
    });
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// C = old bit 0, bit 7 becomes 0 (so N is always cleared).
pub(crate) fn execute_lsr(cpu: &mut Cpu, mem: &mut AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    read_modify_write(cpu, mem, mode, cycles, |flags, value| {
        flags.carry = value & 0x01 != 0;
        let result = value >> 1;
        flags.set_zn(result);
        result
    });
}

/// Executes the ROL (Rotate Left) instruction.
///
/// C = old bit 7, bit 0 = old C.
pub(crate) fn execute_rol(cpu: &mut Cpu, mem: &mut AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    read_modify_write(cpu, mem, mode, cycles, |flags, value| {
        let carry_in = flags.carry as u8;
        flags.carry = value & 0x80 != 0;
        let result = (value << 1) | carry_in;
        flags.set_zn(result);
        result
    });
}

/// Executes the ROR (Rotate Right) instruction.
///
/// C = old bit 0, bit 7 = old C.
pub(crate) fn execute_ror(cpu: &mut Cpu, mem: &mut AddressSpace, mode: AddressingMode, cycles: &mut CycleBudget) {
    read_modify_write(cpu, mem, mode, cycles, |flags, value| {
        let carry_in = flags.carry as u8;
        flags.carry = value & 0x01 != 0;
        let result = (value >> 1) | (carry_in << 7);
        flags.set_zn(result);
        result
    });
}
