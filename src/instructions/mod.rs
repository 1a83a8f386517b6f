//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function taking the CPU, the address space, the
//! addressing mode from the decode table and the running cycle budget.
//!
//! The opcode fetch has already been charged by the execution loop; handlers
//! charge operand resolution, data access and internal cycles.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::{Access, Operand};
use crate::opcodes::{Opcode, Operation};
use crate::registers::StatusFlags;
use crate::{AddressSpace, AddressingMode, Cpu, CycleBudget};

/// Runs the handler for a decoded opcode.
pub(crate) fn execute(cpu: &mut Cpu, mem: &mut AddressSpace, opcode: Opcode, cycles: &mut CycleBudget) {
    let mode = opcode.mode;

    match opcode.operation {
        Operation::Lda => load_store::execute_lda(cpu, mem, mode, cycles),
        Operation::Ldx => load_store::execute_ldx(cpu, mem, mode, cycles),
        Operation::Ldy => load_store::execute_ldy(cpu, mem, mode, cycles),
        Operation::Sta => load_store::execute_sta(cpu, mem, mode, cycles),
        Operation::Stx => load_store::execute_stx(cpu, mem, mode, cycles),
        Operation::Sty => load_store::execute_sty(cpu, mem, mode, cycles),

        Operation::Tax => transfer::execute_tax(cpu, cycles),
        Operation::Tay => transfer::execute_tay(cpu, cycles),
        Operation::Txa => transfer::execute_txa(cpu, cycles),
        Operation::Tya => transfer::execute_tya(cpu, cycles),
        Operation::Tsx => transfer::execute_tsx(cpu, cycles),
        Operation::Txs => transfer::execute_txs(cpu, cycles),

        Operation::Pha => stack::execute_pha(cpu, mem, cycles),
        Operation::Php => stack::execute_php(cpu, mem, cycles),
        Operation::Pla => stack::execute_pla(cpu, mem, cycles),
        Operation::Plp => stack::execute_plp(cpu, mem, cycles),

        Operation::And => alu::execute_and(cpu, mem, mode, cycles),
        Operation::Eor => alu::execute_eor(cpu, mem, mode, cycles),
        Operation::Ora => alu::execute_ora(cpu, mem, mode, cycles),
        Operation::Bit => alu::execute_bit(cpu, mem, mode, cycles),
        Operation::Adc => alu::execute_adc(cpu, mem, mode, cycles),
        Operation::Sbc => alu::execute_sbc(cpu, mem, mode, cycles),
        Operation::Cmp => alu::execute_cmp(cpu, mem, mode, cycles),
        Operation::Cpx => alu::execute_cpx(cpu, mem, mode, cycles),
        Operation::Cpy => alu::execute_cpy(cpu, mem, mode, cycles),

        Operation::Inc => inc_dec::execute_inc(cpu, mem, mode, cycles),
        Operation::Inx => inc_dec::execute_inx(cpu, cycles),
        Operation::Iny => inc_dec::execute_iny(cpu, cycles),
        Operation::Dec => inc_dec::execute_dec(cpu, mem, mode, cycles),
        Operation::Dex => inc_dec::execute_dex(cpu, cycles),
        Operation::Dey => inc_dec::execute_dey(cpu, cycles),

        Operation::Asl => shifts::execute_asl(cpu, mem, mode, cycles),
        Operation::Lsr => shifts::execute_lsr(cpu, mem, mode, cycles),
        Operation::Rol => shifts::execute_rol(cpu, mem, mode, cycles),
        Operation::Ror => shifts::execute_ror(cpu, mem, mode, cycles),

        Operation::Jmp => control::execute_jmp(cpu, mem, mode, cycles),
        Operation::Jsr => control::execute_jsr(cpu, mem, cycles),
        Operation::Rts => control::execute_rts(cpu, mem, cycles),
        Operation::Brk => control::execute_brk(cpu, mem, cycles),
        Operation::Rti => control::execute_rti(cpu, mem, cycles),
        Operation::Nop => control::execute_nop(cycles),

        Operation::Bcc => branches::execute_bcc(cpu, mem, cycles),
        Operation::Bcs => branches::execute_bcs(cpu, mem, cycles),
        Operation::Beq => branches::execute_beq(cpu, mem, cycles),
        Operation::Bmi => branches::execute_bmi(cpu, mem, cycles),
        Operation::Bne => branches::execute_bne(cpu, mem, cycles),
        Operation::Bpl => branches::execute_bpl(cpu, mem, cycles),
        Operation::Bvc => branches::execute_bvc(cpu, mem, cycles),
        Operation::Bvs => branches::execute_bvs(cpu, mem, cycles),

        Operation::Clc => flags::execute_clc(cpu, cycles),
        Operation::Cld => flags::execute_cld(cpu, cycles),
        Operation::Cli => flags::execute_cli(cpu, cycles),
        Operation::Clv => flags::execute_clv(cpu, cycles),
        Operation::Sec => flags::execute_sec(cpu, cycles),
        Operation::Sed => flags::execute_sed(cpu, cycles),
        Operation::Sei => flags::execute_sei(cpu, cycles),
    }
}

/// Resolves the operand and reads its value, paying the page-cross penalty
/// only when the index carries.
pub(crate) fn fetch_operand_value(
    cpu: &mut Cpu,
    mem: &AddressSpace,
    mode: AddressingMode,
    cycles: &mut CycleBudget,
) -> u8 {
    let operand = cpu.resolve_operand(mem, mode, Access::Read, cycles);
    cpu.read_operand(mem, operand, cycles)
}

/// Shared read-modify-write sequence for shifts, rotates, INC and DEC.
///
/// Accumulator form: one internal cycle. Memory form: read, one modify
/// cycle, write back. Indexed modes always pay the fix-up cycle.
pub(crate) fn read_modify_write<F>(
    cpu: &mut Cpu,
    mem: &mut AddressSpace,
    mode: AddressingMode,
    cycles: &mut CycleBudget,
    modify: F,
) where
    F: FnOnce(&mut StatusFlags, u8) -> u8,
{
    match cpu.resolve_operand(mem, mode, Access::Write, cycles) {
        Operand::Accumulator => {
            cycles.charge(1);
            let value = cpu.regs.a;
            cpu.regs.a = modify(&mut cpu.regs.status, value);
        }
        Operand::Address(addr) => {
            let value = cpu.read_byte(mem, addr, cycles);
            cycles.charge(1);
            let result = modify(&mut cpu.regs.status, value);
            cpu.write_byte(mem, addr, result, cycles);
        }
        Operand::Implied | Operand::Immediate(_) | Operand::Relative(_) => {}
    }
}
