//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolver
//! that turns the operand bytes following an opcode into an effective
//! address or value.
//!
//! Resolution consumes operand bytes (advancing PC) and charges the mode's
//! own cycles against the running budget:
//!
//! | Mode            | Cycles charged here                                  |
//! |-----------------|------------------------------------------------------|
//! | Immediate       | 1 (operand fetch)                                    |
//! | ZeroPage        | 1                                                    |
//! | ZeroPageX/Y     | 2 (fetch + index add)                                |
//! | Absolute        | 2                                                    |
//! | AbsoluteX/Y     | 2, +1 on page cross (reads) or always (writes/RMW)   |
//! | IndirectX       | 4 (fetch + index add + pointer read)                 |
//! | IndirectY       | 3, +1 on page cross (reads) or always (writes/RMW)   |
//! | Indirect        | 4 (pointer fetch + target read)                      |
//! | Relative        | 1 (offset fetch; taken/cross penalties in branches)  |
//! | Accumulator     | 0                                                    |
//! | Implicit        | 0                                                    |
//!
//! The instruction body then charges its own cost (data read, write,
//! internal cycles).

use crate::{AddressSpace, Cpu, CycleBudget};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wraps within zero page.
    ZeroPageX,

    /// Zero page address indexed by Y, wraps within zero page.
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    Relative,

    /// Full 16-bit address.
    Absolute,

    /// 16-bit address indexed by X register.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// How the instruction body will use an indexed effective address.
///
/// Reads only pay the fix-up cycle when the index carries into the high
/// byte. Stores and read-modify-write instructions always pay it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Read,
    Write,
}

/// A resolved operand. Transient, lives for one instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operand {
    /// No operand.
    Implied,
    /// The accumulator itself.
    Accumulator,
    /// Value taken from the instruction stream.
    Immediate(u8),
    /// Effective memory address.
    Address(u16),
    /// Branch displacement.
    Relative(i8),
}

/// Returns true when `base` and `addr` lie on different 256-byte pages.
///
/// ```
/// use emu6502::addressing::page_crossed;
///
/// assert!(page_crossed(0x20FF, 0x2100));
/// assert!(!page_crossed(0x2000, 0x20FF));
/// ```
#[inline]
pub fn page_crossed(base: u16, addr: u16) -> bool {
    (base & 0xFF00) != (addr & 0xFF00)
}

impl Cpu {
    /// Consumes the operand bytes for `mode` and produces the operand.
    pub(crate) fn resolve_operand(
        &mut self,
        mem: &AddressSpace,
        mode: AddressingMode,
        access: Access,
        cycles: &mut CycleBudget,
    ) -> Operand {
        match mode {
            AddressingMode::Implicit => Operand::Implied,
            AddressingMode::Accumulator => Operand::Accumulator,
            AddressingMode::Immediate => Operand::Immediate(self.fetch_byte(mem, cycles)),
            AddressingMode::ZeroPage => Operand::Address(self.fetch_byte(mem, cycles) as u16),
            AddressingMode::ZeroPageX => {
                let base = self.fetch_byte(mem, cycles);
                cycles.charge(1);
                Operand::Address(base.wrapping_add(self.regs.x) as u16)
            }
            AddressingMode::ZeroPageY => {
                let base = self.fetch_byte(mem, cycles);
                cycles.charge(1);
                Operand::Address(base.wrapping_add(self.regs.y) as u16)
            }
            AddressingMode::Absolute => Operand::Address(self.fetch_word(mem, cycles)),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(mem, cycles);
                Operand::Address(Self::index(base, self.regs.x, access, cycles))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(mem, cycles);
                Operand::Address(Self::index(base, self.regs.y, access, cycles))
            }
            AddressingMode::Indirect => {
                let ptr = self.fetch_word(mem, cycles);
                // NMOS quirk: the high byte never carries out of the pointer's page.
                let lo = self.read_byte(mem, ptr, cycles) as u16;
                let hi_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
                let hi = self.read_byte(mem, hi_addr, cycles) as u16;
                Operand::Address((hi << 8) | lo)
            }
            AddressingMode::IndirectX => {
                let ptr = self.fetch_byte(mem, cycles).wrapping_add(self.regs.x);
                cycles.charge(1);
                Operand::Address(self.read_zero_page_word(mem, ptr, cycles))
            }
            AddressingMode::IndirectY => {
                let ptr = self.fetch_byte(mem, cycles);
                let base = self.read_zero_page_word(mem, ptr, cycles);
                Operand::Address(Self::index(base, self.regs.y, access, cycles))
            }
            AddressingMode::Relative => Operand::Relative(self.fetch_byte(mem, cycles) as i8),
        }
    }

    /// Reads the operand value: immediate, accumulator, or one data read.
    pub(crate) fn read_operand(
        &mut self,
        mem: &AddressSpace,
        operand: Operand,
        cycles: &mut CycleBudget,
    ) -> u8 {
        match operand {
            Operand::Immediate(value) => value,
            Operand::Accumulator => self.regs.a,
            Operand::Address(addr) => self.read_byte(mem, addr, cycles),
            // The dispatch table never pairs a value-reading instruction with
            // these modes; treat them as the open bus.
            Operand::Implied | Operand::Relative(_) => 0,
        }
    }

    /// Reads a pointer from page zero; the high byte wraps to 0x00 after 0xFF.
    fn read_zero_page_word(&mut self, mem: &AddressSpace, ptr: u8, cycles: &mut CycleBudget) -> u16 {
        let lo = self.read_byte(mem, ptr as u16, cycles) as u16;
        let hi = self.read_byte(mem, ptr.wrapping_add(1) as u16, cycles) as u16;
        (hi << 8) | lo
    }

    fn index(base: u16, index: u8, access: Access, cycles: &mut CycleBudget) -> u16 {
        let addr = base.wrapping_add(index as u16);
        if access == Access::Write || page_crossed(base, addr) {
            cycles.charge(1);
        }
        addr
    }
}
