//! # Registers and Status Flags
//!
//! The 6502 programmer-visible state: a 16-bit program counter, an 8-bit
//! stack pointer into page one, three 8-bit general registers and the
//! packed status register.
//!
//! Flags are stored as named booleans. The packed byte only exists at the
//! boundary (PHP/PLP, BRK/RTI, harness inspection) and is produced by
//! [`StatusFlags::pack`] / [`StatusFlags::unpack`] using fixed bit positions:
//!
//! ```text
//!  7   6   5   4   3   2   1   0
//!  N   V   -   B   D   I   Z   C
//! ```
//!
//! Bit 5 is unused and always reads back as 1.

/// Carry (bit 0).
pub const FLAG_CARRY: u8 = 0b0000_0001;
/// Zero (bit 1).
pub const FLAG_ZERO: u8 = 0b0000_0010;
/// Interrupt disable (bit 2).
pub const FLAG_INTERRUPT: u8 = 0b0000_0100;
/// Decimal mode (bit 3).
pub const FLAG_DECIMAL: u8 = 0b0000_1000;
/// Break (bit 4).
pub const FLAG_BREAK: u8 = 0b0001_0000;
/// Unused (bit 5), forced to 1.
pub const FLAG_UNUSED: u8 = 0b0010_0000;
/// Overflow (bit 6).
pub const FLAG_OVERFLOW: u8 = 0b0100_0000;
/// Negative (bit 7).
pub const FLAG_NEGATIVE: u8 = 0b1000_0000;

/// Stack pointer value after reset.
pub const SP_RESET: u8 = 0xFF;

/// Processor status flags.
///
/// # Examples
///
/// ```
/// use emu6502::StatusFlags;
///
/// let flags = StatusFlags::unpack(0b1000_0001);
/// assert!(flags.negative);
/// assert!(flags.carry);
/// assert!(flags.unused); // forced on
/// assert_eq!(flags.pack(), 0b1010_0001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusFlags {
    /// C: unsigned carry / not-borrow.
    pub carry: bool,
    /// Z: last result was zero.
    pub zero: bool,
    /// I: IRQ masked.
    pub interrupt_disable: bool,
    /// D: decimal mode (recorded, arithmetic stays binary).
    pub decimal: bool,
    /// B: break.
    pub brk: bool,
    /// Always true once written through `unpack`.
    pub unused: bool,
    /// V: signed overflow.
    pub overflow: bool,
    /// N: bit 7 of last result.
    pub negative: bool,
}

impl StatusFlags {
    /// Flags as they stand after reset: everything clear except Unused.
    pub const fn reset() -> Self {
        Self {
            carry: false,
            zero: false,
            interrupt_disable: false,
            decimal: false,
            brk: false,
            unused: true,
            overflow: false,
            negative: false,
        }
    }

    /// Packs the flags into the status byte. Bit 5 is always 1.
    pub fn pack(&self) -> u8 {
        let mut status = FLAG_UNUSED;

        if self.carry {
            status |= FLAG_CARRY;
        }
        if self.zero {
            status |= FLAG_ZERO;
        }
        if self.interrupt_disable {
            status |= FLAG_INTERRUPT;
        }
        if self.decimal {
            status |= FLAG_DECIMAL;
        }
        if self.brk {
            status |= FLAG_BREAK;
        }
        if self.overflow {
            status |= FLAG_OVERFLOW;
        }
        if self.negative {
            status |= FLAG_NEGATIVE;
        }

        status
    }

    /// Unpacks a status byte. Unused is recorded as 1 whatever the source bit.
    pub fn unpack(status: u8) -> Self {
        Self {
            carry: status & FLAG_CARRY != 0,
            zero: status & FLAG_ZERO != 0,
            interrupt_disable: status & FLAG_INTERRUPT != 0,
            decimal: status & FLAG_DECIMAL != 0,
            brk: status & FLAG_BREAK != 0,
            unused: true,
            overflow: status & FLAG_OVERFLOW != 0,
            negative: status & FLAG_NEGATIVE != 0,
        }
    }

    /// Sets Z and N from a result byte. No other flag is touched.
    #[inline]
    pub fn set_zn(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
    }
}

impl Default for StatusFlags {
    fn default() -> Self {
        Self::reset()
    }
}

/// CPU register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Program counter.
    pub pc: u16,
    /// Stack pointer, offset into 0x0100-0x01FF.
    pub sp: u8,
    /// Accumulator.
    pub a: u8,
    /// X index.
    pub x: u8,
    /// Y index.
    pub y: u8,
    /// Status flags.
    pub status: StatusFlags,
}

impl Registers {
    /// Register state after reset, with PC taken from the reset vector.
    pub const fn after_reset(pc: u16) -> Self {
        Self {
            pc,
            sp: SP_RESET,
            a: 0,
            x: 0,
            y: 0,
            status: StatusFlags::reset(),
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::after_reset(0)
    }
}
