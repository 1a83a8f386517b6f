//! # 6502 CPU Interpreter
//!
//! A cycle-budgeted interpreter for the MOS 6502 instruction set: register
//! and flag model, addressing-mode resolution, the full documented
//! instruction catalogue and an opcode dispatch loop that runs until a
//! caller-supplied cycle budget is spent.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{AddressSpace, Cpu};
//!
//! let mut memory = AddressSpace::new();
//!
//! // Reset vector -> 0x8000
//! memory.write_word(0xFFFC, 0x8000);
//!
//! // LDA #$42
//! memory.write(0x8000, 0xA9);
//! memory.write(0x8001, 0x42);
//!
//! let mut cpu = Cpu::new();
//! cpu.reset(&memory);
//! cpu.execute(2, &mut memory).unwrap();
//!
//! assert_eq!(cpu.a(), 0x42);
//! assert_eq!(cpu.pc(), 0x8002);
//! assert_eq!(cpu.cycles(), 2);
//! ```
//!
//! ## Modules
//!
//! - `memory` - the flat 64KB [`AddressSpace`] and image loading
//! - `registers` - register file and packed status flags
//! - `addressing` - addressing modes and operand resolution
//! - `opcodes` - the 256-entry decode table
//! - `dispatch` - per-CPU opcode lookup built from the decode table
//! - `cycles` - the cycle budget threaded through every handler
//! - `cpu` - reset, step and the execute loop
//! - `snapshot` - fault snapshot sinks and hex dumps

pub mod addressing;
pub mod cpu;
pub mod cycles;
pub mod dispatch;
pub mod memory;
pub mod opcodes;
pub mod registers;
pub mod snapshot;

// Instruction semantics (not part of public API)
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::io;
use std::path::PathBuf;

pub use addressing::AddressingMode;
pub use cpu::{Cpu, RunState, IRQ_VECTOR, RESET_VECTOR, STACK_BASE};
pub use cycles::CycleBudget;
pub use dispatch::DispatchTable;
pub use memory::{AddressSpace, ADDRESS_SPACE_SIZE};
pub use opcodes::{Opcode, Operation, DOCUMENTED_OPCODES, OPCODE_TABLE};
pub use registers::{Registers, StatusFlags};
pub use snapshot::{
    FileSnapshotSink, HexDump, NullSnapshotSink, RowWidth, SnapshotConfig, SnapshotSink,
};

/// Errors that terminate an `execute` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExecutionError {
    /// The fetched byte has no dispatcher entry.
    ///
    /// `address` is where the byte was fetched from, not the PC after it.
    #[error("invalid instruction 0x{opcode:02X} at address 0x{address:04X}")]
    InvalidOpcode {
        /// Fetch address of the offending byte.
        address: u16,
        /// The byte itself.
        opcode: u8,
    },
}

/// Recoverable failures when loading a memory image.
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    /// The image contains no bytes.
    #[error("image is empty")]
    EmptyImage,

    /// The image does not fit in the 64KB address space.
    #[error("image of {len} bytes exceeds the 65536-byte address space")]
    ImageTooLarge {
        /// Size of the rejected image.
        len: usize,
    },

    /// The image file could not be read.
    #[error("failed to read image {}: {source}", .path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_opcode_display() {
        let err = ExecutionError::InvalidOpcode {
            address: 0x80B2,
            opcode: 0x02,
        };
        assert_eq!(err.to_string(), "invalid instruction 0x02 at address 0x80B2");
    }

    #[test]
    fn test_image_error_display() {
        assert_eq!(
            ImageError::ImageTooLarge { len: 65537 }.to_string(),
            "image of 65537 bytes exceeds the 65536-byte address space"
        );
        assert_eq!(ImageError::EmptyImage.to_string(), "image is empty");
    }
}
