//! # Dispatcher
//!
//! A 256-entry lookup from opcode byte to decoded instruction, built from
//! [`OPCODE_TABLE`] when a CPU is created or reset. The table is owned by the
//! CPU instance and never mutated after construction, so independent CPUs
//! share nothing.

use crate::opcodes::{Opcode, OPCODE_TABLE};

/// Immutable opcode lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTable {
    entries: [Option<Opcode>; 256],
}

impl DispatchTable {
    /// Builds the table from the documented opcode set.
    pub fn new() -> Self {
        Self {
            entries: OPCODE_TABLE,
        }
    }

    /// O(1) lookup. `None` means the byte is not a valid instruction.
    #[inline]
    pub fn lookup(&self, opcode: u8) -> Option<Opcode> {
        self.entries[opcode as usize]
    }

    /// Number of opcodes with a handler.
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// True if no opcode has a handler.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opcodes::{Operation, DOCUMENTED_OPCODES};
    use crate::AddressingMode;

    #[test]
    fn test_table_has_every_documented_opcode() {
        let table = DispatchTable::new();
        assert_eq!(table.len(), DOCUMENTED_OPCODES);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_lookup() {
        let table = DispatchTable::new();

        let jsr = table.lookup(0x20).unwrap();
        assert_eq!(jsr.operation, Operation::Jsr);
        assert_eq!(jsr.mode, AddressingMode::Absolute);

        assert!(table.lookup(0xFF).is_none());
        assert!(table.lookup(0x02).is_none());
    }
}
