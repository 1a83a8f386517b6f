//! # Fault Snapshots
//!
//! When execution hits a byte with no dispatcher entry, the whole address
//! space is handed to a [`SnapshotSink`] before the error propagates. The
//! sink is an external collaborator: the core only calls it.
//!
//! Provided sinks:
//!
//! - [`NullSnapshotSink`] discards the snapshot (the default)
//! - [`FileSnapshotSink`] writes a timestamped hex dump file
//! - any `FnMut(&AddressSpace, &ExecutionError) -> io::Result<()>` closure
//!
//! [`HexDump`] renders memory in the row layout used by the file sink:
//!
//! ```text
//! 0000  A9 42 00 00 ...  .B..
//! ```

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::memory::ADDRESS_SPACE_SIZE;
use crate::{AddressSpace, ExecutionError};

/// Receives a full-memory snapshot when execution faults.
pub trait SnapshotSink {
    /// Persists `memory` as it stood when `fault` was raised.
    fn persist(&mut self, memory: &AddressSpace, fault: &ExecutionError) -> io::Result<()>;
}

impl<F> SnapshotSink for F
where
    F: FnMut(&AddressSpace, &ExecutionError) -> io::Result<()>,
{
    fn persist(&mut self, memory: &AddressSpace, fault: &ExecutionError) -> io::Result<()> {
        self(memory, fault)
    }
}

/// Sink that drops every snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSnapshotSink;

impl SnapshotSink for NullSnapshotSink {
    fn persist(&mut self, _memory: &AddressSpace, _fault: &ExecutionError) -> io::Result<()> {
        Ok(())
    }
}

/// Bytes per dump row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowWidth {
    /// 16 bytes per row.
    Narrow,
    /// 32 bytes per row.
    #[default]
    Wide,
}

impl RowWidth {
    /// Row width in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            RowWidth::Narrow => 16,
            RowWidth::Wide => 32,
        }
    }
}

/// `Display` adapter rendering part of an address space as hex + ASCII rows.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressSpace, HexDump, RowWidth};
///
/// let mut mem = AddressSpace::new();
/// mem.write(0x0000, b'H');
/// mem.write(0x0001, b'i');
///
/// let dump = HexDump::new(&mem, 0x0000, 16).row_width(RowWidth::Narrow).to_string();
/// assert_eq!(
///     dump,
///     "0000  48 69 00 00 00 00 00 00 00 00 00 00 00 00 00 00  Hi..............\n"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a> {
    memory: &'a AddressSpace,
    start: usize,
    len: usize,
    width: RowWidth,
}

impl<'a> HexDump<'a> {
    /// Dumps `len` bytes starting at `start`, clipped to the top of memory.
    pub fn new(memory: &'a AddressSpace, start: u16, len: usize) -> Self {
        let start = start as usize;
        Self {
            memory,
            start,
            len: len.min(ADDRESS_SPACE_SIZE - start),
            width: RowWidth::default(),
        }
    }

    /// Dumps all 65536 bytes.
    pub fn full(memory: &'a AddressSpace) -> Self {
        Self::new(memory, 0x0000, ADDRESS_SPACE_SIZE)
    }

    /// Sets the number of bytes per row.
    pub fn row_width(mut self, width: RowWidth) -> Self {
        self.width = width;
        self
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = &self.memory.as_bytes()[self.start..self.start + self.len];
        let width = self.width.bytes();

        for (row, chunk) in bytes.chunks(width).enumerate() {
            write!(f, "{:04X}  ", self.start + row * width)?;

            for byte in chunk {
                write!(f, "{:02X} ", byte)?;
            }
            for _ in chunk.len()..width {
                f.write_str("   ")?;
            }

            f.write_str(" ")?;
            for &byte in chunk {
                let c = if byte.is_ascii_graphic() || byte == b' ' {
                    byte as char
                } else {
                    '.'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Settings for [`FileSnapshotSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotConfig {
    /// Directory dump files are written into. Created on demand.
    pub directory: PathBuf,
    /// Bytes per dump row.
    pub row_width: RowWidth,
    /// File name prefix, followed by `_<unix millis>_<sequence>.txt`.
    pub file_prefix: String,
}

impl SnapshotConfig {
    /// Sets the output directory.
    pub fn with_directory<P: Into<PathBuf>>(mut self, directory: P) -> Self {
        self.directory = directory.into();
        self
    }

    /// Sets the row width.
    pub fn with_row_width(mut self, row_width: RowWidth) -> Self {
        self.row_width = row_width;
        self
    }

    /// Sets the file name prefix.
    pub fn with_file_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.file_prefix = prefix.into();
        self
    }
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            row_width: RowWidth::Wide,
            file_prefix: String::from("memdump"),
        }
    }
}

/// Writes each snapshot to its own timestamped text file.
#[derive(Debug, Clone, Default)]
pub struct FileSnapshotSink {
    config: SnapshotConfig,
    sequence: u32,
    last_path: Option<PathBuf>,
}

impl FileSnapshotSink {
    /// Creates a sink with the given settings.
    pub fn new(config: SnapshotConfig) -> Self {
        Self {
            config,
            sequence: 0,
            last_path: None,
        }
    }

    /// Sink writing into `directory` with default settings otherwise.
    pub fn in_directory<P: Into<PathBuf>>(directory: P) -> Self {
        Self::new(SnapshotConfig::default().with_directory(directory))
    }

    /// Settings in use.
    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Path of the most recently written dump.
    pub fn last_path(&self) -> Option<&Path> {
        self.last_path.as_deref()
    }

    fn next_path(&mut self) -> PathBuf {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or(0);
        let name = format!("{}_{}_{}.txt", self.config.file_prefix, millis, self.sequence);
        self.sequence = self.sequence.wrapping_add(1);
        self.config.directory.join(name)
    }
}

impl SnapshotSink for FileSnapshotSink {
    fn persist(&mut self, memory: &AddressSpace, fault: &ExecutionError) -> io::Result<()> {
        fs::create_dir_all(&self.config.directory)?;
        let path = self.next_path();

        let mut out = BufWriter::new(fs::File::create(&path)?);
        writeln!(out, "# {}", fault)?;
        write!(
            out,
            "{}",
            HexDump::full(memory).row_width(self.config.row_width)
        )?;
        out.flush()?;

        log::info!("wrote memory snapshot to {}", path.display());
        self.last_path = Some(path);
        Ok(())
    }
}
