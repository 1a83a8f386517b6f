//! # Address Space
//!
//! The CPU sees a single flat 64KB store. Every address is intrinsically
//! 16 bits wide, so reads and writes are total functions: there is no bus
//! error and no out-of-range access.
//!
//! Images are raw bytes with no header, copied in starting at address 0.
//! A failed load leaves the store untouched so the caller can retry with a
//! different image.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::ImageError;

/// Number of addressable bytes (0x0000-0xFFFF).
pub const ADDRESS_SPACE_SIZE: usize = 0x1_0000;

/// Flat 64KB memory owned by one emulation session.
///
/// # Examples
///
/// ```
/// use emu6502::AddressSpace;
///
/// let mut mem = AddressSpace::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
///
/// mem.write_word(0xFFFC, 0x8000);
/// assert_eq!(mem.read(0xFFFC), 0x00);
/// assert_eq!(mem.read(0xFFFD), 0x80);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AddressSpace {
    data: Box<[u8; ADDRESS_SPACE_SIZE]>,
}

impl AddressSpace {
    /// Creates a zero-filled address space.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE_SIZE]),
        }
    }

    /// Creates an address space populated from a raw image.
    ///
    /// Bytes beyond the image are zero.
    pub fn from_image(image: &[u8]) -> Result<Self, ImageError> {
        let mut space = Self::new();
        space.load_image(image)?;
        Ok(space)
    }

    /// Reads a byte.
    pub fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    /// Writes a byte.
    pub fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    /// Reads a little-endian word: low byte at `addr`, high byte at `addr + 1`.
    ///
    /// The high byte address wraps from 0xFFFF to 0x0000.
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Writes a little-endian word.
    pub fn write_word(&mut self, addr: u16, value: u16) {
        self.write(addr, (value & 0xFF) as u8);
        self.write(addr.wrapping_add(1), (value >> 8) as u8);
    }

    /// Copies a raw image into the store starting at address 0.
    ///
    /// Returns the number of bytes written. Empty or oversized images are
    /// rejected without touching the current contents.
    pub fn load_image(&mut self, image: &[u8]) -> Result<usize, ImageError> {
        if image.is_empty() {
            return Err(ImageError::EmptyImage);
        }
        if image.len() > ADDRESS_SPACE_SIZE {
            return Err(ImageError::ImageTooLarge { len: image.len() });
        }

        self.data[..image.len()].copy_from_slice(image);
        log::debug!("loaded {} byte image at 0x0000", image.len());

        Ok(image.len())
    }

    /// Reads a raw image from disk and loads it at address 0.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, ImageError> {
        let path = path.as_ref();
        let image = fs::read(path).map_err(|source| ImageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_image(&image)
    }

    /// Sets every cell to `value`.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// The whole store, index-addressed.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..]
    }
}

impl Default for AddressSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AddressSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nonzero = self.data.iter().filter(|&&b| b != 0).count();
        f.debug_struct("AddressSpace")
            .field("size", &ADDRESS_SPACE_SIZE)
            .field("nonzero_bytes", &nonzero)
            .finish()
    }
}
