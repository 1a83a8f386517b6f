//! WASM API for the 6502 interpreter.
//!
//! Provides JavaScript-callable interfaces for loading images, running the
//! CPU against a cycle budget and inspecting registers and memory.

use crate::{AddressSpace, Cpu, ExecutionError, HexDump, ImageError, RowWidth};
use wasm_bindgen::prelude::*;

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<ExecutionError> for JsError {
    fn from(err: ExecutionError) -> Self {
        JsError::new(&err.to_string())
    }
}

impl From<ImageError> for JsError {
    fn from(err: ImageError) -> Self {
        JsError::new(&err.to_string())
    }
}

/// Main emulator interface for JavaScript
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: Cpu,
    memory: AddressSpace,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create an interpreter with zeroed memory. Load an image, then call `reset`.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: Cpu::new(),
            memory: AddressSpace::new(),
        }
    }

    /// Copy a binary image to address 0; returns the number of bytes loaded.
    pub fn load_image(&mut self, image: &[u8]) -> Result<usize, JsError> {
        Ok(self.memory.load_image(image)?)
    }

    /// Reset the CPU; PC comes from the reset vector in the loaded image.
    pub fn reset(&mut self) {
        self.cpu.reset(&self.memory);
    }

    /// Run whole instructions until `budget` cycles are spent
    pub fn execute(&mut self, budget: u32) -> Result<(), JsError> {
        Ok(self.cpu.execute(budget, &mut self.memory)?)
    }

    /// Execute a single instruction and return its cycle cost
    pub fn step(&mut self) -> Result<u32, JsError> {
        Ok(self.cpu.step(&mut self.memory)?)
    }

    // Register getters
    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    /// Packed status byte (NV1BDIZC)
    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64 // Convert u64 to f64 for JavaScript
    }

    // Flag getters
    #[wasm_bindgen(getter)]
    pub fn flag_n(&self) -> bool {
        self.cpu.flag_n()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_v(&self) -> bool {
        self.cpu.flag_v()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_d(&self) -> bool {
        self.cpu.flag_d()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_i(&self) -> bool {
        self.cpu.flag_i()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_z(&self) -> bool {
        self.cpu.flag_z()
    }

    #[wasm_bindgen(getter)]
    pub fn flag_c(&self) -> bool {
        self.cpu.flag_c()
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Read a single byte from memory
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Copy of the whole 64 KiB image
    pub fn memory(&self) -> js_sys::Uint8Array {
        js_sys::Uint8Array::from(&self.memory.as_bytes()[..])
    }

    /// Hex dump of `len` bytes from `start`, 16 bytes per row
    pub fn dump(&self, start: u16, len: usize) -> String {
        HexDump::new(&self.memory, start, len)
            .row_width(RowWidth::Narrow)
            .to_string()
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
