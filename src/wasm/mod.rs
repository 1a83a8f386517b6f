//! WebAssembly bindings for the emu6502 interpreter.
//!
//! This module exposes the CPU and its address space to JavaScript,
//! enabling browser-based execution of 6502 binary images.

pub mod api;

pub use api::Emulator6502;
