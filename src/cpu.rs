//! # CPU State and Execution
//!
//! This module contains the [`Cpu`] struct and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: C, Z, I, D, B, V, N as named booleans
//! - **Dispatch table**: built on construction and rebuilt by every reset
//! - **Cycle counter**: total cycles executed, across calls
//!
//! The address space is not owned by the CPU; every call that touches
//! memory borrows it.
//!
//! ## Execution Model
//!
//! - `step()`: execute one instruction, returning its cycle cost
//! - `execute()`: execute whole instructions until the cycle budget is spent
//!
//! Fetching the opcode costs one cycle. The handler then charges its
//! addressing and body cycles against the same [`CycleBudget`]. The loop
//! only checks the budget between instructions, so it may overshoot by
//! part of the final instruction.

use std::fmt;

use crate::instructions;
use crate::registers::{Registers, StatusFlags};
use crate::snapshot::{NullSnapshotSink, SnapshotSink};
use crate::{AddressSpace, CycleBudget, DispatchTable, ExecutionError};

/// Address of the little-endian reset vector.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the little-endian BRK/IRQ vector.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Base of the fixed stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Execution state of the interpreter loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Inside an `execute` call.
    Running,
    /// Budget exhausted or invalid opcode hit. `execute` starts running again.
    Halted,
}

/// 6502 CPU state and execution context.
///
/// # Examples
///
/// ```
/// use emu6502::{AddressSpace, Cpu};
///
/// let mut memory = AddressSpace::new();
/// memory.write_word(0xFFFC, 0x8000);
///
/// let mut cpu = Cpu::new();
/// cpu.reset(&memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status(), 0x20);
/// ```
pub struct Cpu {
    /// Register file and flags
    pub(crate) regs: Registers,

    /// Total cycles executed since construction
    pub(crate) cycles: u64,

    dispatch: DispatchTable,
    run_state: RunState,
    last_fault: Option<ExecutionError>,
    sink: Box<dyn SnapshotSink>,
}

impl Cpu {
    /// Creates a CPU in the post-reset register state with PC = 0.
    ///
    /// Call [`Cpu::reset`] to load PC from the reset vector.
    pub fn new() -> Self {
        Self {
            regs: Registers::default(),
            cycles: 0,
            dispatch: DispatchTable::new(),
            run_state: RunState::Halted,
            last_fault: None,
            sink: Box::new(NullSnapshotSink),
        }
    }

    /// Replaces the fault snapshot sink.
    pub fn with_snapshot_sink<S: SnapshotSink + 'static>(mut self, sink: S) -> Self {
        self.sink = Box::new(sink);
        self
    }

    /// Replaces the fault snapshot sink in place.
    pub fn set_snapshot_sink<S: SnapshotSink + 'static>(&mut self, sink: S) {
        self.sink = Box::new(sink);
    }

    /// Resets registers and flags and loads PC from 0xFFFC/0xFFFD.
    ///
    /// - PC = word at the reset vector (little-endian)
    /// - SP = 0xFF
    /// - A = X = Y = 0
    /// - all flags clear except Unused
    ///
    /// The dispatch table is rebuilt and the total cycle counter cleared.
    pub fn reset(&mut self, mem: &AddressSpace) {
        let pc = mem.read_word(RESET_VECTOR);

        self.regs = Registers::after_reset(pc);
        self.dispatch = DispatchTable::new();
        self.cycles = 0;
        self.run_state = RunState::Halted;
        self.last_fault = None;

        log::debug!("reset: PC=0x{:04X}", pc);
    }

    /// Executes one instruction and returns the cycles it consumed.
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{AddressSpace, Cpu};
    ///
    /// let mut memory = AddressSpace::new();
    /// memory.write_word(0xFFFC, 0x8000);
    /// memory.write(0x8000, 0xEA); // NOP
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.reset(&memory);
    ///
    /// assert_eq!(cpu.step(&mut memory), Ok(2));
    /// assert_eq!(cpu.pc(), 0x8001);
    /// ```
    pub fn step(&mut self, mem: &mut AddressSpace) -> Result<u32, ExecutionError> {
        let mut budget = CycleBudget::unbounded();
        let result = self.run_instruction(mem, &mut budget);
        self.cycles += budget.spent();
        result.map(|()| budget.spent() as u32)
    }

    /// Runs whole instructions until `cycle_budget` cycles have been spent.
    ///
    /// Returns `Ok(())` once the budget reaches zero or below. The final
    /// instruction always completes, so more cycles than requested may be
    /// consumed. An opcode with no dispatcher entry halts execution, hands
    /// the address space to the snapshot sink and returns
    /// [`ExecutionError::InvalidOpcode`].
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{AddressSpace, Cpu, ExecutionError};
    ///
    /// let mut memory = AddressSpace::new();
    /// memory.write_word(0xFFFC, 0x8000);
    /// memory.write(0x8000, 0xEA); // NOP
    /// memory.write(0x8001, 0x02); // not an instruction
    ///
    /// let mut cpu = Cpu::new();
    /// cpu.reset(&memory);
    ///
    /// assert_eq!(
    ///     cpu.execute(100, &mut memory),
    ///     Err(ExecutionError::InvalidOpcode { address: 0x8001, opcode: 0x02 })
    /// );
    /// ```
    pub fn execute(&mut self, cycle_budget: u32, mem: &mut AddressSpace) -> Result<(), ExecutionError> {
        let mut budget = CycleBudget::new(cycle_budget);
        self.run_state = RunState::Running;

        let mut result = Ok(());
        while !budget.is_exhausted() {
            if let Err(err) = self.run_instruction(mem, &mut budget) {
                result = Err(err);
                break;
            }
        }

        self.cycles += budget.spent();
        self.run_state = RunState::Halted;

        log::debug!(
            "execute: spent {} of {} cycles (overshoot {})",
            budget.spent(),
            cycle_budget,
            (budget.spent() as i64 - cycle_budget as i64).max(0)
        );

        result
    }

    /// Fetches, decodes and runs a single instruction.
    fn run_instruction(&mut self, mem: &mut AddressSpace, cycles: &mut CycleBudget) -> Result<(), ExecutionError> {
        let address = self.regs.pc;
        let opcode = self.fetch_byte(mem, cycles);

        match self.dispatch.lookup(opcode) {
            Some(entry) => {
                log::trace!(
                    "{:04X}  {:02X}  {} {:?}",
                    address,
                    opcode,
                    entry.mnemonic(),
                    entry.mode
                );
                instructions::execute(self, mem, entry, cycles);
                Ok(())
            }
            None => Err(self.fault(mem, address, opcode)),
        }
    }

    fn fault(&mut self, mem: &AddressSpace, address: u16, opcode: u8) -> ExecutionError {
        let err = ExecutionError::InvalidOpcode { address, opcode };
        log::error!("{}; halting", err);

        self.run_state = RunState::Halted;
        self.last_fault = Some(err);

        if let Err(io_err) = self.sink.persist(mem, &err) {
            log::error!("failed to persist memory snapshot: {}", io_err);
        }

        err
    }

    // ========== Bus Access ==========
    //
    // Every access costs one cycle.

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self, mem: &AddressSpace, cycles: &mut CycleBudget) -> u8 {
        let value = mem.read(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        cycles.charge(1);
        value
    }

    /// Reads the little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self, mem: &AddressSpace, cycles: &mut CycleBudget) -> u16 {
        let lo = self.fetch_byte(mem, cycles) as u16;
        let hi = self.fetch_byte(mem, cycles) as u16;
        (hi << 8) | lo
    }

    pub(crate) fn read_byte(&self, mem: &AddressSpace, addr: u16, cycles: &mut CycleBudget) -> u8 {
        cycles.charge(1);
        mem.read(addr)
    }

    pub(crate) fn read_word(&self, mem: &AddressSpace, addr: u16, cycles: &mut CycleBudget) -> u16 {
        cycles.charge(2);
        mem.read_word(addr)
    }

    pub(crate) fn write_byte(&self, mem: &mut AddressSpace, addr: u16, value: u8, cycles: &mut CycleBudget) {
        cycles.charge(1);
        mem.write(addr, value);
    }

    // ========== Stack ==========
    //
    // Push writes at 0x0100 | SP then decrements; pull increments then
    // reads. SP wraps within the page.

    pub(crate) fn push_byte(&mut self, mem: &mut AddressSpace, value: u8, cycles: &mut CycleBudget) {
        let addr = STACK_BASE | self.regs.sp as u16;
        self.write_byte(mem, addr, value, cycles);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    pub(crate) fn pull_byte(&mut self, mem: &AddressSpace, cycles: &mut CycleBudget) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let addr = STACK_BASE | self.regs.sp as u16;
        self.read_byte(mem, addr, cycles)
    }

    /// Pushes high byte then low byte.
    pub(crate) fn push_word(&mut self, mem: &mut AddressSpace, value: u16, cycles: &mut CycleBudget) {
        self.push_byte(mem, (value >> 8) as u8, cycles);
        self.push_byte(mem, (value & 0xFF) as u8, cycles);
    }

    /// Pulls low byte then high byte.
    pub(crate) fn pull_word(&mut self, mem: &AddressSpace, cycles: &mut CycleBudget) -> u16 {
        let lo = self.pull_byte(mem, cycles) as u16;
        let hi = self.pull_byte(mem, cycles) as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC, bit 5 always 1).
    pub fn status(&self) -> u8 {
        self.regs.status.pack()
    }

    /// Returns the unpacked status flags.
    pub fn flags(&self) -> StatusFlags {
        self.regs.status
    }

    /// Returns a copy of the whole register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    /// Returns the total number of cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the loop state.
    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Returns the most recent invalid-opcode fault, cleared by reset.
    pub fn last_fault(&self) -> Option<ExecutionError> {
        self.last_fault
    }

    /// Returns the dispatch table.
    pub fn dispatch_table(&self) -> &DispatchTable {
        &self.dispatch
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.regs.status.negative
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.regs.status.overflow
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.regs.status.brk
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.regs.status.decimal
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.regs.status.interrupt_disable
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.regs.status.zero
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.regs.status.carry
    }

    // ========== Setters (test harnesses, debuggers) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    /// Sets the X register.
    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    /// Sets the Y register.
    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Replaces all flags from a packed byte. Unused is forced to 1.
    pub fn set_status(&mut self, value: u8) {
        self.regs.status = StatusFlags::unpack(value);
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.status.negative = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.status.overflow = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.regs.status.brk = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.status.decimal = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.status.interrupt_disable = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.status.zero = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.status.carry = value;
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("regs", &self.regs)
            .field("cycles", &self.cycles)
            .field("run_state", &self.run_state)
            .field("last_fault", &self.last_fault)
            .finish_non_exhaustive()
    }
}
