//! # CPU State and Execution
//!
//! This module contains the CPU struct that ties the register file, the memory
//! bus, the instruction table and the interrupt lines together, and the
//! fetch-decode-execute loop that drives them.
//!
//! ## Execution Model
//!
//! Each call to `step()`:
//! 1. Services at most one pending interrupt (RESET, then NMI, then IRQ)
//! 2. Fetches the opcode at PC
//! 3. Fails with `UnimplementedOpcode` if the slot is empty, touching nothing
//! 4. Otherwise advances PC past the opcode and dispatches
//! 5. Charges cycles from the base or page-cross table, plus one for a taken branch
//!
//! `run()` repeats `step()` until it fails. Execution is synchronous: a step
//! always runs to completion.

use tracing::{debug, info, warn};

use crate::interrupts::{InterruptLine, InterruptLines, INTERRUPT_CYCLES, RESET_VECTOR};
use crate::{
    CpuConfig, DecodeTrace, ExecutionError, Instruction, InstructionTable, Interrupt, MemoryBus,
    Registers, Status,
};

/// Opcode of BRK.
pub const BRK_OPCODE: u8 = 0x00;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait.
///
/// # Examples
///
/// ```
/// use m6502::{BasicMemory, CPU};
///
/// let mut memory = BasicMemory::new();
/// memory.load(0xFFFC, &[0x00, 0x80]); // reset vector -> 0x8000
/// memory.load(0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
///
/// let cycles = cpu.step().unwrap();
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct CPU<M: MemoryBus> {
    pub(crate) registers: Registers,

    pub(crate) memory: M,

    pub(crate) instructions: InstructionTable<M>,

    pub(crate) interrupts: InterruptLines,

    pub(crate) config: CpuConfig,

    /// Record for the step in progress; `Some` only while tracing.
    pub(crate) trace: Option<DecodeTrace>,

    /// Total CPU cycles executed since construction or the last reset.
    pub(crate) cycles: u64,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with the default configuration and every documented
    /// instruction registered.
    ///
    /// Registers take their power-on values and PC is loaded from the reset
    /// vector at 0xFFFC/0xFFFD. Memory is left as the host prepared it.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            registers: Registers::new(),
            memory,
            instructions: InstructionTable::official(),
            interrupts: InterruptLines::new(),
            config,
            trace: None,
            cycles: 0,
        };
        cpu.perform_reset();
        cpu
    }

    /// Reinitializes registers and memory, then runs the RESET sequence.
    ///
    /// Pending interrupt requests are left alone.
    pub fn reset(&mut self) {
        self.registers.reset();
        self.memory.reset();
        self.trace = None;
        self.cycles = 0;
        self.perform_reset();
    }

    // ========== Interrupts ==========

    /// Sets or clears one request line.
    pub fn set_interrupt(&self, which: Interrupt, state: bool) {
        self.interrupts.set(which, state);
    }

    /// Returns whether a request line is latched.
    pub fn interrupt(&self, which: Interrupt) -> bool {
        self.interrupts.get(which)
    }

    /// A handle bound to one request line, for wiring a peripheral's output.
    pub fn interrupt_line(&self, which: Interrupt) -> InterruptLine {
        self.interrupts.line(which)
    }

    /// Services the highest-priority pending request, if any.
    ///
    /// Returns the cycles charged: 7 when something fired, otherwise 0.
    pub fn perform_interrupts(&mut self) -> u16 {
        let masked = self.registers.p.contains(Status::INTERRUPT_DISABLE);
        let Some(which) = self.interrupts.take(masked) else {
            return 0;
        };

        match which {
            Interrupt::Reset => self.perform_reset(),
            Interrupt::Nmi | Interrupt::Irq => self.perform_vectored(which),
        }

        debug!(interrupt = %which, pc = self.registers.pc, "serviced interrupt");
        INTERRUPT_CYCLES
    }

    /// Loads PC from the reset vector. Stack and status are untouched.
    fn perform_reset(&mut self) {
        self.registers.pc = self.read_word(RESET_VECTOR);
    }

    /// IRQ/NMI entry: push PC and status, mask IRQ, jump through the vector.
    fn perform_vectored(&mut self, which: Interrupt) {
        self.push16(self.registers.pc);
        self.push(self.registers.p.pushed(false));
        self.registers.p.insert(Status::INTERRUPT_DISABLE);
        self.registers.pc = self.read_word(which.vector());
    }

    // ========== Stack ==========

    pub(crate) fn push(&mut self, value: u8) {
        self.memory.store(self.registers.stack_addr(), value);
        self.registers.sp = self.registers.sp.wrapping_sub(1);
    }

    /// Pushes high byte first so that `pull16` reads low then high.
    pub(crate) fn push16(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push(value as u8);
    }

    pub(crate) fn pull(&mut self) -> u8 {
        self.registers.sp = self.registers.sp.wrapping_add(1);
        self.memory.fetch(self.registers.stack_addr())
    }

    pub(crate) fn pull16(&mut self) -> u16 {
        let low = self.pull() as u16;
        let high = self.pull() as u16;
        (high << 8) | low
    }

    // ========== Operand access ==========

    /// Fetches from `addr`, noting the value in the trace.
    pub(crate) fn read(&mut self, addr: u16) -> u8 {
        let value = self.memory.fetch(addr);
        if let Some(trace) = self.trace.as_mut() {
            trace.note_value(value);
        }
        value
    }

    /// Stores to `addr`, noting the replaced value in the trace.
    pub(crate) fn write(&mut self, addr: u16, value: u8) {
        let old = self.memory.store(addr, value);
        if let Some(trace) = self.trace.as_mut() {
            trace.note_value(old);
        }
    }

    /// Whether ADC/SBC should use BCD arithmetic right now.
    pub(crate) fn decimal_active(&self) -> bool {
        self.config.decimal_mode && self.registers.p.contains(Status::DECIMAL_MODE)
    }

    // ========== Dispatch ==========

    /// Dispatches `opcode` through the instruction table with PC already past
    /// the opcode byte, returning the cycles it cost.
    ///
    /// Fails only when no instruction is registered for `opcode`.
    pub fn execute(&mut self, opcode: u8) -> Result<u16, ExecutionError> {
        let instruction = self
            .instructions
            .get(opcode)
            .ok_or(ExecutionError::UnimplementedOpcode(opcode))?;
        Ok(self.dispatch(instruction))
    }

    fn dispatch(&mut self, instruction: Instruction<M>) -> u16 {
        let status = (instruction.exec)(self, instruction.mode);
        self.instructions.cycles(instruction.opcode, status)
    }

    /// Executes one instruction (after servicing at most one interrupt) and
    /// returns the cycles consumed by both.
    ///
    /// # Returns
    ///
    /// - `Ok(cycles)` if the instruction executed
    /// - `Err(ExecutionError::UnimplementedOpcode(op))` if the slot is empty; PC,
    ///   registers and memory are left as they were after interrupt servicing,
    ///   and [`last_trace`](Self::last_trace) is cleared
    /// - `Err(ExecutionError::BreakExecuted(0x00))` after a BRK in strict mode
    ///
    /// Cycles spent by a failing step (an interrupt entry, or the BRK itself)
    /// are still added to [`cycles`](Self::cycles). Take the difference of
    /// `cycles()` across the call to get the cost of a step that failed.
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::{BasicMemory, ExecutionError, CPU};
    ///
    /// let mut memory = BasicMemory::new();
    /// memory.load(0xFFFC, &[0x00, 0x80]);
    /// memory.load(0x8000, &[0x02]); // no instruction registered
    ///
    /// let mut cpu = CPU::new(memory);
    /// assert_eq!(cpu.step(), Err(ExecutionError::UnimplementedOpcode(0x02)));
    /// assert_eq!(cpu.pc(), 0x8000);
    /// ```
    pub fn step(&mut self) -> Result<u16, ExecutionError> {
        let mut cycles = self.perform_interrupts();
        self.cycles += cycles as u64;

        let address = self.registers.pc;
        let opcode = self.memory.fetch(address);

        let Some(instruction) = self.instructions.get(opcode) else {
            self.trace = None;
            warn!(opcode, pc = address, "unimplemented opcode");
            return Err(ExecutionError::UnimplementedOpcode(opcode));
        };

        if self.config.trace {
            self.trace = Some(DecodeTrace::new(
                address,
                opcode,
                instruction.mnemonic,
                self.registers,
            ));
        }

        self.registers.pc = address.wrapping_add(1);
        let spent = self.dispatch(instruction);
        self.cycles += spent as u64;
        cycles += spent;

        if let Some(trace) = &self.trace {
            info!(target: "m6502::decode", "{trace}");
        }

        if self.config.break_is_error && opcode == BRK_OPCODE {
            debug!(pc = address, "BRK executed in strict mode");
            return Err(ExecutionError::BreakExecuted(opcode));
        }

        Ok(cycles)
    }

    /// Steps until a step fails and returns that failure.
    ///
    /// With strict BRK mode enabled a BRK-terminated program ends here with
    /// `BreakExecuted`; otherwise the only exit is an unimplemented opcode.
    pub fn run(&mut self) -> ExecutionError {
        loop {
            if let Err(error) = self.step() {
                return error;
            }
        }
    }

    /// Runs the CPU for a specified number of cycles.
    ///
    /// Executes instructions until the cycle budget is exhausted or an error
    /// occurs. Returns the actual number of cycles consumed (may be slightly
    /// more than budget due to instruction granularity).
    pub fn run_for_cycles(&mut self, cycle_budget: u64) -> Result<u64, ExecutionError> {
        let start_cycles = self.cycles;
        let target_cycles = start_cycles + cycle_budget;

        while self.cycles < target_cycles {
            self.step()?;
        }

        Ok(self.cycles - start_cycles)
    }

    // ========== Configuration ==========

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    /// Makes ADC/SBC ignore the D flag.
    pub fn disable_decimal_mode(&mut self) {
        self.config.decimal_mode = false;
    }

    /// Enables or disables strict BRK mode.
    pub fn set_break_is_error(&mut self, enabled: bool) {
        self.config.break_is_error = enabled;
    }

    pub fn enable_trace(&mut self) {
        self.config.trace = true;
    }

    /// Flips tracing and returns the new state. Disabling drops the last record.
    pub fn toggle_trace(&mut self) -> bool {
        self.config.trace = !self.config.trace;
        if !self.config.trace {
            self.trace = None;
        }
        self.config.trace
    }

    /// Decode record of the most recent traced step.
    pub fn last_trace(&self) -> Option<&DecodeTrace> {
        self.trace.as_ref()
    }

    // ========== Accessors ==========

    pub fn registers(&self) -> &Registers {
        &self.registers
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.registers
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    pub fn instructions(&self) -> &InstructionTable<M> {
        &self.instructions
    }

    pub fn instructions_mut(&mut self) -> &mut InstructionTable<M> {
        &mut self.instructions
    }

    /// Returns the total number of CPU cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.registers.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.registers.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.registers.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.registers.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.registers.sp
    }

    pub fn status(&self) -> Status {
        self.registers.p
    }
}
