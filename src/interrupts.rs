//! # Interrupt Request Lines
//!
//! The core tracks three independent request latches: IRQ, NMI and RESET.
//! Peripherals (or the host) raise a latch; the CPU clears it once serviced.
//!
//! ## Priority
//!
//! At the start of every step at most one request is serviced, first match wins:
//!
//! 1. RESET
//! 2. NMI
//! 3. IRQ, only while the Interrupt Disable flag is clear
//!
//! Everything else stays pending for the next step.
//!
//! ## Wiring Peripherals
//!
//! [`InterruptLine`] is a cloneable handle bound to one latch. A device can hold
//! it and raise its output without a reference to the CPU and without naming
//! the line on every call. Latches are atomics, so a handle may live on another
//! thread; ordering beyond "visible at the start of a step" is the host's job.
//!
//! ```rust
//! use m6502::{BasicMemory, Interrupt, CPU};
//!
//! let cpu = CPU::new(BasicMemory::new());
//! let nmi = cpu.interrupt_line(Interrupt::Nmi);
//!
//! nmi.raise();
//! assert!(cpu.interrupt(Interrupt::Nmi));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cycles charged for servicing any interrupt.
pub const INTERRUPT_CYCLES: u16 = 7;

/// NMI vector (low byte; high byte follows).
pub const NMI_VECTOR: u16 = 0xFFFA;

/// RESET vector (low byte; high byte follows).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ/BRK vector (low byte; high byte follows).
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// The three interrupt request lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interrupt {
    /// Maskable interrupt request.
    Irq,
    /// Non-maskable interrupt.
    Nmi,
    /// Hardware reset line.
    Reset,
}

impl Interrupt {
    /// Address of the low byte of this line's vector.
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Irq => IRQ_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Reset => RESET_VECTOR,
        }
    }
}

impl fmt::Display for Interrupt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Interrupt::Irq => "IRQ",
            Interrupt::Nmi => "NMI",
            Interrupt::Reset => "RESET",
        })
    }
}

/// Handle bound to a single request latch.
#[derive(Clone)]
pub struct InterruptLine {
    which: Interrupt,
    latch: Arc<AtomicBool>,
}

impl InterruptLine {
    /// Which line this handle drives.
    pub fn which(&self) -> Interrupt {
        self.which
    }

    pub fn set(&self, state: bool) {
        self.latch.store(state, Ordering::Release);
    }

    pub fn raise(&self) {
        self.set(true);
    }

    pub fn clear(&self) {
        self.set(false);
    }

    pub fn is_set(&self) -> bool {
        self.latch.load(Ordering::Acquire)
    }
}

impl fmt::Debug for InterruptLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterruptLine")
            .field("which", &self.which)
            .field("state", &self.is_set())
            .finish()
    }
}

/// The three request latches and the priority decision over them.
#[derive(Debug, Default)]
pub struct InterruptLines {
    irq: Arc<AtomicBool>,
    nmi: Arc<AtomicBool>,
    reset: Arc<AtomicBool>,
}

impl InterruptLines {
    pub fn new() -> Self {
        Self::default()
    }

    fn latch(&self, which: Interrupt) -> &Arc<AtomicBool> {
        match which {
            Interrupt::Irq => &self.irq,
            Interrupt::Nmi => &self.nmi,
            Interrupt::Reset => &self.reset,
        }
    }

    pub fn set(&self, which: Interrupt, state: bool) {
        self.latch(which).store(state, Ordering::Release);
    }

    pub fn get(&self, which: Interrupt) -> bool {
        self.latch(which).load(Ordering::Acquire)
    }

    /// A handle that drives only `which`.
    pub fn line(&self, which: Interrupt) -> InterruptLine {
        InterruptLine {
            which,
            latch: Arc::clone(self.latch(which)),
        }
    }

    /// Returns the request that would be serviced this step, if any.
    ///
    /// Clears nothing; see [`take`](Self::take).
    pub fn pending(&self, interrupts_disabled: bool) -> Option<Interrupt> {
        if self.get(Interrupt::Reset) {
            Some(Interrupt::Reset)
        } else if self.get(Interrupt::Nmi) {
            Some(Interrupt::Nmi)
        } else if self.get(Interrupt::Irq) && !interrupts_disabled {
            Some(Interrupt::Irq)
        } else {
            None
        }
    }

    /// Claims the highest-priority request, clearing its latch.
    ///
    /// The latch is swapped out before the sequence runs, so a line raised
    /// again while the request is being serviced stays latched for the next
    /// step. A masked IRQ is never claimed.
    pub fn take(&self, interrupts_disabled: bool) -> Option<Interrupt> {
        [Interrupt::Reset, Interrupt::Nmi, Interrupt::Irq]
            .into_iter()
            .filter(|&which| which != Interrupt::Irq || !interrupts_disabled)
            .find(|&which| self.latch(which).swap(false, Ordering::AcqRel))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_reset_first() {
        let lines = InterruptLines::new();
        lines.set(Interrupt::Irq, true);
        lines.set(Interrupt::Nmi, true);
        lines.set(Interrupt::Reset, true);

        assert_eq!(lines.pending(false), Some(Interrupt::Reset));
        assert_eq!(lines.take(false), Some(Interrupt::Reset));
        assert_eq!(lines.take(false), Some(Interrupt::Nmi));
        assert_eq!(lines.take(false), Some(Interrupt::Irq));
        assert_eq!(lines.take(false), None);
    }

    #[test]
    fn test_take_leaves_others_latched() {
        let lines = InterruptLines::new();
        lines.set(Interrupt::Irq, true);
        lines.set(Interrupt::Nmi, true);

        assert_eq!(lines.take(false), Some(Interrupt::Nmi));
        assert!(!lines.get(Interrupt::Nmi));
        assert!(lines.get(Interrupt::Irq));
    }

    #[test]
    fn test_raise_after_take_stays_latched() {
        let lines = InterruptLines::new();
        let nmi = lines.line(Interrupt::Nmi);
        nmi.raise();

        assert_eq!(lines.take(false), Some(Interrupt::Nmi));
        nmi.raise();
        assert_eq!(lines.pending(false), Some(Interrupt::Nmi));
    }

    #[test]
    fn test_irq_masked() {
        let lines = InterruptLines::new();
        lines.set(Interrupt::Irq, true);
        assert_eq!(lines.pending(true), None);
        assert_eq!(lines.take(true), None);
        assert!(lines.get(Interrupt::Irq));
    }

    #[test]
    fn test_nmi_ignores_mask() {
        let lines = InterruptLines::new();
        lines.set(Interrupt::Nmi, true);
        assert_eq!(lines.pending(true), Some(Interrupt::Nmi));
    }

    #[test]
    fn test_line_handle_shares_latch() {
        let lines = InterruptLines::new();
        let irq = lines.line(Interrupt::Irq);
        assert_eq!(irq.which(), Interrupt::Irq);

        irq.raise();
        assert!(lines.get(Interrupt::Irq));
        assert_eq!(lines.take(false), Some(Interrupt::Irq));
        assert!(!irq.is_set());
    }

    #[test]
    fn test_line_handle_across_threads() {
        let lines = InterruptLines::new();
        let nmi = lines.line(Interrupt::Nmi);
        std::thread::spawn(move || nmi.raise())
            .join()
            .expect("peripheral thread panicked");
        assert!(lines.get(Interrupt::Nmi));
    }

    #[test]
    fn test_vectors() {
        assert_eq!(Interrupt::Irq.vector(), 0xFFFE);
        assert_eq!(Interrupt::Nmi.vector(), 0xFFFA);
        assert_eq!(Interrupt::Reset.vector(), 0xFFFC);
    }
}
