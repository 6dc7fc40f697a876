//! Host-level engine toggles.

/// Runtime behaviour switches for a [`CPU`](crate::CPU).
///
/// # Examples
///
/// ```
/// use m6502::{BasicMemory, CpuConfig, CPU};
///
/// // A 2A03-style core that stops cleanly on BRK
/// let config = CpuConfig {
///     decimal_mode: false,
///     break_is_error: true,
///     ..CpuConfig::default()
/// };
/// let cpu = CPU::with_config(BasicMemory::new(), config);
/// assert!(!cpu.config().decimal_mode);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CpuConfig {
    /// Honour the D flag in ADC/SBC. Off models parts without BCD hardware.
    pub decimal_mode: bool,

    /// Treat an executed BRK as [`ExecutionError::BreakExecuted`](crate::ExecutionError::BreakExecuted).
    pub break_is_error: bool,

    /// Capture and emit a [`DecodeTrace`](crate::DecodeTrace) every step.
    pub trace: bool,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            decimal_mode: true,
            break_is_error: false,
            trace: false,
        }
    }
}
