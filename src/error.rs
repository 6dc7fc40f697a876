//! Errors surfaced by the execution engine.

use thiserror::Error;

/// Errors that can occur during CPU execution.
///
/// Both variants are terminal for [`CPU::run`](crate::CPU::run). The engine
/// never retries and never rolls back: whatever an instruction committed to
/// registers or memory before the error stays committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// No instruction is registered for this opcode.
    ///
    /// Contains the opcode byte value for debugging purposes.
    #[error("opcode 0x{0:02X} is not implemented")]
    UnimplementedOpcode(u8),

    /// BRK was executed while strict BRK mode is enabled.
    ///
    /// Carries the BRK opcode value. Cycles for the BRK are already charged
    /// when this is returned.
    #[error("BRK executed (opcode 0x{0:02X})")]
    BreakExecuted(u8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ExecutionError::UnimplementedOpcode(0x02).to_string(),
            "opcode 0x02 is not implemented"
        );
        assert_eq!(
            ExecutionError::BreakExecuted(0x00).to_string(),
            "BRK executed (opcode 0x00)"
        );
    }
}
