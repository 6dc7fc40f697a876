//! 6502 register file.

use std::fmt;

use crate::Status;

/// Stack pointer after reset.
pub const RESET_STACK_POINTER: u8 = 0xFD;

/// Placeholder program counter after a register reset. The RESET sequence
/// replaces it with the vector stored there.
pub const RESET_PROGRAM_COUNTER: u16 = 0xFFFC;

/// 6502 CPU register set.
///
/// The 6502 has minimal registers:
/// - A: 8-bit accumulator
/// - X, Y: 8-bit index registers
/// - P: 8-bit processor status
/// - SP: 8-bit stack pointer (stack is at $0100-$01FF)
/// - PC: 16-bit program counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator.
    pub a: u8,
    /// X index register.
    pub x: u8,
    /// Y index register.
    pub y: u8,
    /// Processor status flags.
    pub p: Status,
    /// Stack pointer.
    pub sp: u8,
    /// Program counter.
    pub pc: u16,
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}

impl Registers {
    /// Create registers in the power-on state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            p: Status::default(),
            sp: RESET_STACK_POINTER,
            pc: RESET_PROGRAM_COUNTER,
        }
    }

    /// Return every register to the power-on state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Address of the next free stack slot.
    #[must_use]
    pub const fn stack_addr(&self) -> u16 {
        0x0100 | (self.sp as u16)
    }
}

impl fmt::Display for Registers {
    /// Fixed-width snapshot: `A:xx X:xx Y:xx P:xx SP:xx PC:xxxx`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A:{:02x} X:{:02x} Y:{:02x} P:{:02x} SP:{:02x} PC:{:04x}",
            self.a,
            self.x,
            self.y,
            self.p.bits(),
            self.sp,
            self.pc
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_state() {
        let mut regs = Registers::new();
        regs.a = 0x12;
        regs.sp = 0x00;
        regs.p = Status::all();
        regs.reset();

        assert_eq!(regs.a, 0);
        assert_eq!(regs.p, Status::INTERRUPT_DISABLE | Status::UNUSED);
        assert_eq!(regs.sp, 0xFD);
        assert_eq!(regs.pc, 0xFFFC);
    }

    #[test]
    fn test_format() {
        let regs = Registers {
            a: 0x42,
            x: 0x01,
            y: 0xFF,
            p: Status::default(),
            sp: 0xFD,
            pc: 0x8000,
        };
        assert_eq!(regs.to_string(), "A:42 X:01 Y:ff P:24 SP:fd PC:8000");
    }
}
