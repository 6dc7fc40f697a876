//! # Status Flags and Flag Engine
//!
//! The processor status register is an 8-bit bitfield (NV-BDIZC, high to low).
//! Bit 5 has no function on the NMOS 6502 and always reads as 1.
//!
//! The flag engine is a handful of pure transformations over [`Status`]. Each one
//! touches only the bit it names, so they can be composed in any order. Load and
//! transfer instructions use [`Status::set_zero_negative`] as a pass-through;
//! ADC and SBC compose the addition-specific carry and overflow rules.

use bitflags::bitflags;

bitflags! {
    /// Processor status register.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        const CARRY = 0b0000_0001;
        const ZERO = 0b0000_0010;
        const INTERRUPT_DISABLE = 0b0000_0100;
        const DECIMAL_MODE = 0b0000_1000;
        const BREAK_COMMAND = 0b0001_0000;
        const UNUSED = 0b0010_0000;
        const OVERFLOW = 0b0100_0000;
        const NEGATIVE = 0b1000_0000;
    }
}

impl Default for Status {
    /// Power-on status: interrupts disabled, unused bit set.
    fn default() -> Self {
        Status::INTERRUPT_DISABLE | Status::UNUSED
    }
}

impl Status {
    /// Sets Zero iff `value` is 0.
    pub fn set_zero(&mut self, value: u8) {
        self.set(Status::ZERO, value == 0);
    }

    /// Copies bit 7 of `value` into Negative.
    pub fn set_negative(&mut self, value: u8) {
        self.set(Status::NEGATIVE, value & 0x80 != 0);
    }

    /// Applies [`set_zero`](Self::set_zero) and [`set_negative`](Self::set_negative),
    /// returning `value` unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use m6502::Status;
    ///
    /// let mut p = Status::default();
    /// let a = p.set_zero_negative(0x80);
    /// assert_eq!(a, 0x80);
    /// assert!(p.contains(Status::NEGATIVE));
    /// assert!(!p.contains(Status::ZERO));
    /// ```
    pub fn set_zero_negative(&mut self, value: u8) -> u8 {
        self.set_zero(value);
        self.set_negative(value);
        value
    }

    /// Carry = bit 8 of a widened 8-bit addition.
    pub fn set_carry_on_addition(&mut self, sum: u16) -> u16 {
        self.set(Status::CARRY, sum & 0x0100 != 0);
        sum
    }

    /// Overflow = both operands share a sign and the result's sign differs.
    ///
    /// Operands and result are the widened 8-bit values of the addition; only
    /// bit 7 is inspected.
    pub fn set_overflow_on_addition(&mut self, a: u16, b: u16, result: u16) -> u16 {
        self.set(Status::OVERFLOW, !(a ^ b) & (a ^ result) & 0x0080 != 0);
        result
    }

    /// Status byte as pushed by PHP/BRK (`brk = true`) or IRQ/NMI (`brk = false`).
    pub fn pushed(self, brk: bool) -> u8 {
        let mut byte = self | Status::UNUSED;
        byte.set(Status::BREAK_COMMAND, brk);
        byte.bits()
    }

    /// Status restored by PLP/RTI. Break is not a real latch and is dropped.
    pub fn pulled(byte: u8) -> Self {
        (Status::from_bits_retain(byte) - Status::BREAK_COMMAND) | Status::UNUSED
    }
}
