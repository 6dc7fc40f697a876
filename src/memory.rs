//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from specific
//! memory implementations. The core never assumes a concrete backing store: RAM
//! layout, memory-mapped devices and bank switching all live behind this trait.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - fetches and stores always succeed
//! - The full 16-bit address space (0x0000-0xFFFF) must be accepted
//! - Stores report the byte they replaced

/// Default size of a flat 6502 address space.
pub const DEFAULT_MEMORY_SIZE: usize = 0x10000;

/// Memory bus trait for the CPU to fetch and store bytes.
///
/// # Design
///
/// - `fetch(&self)`: Immutable reference allows shared reads
/// - `store(&mut self)`: Mutable reference makes side effects explicit
/// - `reset(&mut self)`: The host decides what "cleared" means
/// - No error types: 6502 hardware has no bus error mechanism
///
/// # Examples
///
/// ```
/// use m6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn reset(&mut self) {
///         self.ram = [0; 0x8000];
///     }
///
///     fn fetch(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn store(&mut self, addr: u16, value: u8) -> u8 {
///         if addr < 0x8000 {
///             std::mem::replace(&mut self.ram[addr as usize], value)
///         } else {
///             // Writes to ROM are silently ignored
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Returns memory to the host's notion of a cleared state.
    fn reset(&mut self);

    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic. Unmapped addresses may return garbage
    /// (matching 6502 hardware behavior).
    fn fetch(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address and returns the byte
    /// previously held there.
    ///
    /// This method must never panic. Read-only or unmapped addresses may
    /// ignore the write.
    fn store(&mut self, addr: u16, value: u8) -> u8;
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses are mapped to a single contiguous array. `reset()` fills
/// it with 0xFF, the pattern of an unprogrammed EPROM.
///
/// Reads and writes can be switched off independently at runtime, which lets a
/// test harness make the store read-only or write-only without changing the
/// call contract:
/// - reads disabled: `fetch` returns 0xFF
/// - writes disabled: `store` returns the current byte and changes nothing
///
/// # Examples
///
/// ```
/// use m6502::{BasicMemory, MemoryBus};
///
/// let mut mem = BasicMemory::new();
/// mem.store(0x1234, 0x42);
/// assert_eq!(mem.fetch(0x1234), 0x42);
///
/// mem.set_disable_writes(true);
/// assert_eq!(mem.store(0x1234, 0x00), 0x42);
/// assert_eq!(mem.fetch(0x1234), 0x42);
/// ```
pub struct BasicMemory {
    data: Box<[u8; DEFAULT_MEMORY_SIZE]>,
    disable_reads: bool,
    disable_writes: bool,
}

impl BasicMemory {
    /// Creates memory filled with 0xFF and both reads and writes enabled.
    pub fn new() -> Self {
        Self {
            data: Box::new([0xFF; DEFAULT_MEMORY_SIZE]),
            disable_reads: false,
            disable_writes: false,
        }
    }

    /// Copies `bytes` into memory starting at `start`, wrapping at 0xFFFF.
    ///
    /// Bypasses the read/write toggles.
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Makes every fetch return 0xFF while set.
    pub fn set_disable_reads(&mut self, disabled: bool) {
        self.disable_reads = disabled;
    }

    /// Makes every store a no-op while set.
    pub fn set_disable_writes(&mut self, disabled: bool) {
        self.disable_writes = disabled;
    }

    pub fn reads_disabled(&self) -> bool {
        self.disable_reads
    }

    pub fn writes_disabled(&self) -> bool {
        self.disable_writes
    }
}

impl Default for BasicMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for BasicMemory {
    fn reset(&mut self) {
        self.data.fill(0xFF);
    }

    fn fetch(&self, addr: u16) -> u8 {
        if self.disable_reads {
            0xFF
        } else {
            self.data[addr as usize]
        }
    }

    fn store(&mut self, addr: u16, value: u8) -> u8 {
        let slot = &mut self.data[addr as usize];
        if self.disable_writes {
            *slot
        } else {
            std::mem::replace(slot, value)
        }
    }
}
