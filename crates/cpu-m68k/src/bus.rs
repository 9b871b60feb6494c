//! M68k bus trait with sized access and function codes.
//!
//! The CPU never owns memory. Every operand access goes through an
//! [`M68kBus`] passed in by the machine, so several machines (or test
//! fixtures) can exist side by side. Accesses carry the function code the
//! 68000 drives on FC0-FC2 so a bus can tell supervisor from user cycles.

use crate::error::BusFault;
use crate::size::Size;

/// Function code values from the 68000's FC0-FC2 pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionCode {
    /// User data access (FC=1).
    UserData = 1,
    /// User program access (FC=2).
    UserProgram = 2,
    /// Supervisor data access (FC=5).
    SupervisorData = 5,
    /// Supervisor program access (FC=6).
    SupervisorProgram = 6,
}

impl FunctionCode {
    /// Build a function code from supervisor flag and program/data flag.
    #[must_use]
    pub const fn from_flags(supervisor: bool, program: bool) -> Self {
        match (supervisor, program) {
            (false, false) => Self::UserData,
            (false, true) => Self::UserProgram,
            (true, false) => Self::SupervisorData,
            (true, true) => Self::SupervisorProgram,
        }
    }
}

/// Bus trait for 68000-family CPUs.
///
/// Multi-byte values are big-endian: the byte at `addr` is the most
/// significant. Values passed to `write` may carry bits above `size`; the
/// bus stores only the low `size` bytes.
pub trait M68kBus {
    /// Read `size` bytes at `addr`, zero-extended.
    fn read(&mut self, addr: u32, size: Size, fc: FunctionCode) -> Result<u32, BusFault>;

    /// Write the low `size` bytes of `value` at `addr`.
    fn write(&mut self, addr: u32, value: u32, size: Size, fc: FunctionCode)
    -> Result<(), BusFault>;
}
