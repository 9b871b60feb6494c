//! Motorola 68000 status register flags.
//!
//! ```text
//!  15   14   13   12   11   10    9    8    7    6    5    4    3    2    1    0
//! T1 | T0 | S  | M  | 0  | I2 | I1 | I0 | 0  | 0  | 0  | X  | N  | Z  | V  | C
//! ```
//!
//! The low byte is the condition code register and is always available. The
//! high byte is the system byte; user code cannot see or change it. The M bit
//! has no effect on the 68000 but is kept addressable.

use crate::bits::first_set_bit;
use crate::size::Size;

/// Carry flag.
pub const C: u16 = 0x0001;
/// Overflow flag.
pub const V: u16 = 0x0002;
/// Zero flag.
pub const Z: u16 = 0x0004;
/// Negative flag.
pub const N: u16 = 0x0008;
/// Extend flag.
pub const X: u16 = 0x0010;

/// Interrupt mask bit 0.
pub const I0: u16 = 0x0100;
/// Interrupt mask bit 1.
pub const I1: u16 = 0x0200;
/// Interrupt mask bit 2.
pub const I2: u16 = 0x0400;

/// Master/interrupt state.
pub const M: u16 = 0x1000;
/// Supervisor state.
pub const S: u16 = 0x2000;
/// Trace on change of flow.
pub const T0: u16 = 0x4000;
/// Trace on any instruction.
pub const T1: u16 = 0x8000;

/// A named status register bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBit {
    Carry,
    Overflow,
    Zero,
    Negative,
    Extend,
    L0,
    L1,
    L2,
    MasterState,
    SupervisorState,
    Trace0,
    Trace1,
}

impl StatusBit {
    /// Every named bit, lowest first.
    pub const ALL: [StatusBit; 12] = [
        Self::Carry,
        Self::Overflow,
        Self::Zero,
        Self::Negative,
        Self::Extend,
        Self::L0,
        Self::L1,
        Self::L2,
        Self::MasterState,
        Self::SupervisorState,
        Self::Trace0,
        Self::Trace1,
    ];

    /// Single-bit selector for this flag.
    #[must_use]
    pub const fn mask(self) -> u16 {
        match self {
            Self::Carry => C,
            Self::Overflow => V,
            Self::Zero => Z,
            Self::Negative => N,
            Self::Extend => X,
            Self::L0 => I0,
            Self::L1 => I1,
            Self::L2 => I2,
            Self::MasterState => M,
            Self::SupervisorState => S,
            Self::Trace0 => T0,
            Self::Trace1 => T1,
        }
    }

    /// Bit position within SR.
    #[must_use]
    pub const fn position(self) -> u32 {
        match first_set_bit(self.mask() as u32) {
            Some(pos) => pos,
            None => unreachable!(),
        }
    }

    /// True for bits above Extend, which user mode cannot access.
    #[must_use]
    pub const fn is_privileged(self) -> bool {
        self.position() > Self::Extend.position()
    }
}

/// Status register helper functions.
pub struct Status;

impl Status {
    /// Update N and Z from `value` judged at `size`.
    #[must_use]
    pub const fn update_nz(sr: u16, value: u32, size: Size) -> u16 {
        let mut result = sr & !(N | Z);
        if size.is_zero(value) {
            result |= Z;
        }
        if size.is_negative(value) {
            result |= N;
        }
        result
    }

    /// Clear V and C flags (used by MOVE, AND, OR, EOR, etc).
    #[must_use]
    pub const fn clear_vc(sr: u16) -> u16 {
        sr & !(V | C)
    }
}
