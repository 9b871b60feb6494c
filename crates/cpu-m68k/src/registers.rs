//! Motorola 68000 CPU registers.
//!
//! - D0-D7: 8 data registers (32-bit)
//! - A0-A7: 8 address registers (32-bit, A7 is the active stack pointer)
//! - USP: User stack pointer (A7 when in user mode)
//! - SSP: Supervisor stack pointer (A7 when in supervisor mode)
//! - PC: Program counter (32-bit, 24 bits reach the bus)
//! - SR: Status register (16-bit)
//!
//! A7 has no storage of its own. Every access resolves through the live
//! supervisor bit, so switching privilege switches stacks immediately.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::{CpuError, Violation};
use crate::flags::{S, T0, T1};

/// Register identifiers visible to instruction handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    Pc,
    Sr,
    Usp,
    Ssp,
    D0,
    D1,
    D2,
    D3,
    D4,
    D5,
    D6,
    D7,
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    A7,
}

impl Register {
    /// Every identifier, in raw index order.
    pub const ALL: [Register; 20] = [
        Self::Pc,
        Self::Sr,
        Self::Usp,
        Self::Ssp,
        Self::D0,
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::A0,
        Self::A1,
        Self::A2,
        Self::A3,
        Self::A4,
        Self::A5,
        Self::A6,
        Self::A7,
    ];

    /// Data register Dn (n is taken modulo 8, as in an opcode's register field).
    #[must_use]
    pub const fn data(n: u8) -> Self {
        Self::ALL[4 + (n & 7) as usize]
    }

    /// Address register An (n is taken modulo 8).
    #[must_use]
    pub const fn addr(n: u8) -> Self {
        Self::ALL[12 + (n & 7) as usize]
    }

    /// Identifier for a raw index (`Pc` = 0 … `A7` = 19).
    #[track_caller]
    pub fn from_index(index: u8) -> Result<Self, CpuError> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or_else(|| CpuError::internal(Violation::InvalidRegister(index)))
    }

    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_data(self) -> bool {
        matches!(self as u8, 4..=11)
    }

    #[must_use]
    pub const fn is_address(self) -> bool {
        matches!(self as u8, 12..=19)
    }

    /// Register number within its bank (D3 → 3, A7 → 7). `None` for control registers.
    #[must_use]
    pub const fn number(self) -> Option<usize> {
        let index = self as usize;
        match index {
            4..=11 => Some(index - 4),
            12..=19 => Some(index - 12),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        const NAMES: [&str; 20] = [
            "pc", "sr", "usp", "ssp", "d0", "d1", "d2", "d3", "d4", "d5", "d6", "d7", "a0", "a1",
            "a2", "a3", "a4", "a5", "a6", "a7",
        ];
        NAMES[self as usize]
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A register name that is not one of the identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown register `{0}`")]
pub struct UnknownRegister(pub String);

impl FromStr for Register {
    type Err = UnknownRegister;

    /// Parses `d0`…`a7`, `pc`, `sr`, `usp`, `ssp` (case-insensitive; `sp` is A7).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        if lower == "sp" {
            return Ok(Self::A7);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|reg| reg.name() == lower)
            .ok_or_else(|| UnknownRegister(s.to_owned()))
    }
}

/// Trace mode selected by T1/T0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceMode {
    /// T1=0 T0=0.
    Off,
    /// T1=1 T0=0: trace every instruction.
    AnyInstruction,
    /// T1=0 T0=1: trace only on change of flow.
    ChangeOfFlow,
    /// T1=1 T0=1: undefined.
    Undefined,
}

/// 68000 CPU register set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registers {
    /// Data registers D0-D7.
    pub d: [u32; 8],
    /// Address registers A0-A6 (A7 is handled via USP/SSP).
    pub a: [u32; 7],
    /// User stack pointer (active A7 when in user mode).
    pub usp: u32,
    /// Supervisor stack pointer (active A7 when in supervisor mode).
    pub ssp: u32,
    /// Program counter.
    pub pc: u32,
    /// Status register.
    pub sr: u16,
}

impl Registers {
    /// All registers cleared, user mode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            d: [0; 8],
            a: [0; 7],
            usp: 0,
            ssp: 0,
            pc: 0,
            sr: 0,
        }
    }

    /// Read a register. SR is zero-extended.
    #[must_use]
    pub fn get(&self, reg: Register) -> u32 {
        match reg {
            Register::Pc => self.pc,
            Register::Sr => u32::from(self.sr),
            Register::Usp => self.usp,
            Register::Ssp => self.ssp,
            Register::A7 => self.active_sp(),
            _ => match reg.number() {
                Some(n) if reg.is_data() => self.d[n],
                Some(n) => self.a[n],
                None => unreachable!("control registers handled above"),
            },
        }
    }

    /// Write a register. SR keeps the low 16 bits of `value`.
    pub fn set(&mut self, reg: Register, value: u32) {
        match reg {
            Register::Pc => self.pc = value,
            Register::Sr => self.sr = value as u16,
            Register::Usp => self.usp = value,
            Register::Ssp => self.ssp = value,
            Register::A7 => self.set_active_sp(value),
            _ => match reg.number() {
                Some(n) if reg.is_data() => self.d[n] = value,
                Some(n) => self.a[n] = value,
                None => unreachable!("control registers handled above"),
            },
        }
    }

    /// Get the active stack pointer (USP or SSP based on supervisor mode).
    #[must_use]
    pub const fn active_sp(&self) -> u32 {
        if self.is_supervisor() {
            self.ssp
        } else {
            self.usp
        }
    }

    /// Set the active stack pointer.
    pub fn set_active_sp(&mut self, value: u32) {
        if self.is_supervisor() {
            self.ssp = value;
        } else {
            self.usp = value;
        }
    }

    /// Check if in supervisor mode.
    #[must_use]
    pub const fn is_supervisor(&self) -> bool {
        self.sr & S != 0
    }

    /// Get the interrupt mask level (0-7).
    #[must_use]
    pub const fn interrupt_mask(&self) -> u8 {
        ((self.sr >> 8) & 0x07) as u8
    }

    #[must_use]
    pub const fn trace_mode(&self) -> TraceMode {
        match (self.sr & T1 != 0, self.sr & T0 != 0) {
            (false, false) => TraceMode::Off,
            (true, false) => TraceMode::AnyInstruction,
            (false, true) => TraceMode::ChangeOfFlow,
            (true, true) => TraceMode::Undefined,
        }
    }

    /// Get the condition code register (low byte of SR).
    #[must_use]
    pub const fn ccr(&self) -> u8 {
        (self.sr & 0xFF) as u8
    }
}
