//! Motorola 68000 CPU state and privilege model.
//!
//! A `Cpu68000` is an owned value: registers plus a lifecycle. Memory lives
//! behind the [`M68kBus`](crate::bus::M68kBus) handed to each instruction.
//!
//! ## Lifecycle
//!
//! A fresh CPU is `Uninitialized` and every status bit is reachable, which
//! lets [`Cpu68000::bootstrap`] raise the S bit. Once `Ready`, the system
//! byte of SR behaves as on hardware: user code reads it as zero and its
//! writes are dropped. That is not an error; privileged bits are simply not
//! there for user code.

use emu_core::{Observable, Value};

use crate::bits::change_bit;
use crate::bus::FunctionCode;
use crate::flags::{C, N, S, StatusBit, V, X, Z};
use crate::registers::{Register, Registers, TraceMode};

/// Machine lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Before bootstrap. Privilege gating is inert.
    #[default]
    Uninitialized,
    /// After bootstrap. Privilege gating is active.
    Ready,
}

/// Motorola 68000 CPU.
#[derive(Debug, Clone, Default)]
pub struct Cpu68000 {
    pub regs: Registers,
    lifecycle: Lifecycle,
}

impl Cpu68000 {
    /// Create a CPU with every register cleared, not yet bootstrapped.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regs: Registers::new(),
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// One-time setup: enter supervisor mode and arm privilege gating.
    ///
    /// A7 aliasing needs no wiring; it is resolved on every access. Calling
    /// this again on a ready CPU only logs.
    pub fn bootstrap(&mut self) {
        if self.is_ready() {
            log::debug!("68000 bootstrap requested again; already ready");
            return;
        }
        self.set_status_bit(StatusBit::SupervisorState, true);
        debug_assert!(self.regs.is_supervisor());
        self.lifecycle = Lifecycle::Ready;
        log::debug!("68000 ready: SR=${:04X}", self.regs.sr);
    }

    #[must_use]
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Ready)
    }

    /// Read any register. A7 resolves to USP or SSP by the live S bit.
    #[must_use]
    pub fn register(&self, reg: Register) -> u32 {
        self.regs.get(reg)
    }

    /// Write any register. SR is written whole; gating applies only to
    /// [`Cpu68000::set_status_bit`].
    pub fn set_register(&mut self, reg: Register, value: u32) {
        self.regs.set(reg, value);
    }

    /// Read one status bit. Privileged bits read `false` from user mode.
    #[must_use]
    pub fn status_bit(&self, bit: StatusBit) -> bool {
        if self.is_gated(bit) {
            log::trace!("user-mode read of {bit:?} masked");
            return false;
        }
        (self.regs.sr >> bit.position()) & 1 != 0
    }

    /// Write one status bit. Privileged bits are left unchanged from user mode.
    pub fn set_status_bit(&mut self, bit: StatusBit, value: bool) {
        if self.is_gated(bit) {
            log::trace!("user-mode write of {bit:?} ignored");
            return;
        }
        let sr = change_bit(u32::from(self.regs.sr), value, bit.position());
        self.regs.sr = sr as u16;
    }

    fn is_gated(&self, bit: StatusBit) -> bool {
        self.is_ready() && !self.regs.is_supervisor() && bit.is_privileged()
    }

    /// Get the function code for data accesses.
    #[must_use]
    pub(crate) const fn data_fc(&self) -> FunctionCode {
        FunctionCode::from_flags(self.regs.is_supervisor(), false)
    }
}

// === Observable implementation ===

const M68000_QUERY_PATHS: &[&str] = &[
    "d0", "d1", "d2", "d3", "d4", "d5", "d6", "d7",
    "a0", "a1", "a2", "a3", "a4", "a5", "a6", "a7",
    "usp", "ssp",
    "pc",
    "sr", "ccr",
    "flags.x", "flags.n", "flags.z", "flags.v", "flags.c",
    "flags.s", "flags.m", "flags.t0", "flags.t1",
    "int_mask", "trace",
    "lifecycle",
];

impl Observable for Cpu68000 {
    fn query(&self, path: &str) -> Option<Value> {
        if let Ok(reg) = path.parse::<Register>() {
            return Some(match reg {
                Register::Sr => Value::U16(self.regs.sr),
                _ => self.regs.get(reg).into(),
            });
        }
        // Raw view: observation is never privilege-gated.
        let sr = self.regs.sr;
        match path {
            "ccr" => Some(self.regs.ccr().into()),
            "flags.x" => Some((sr & X != 0).into()),
            "flags.n" => Some((sr & N != 0).into()),
            "flags.z" => Some((sr & Z != 0).into()),
            "flags.v" => Some((sr & V != 0).into()),
            "flags.c" => Some((sr & C != 0).into()),
            "flags.s" => Some(self.regs.is_supervisor().into()),
            "flags.m" => Some((sr & StatusBit::MasterState.mask() != 0).into()),
            "flags.t0" => Some((sr & StatusBit::Trace0.mask() != 0).into()),
            "flags.t1" => Some((sr & StatusBit::Trace1.mask() != 0).into()),
            "int_mask" => Some(self.regs.interrupt_mask().into()),
            "trace" => Some(Value::from(match self.regs.trace_mode() {
                TraceMode::Off => "off",
                TraceMode::AnyInstruction => "any",
                TraceMode::ChangeOfFlow => "flow",
                TraceMode::Undefined => "undefined",
            })),
            "lifecycle" => Some(Value::from(match self.lifecycle {
                Lifecycle::Uninitialized => "uninitialized",
                Lifecycle::Ready => "ready",
            })),
            _ => None,
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        M68000_QUERY_PATHS
    }
}
