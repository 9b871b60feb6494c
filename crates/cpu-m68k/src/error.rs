//! Error taxonomy for the CPU core.
//!
//! Two kinds of failure exist. An internal-invariant violation means the
//! caller (normally the decoder) handed the core something it can never
//! execute; the error records where it was detected. A bus fault is an
//! ordinary emulated event: the driver can vector the CPU into the bus-error
//! exception instead of stopping the host.

use std::panic::Location;

use thiserror::Error;

use crate::addressing::AddrMode;
use crate::registers::Register;
use crate::size::Size;

/// The precondition an internal-invariant error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("register index {0} does not name a register")]
    InvalidRegister(u8),
    #[error("operand width of {0} bytes (expected 1, 2 or 4)")]
    InvalidWidth(u32),
    #[error("addressing mode {0:?} is not implemented")]
    UnsupportedMode(AddrMode),
    #[error("{reg} cannot be used with addressing mode {mode:?}")]
    ModeRegisterMismatch { mode: AddrMode, reg: Register },
    #[error("memory-to-memory transfer")]
    MemoryToMemory,
    #[error("address register indirect source at {0} width")]
    IndirectWidth(Size),
}

/// Direction of a faulting bus cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
}

/// A bus cycle no device answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("bus error: {access:?} of {size} at ${address:08X}")]
pub struct BusFault {
    pub address: u32,
    pub size: Size,
    pub access: Access,
}

/// Failure of a CPU-core operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error("internal invariant violated: {violation} (detected at {location})")]
    Internal {
        violation: Violation,
        location: &'static Location<'static>,
    },
    #[error(transparent)]
    Bus(#[from] BusFault),
}

impl CpuError {
    /// Internal-invariant error located at the caller.
    #[track_caller]
    #[must_use]
    pub fn internal(violation: Violation) -> Self {
        Self::Internal {
            violation,
            location: Location::caller(),
        }
    }

    #[must_use]
    pub const fn violation(&self) -> Option<Violation> {
        match self {
            Self::Internal { violation, .. } => Some(*violation),
            Self::Bus(_) => None,
        }
    }

    #[must_use]
    pub const fn bus_fault(&self) -> Option<BusFault> {
        match self {
            Self::Bus(fault) => Some(*fault),
            Self::Internal { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_bus_fault(&self) -> bool {
        matches!(self, Self::Bus(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_error_records_detection_site() {
        let err = CpuError::internal(Violation::MemoryToMemory);
        let CpuError::Internal { location, .. } = err else {
            panic!("expected internal error");
        };
        assert!(location.file().ends_with("error.rs"));
        assert!(err.to_string().contains("memory-to-memory"));
        assert!(!err.is_bus_fault());
    }

    #[test]
    fn bus_fault_converts_and_displays() {
        let fault = BusFault {
            address: 0x00FF_FFFE,
            size: Size::Long,
            access: Access::Write,
        };
        let err = CpuError::from(fault);
        assert!(err.is_bus_fault());
        assert_eq!(err.bus_fault(), Some(fault));
        assert_eq!(err.violation(), None);
        assert_eq!(err.to_string(), "bus error: Write of long at $00FFFFFE");
    }
}
