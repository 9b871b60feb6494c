//! Effective address resolution for the 68000.
//!
//! Resolution turns an [`Operand`] into a [`Target`]: either a register or a
//! memory address. It never touches memory, so a handler can resolve both
//! operands and validate the combination before any bus cycle happens.

use crate::addressing::{AddrMode, Operand};
use crate::bus::M68kBus;
use crate::cpu::Cpu68000;
use crate::error::{CpuError, Violation};
use crate::registers::Register;
use crate::size::Size;

/// Where an operand lives once its addressing mode is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Target {
    Register(Register),
    Memory(u32),
}

impl Target {
    pub(crate) const fn is_memory(self) -> bool {
        matches!(self, Self::Memory(_))
    }
}

impl Cpu68000 {
    /// Resolve an operand without reading or writing it.
    #[track_caller]
    pub(crate) fn resolve(&self, op: Operand) -> Result<Target, CpuError> {
        if !op.mode.is_implemented() {
            return Err(CpuError::internal(Violation::UnsupportedMode(op.mode)));
        }
        let reg_fits = match op.mode {
            AddrMode::DataRegDirect => op.reg.is_data(),
            _ => op.reg.is_address(),
        };
        if !reg_fits {
            return Err(CpuError::internal(Violation::ModeRegisterMismatch {
                mode: op.mode,
                reg: op.reg,
            }));
        }

        Ok(match op.mode {
            AddrMode::AddrRegIndirect => Target::Memory(self.regs.get(op.reg)),
            _ => Target::Register(op.reg),
        })
    }

    /// Read a resolved operand. Register reads return the full 32 bits.
    pub(crate) fn read_target<B: M68kBus>(
        &self,
        bus: &mut B,
        target: Target,
        size: Size,
    ) -> Result<u32, CpuError> {
        match target {
            Target::Register(reg) => Ok(self.regs.get(reg)),
            Target::Memory(addr) => Ok(bus.read(addr, size, self.data_fc())?),
        }
    }

    /// Store `value` at `size` into a resolved operand.
    ///
    /// Register destinations keep the bits above `size`. Returns the value as
    /// stored, truncated to `size`.
    pub(crate) fn write_target<B: M68kBus>(
        &mut self,
        bus: &mut B,
        target: Target,
        value: u32,
        size: Size,
    ) -> Result<u32, CpuError> {
        let stored = size.truncate(value);
        match target {
            Target::Register(reg) => {
                let merged = size.merge(self.regs.get(reg), value);
                self.regs.set(reg, merged);
            }
            Target::Memory(addr) => bus.write(addr, stored, size, self.data_fc())?,
        }
        Ok(stored)
    }
}
