//! Instruction execution.
//!
//! The decoder (not part of this crate yet) turns an opcode into an
//! [`Instruction`] and calls [`Cpu68000::execute`]. Each handler resolves
//! its operands through `ea.rs`, validates the combination, then performs
//! the bus cycles and flag updates. New opcodes add a variant and a handler.

use crate::addressing::Operand;
use crate::bus::M68kBus;
use crate::cpu::Cpu68000;
use crate::error::{CpuError, Violation};
use crate::flags::Status;
use crate::size::Size;

/// A decoded instruction ready to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// MOVE.size src, dst
    Move {
        dst: Operand,
        src: Operand,
        size: Size,
    },
}

impl Cpu68000 {
    /// Execute one decoded instruction.
    pub fn execute<B: M68kBus>(&mut self, bus: &mut B, instr: Instruction) -> Result<(), CpuError> {
        match instr {
            Instruction::Move { dst, src, size } => self.exec_move(bus, dst, src, size),
        }
    }

    /// MOVE: copy `src` to `dst` at `size` and set N/Z from the value moved.
    ///
    /// V and C are cleared, X is untouched. Register destinations keep the
    /// bits above `size`. Nothing is modified if any step fails.
    pub fn exec_move<B: M68kBus>(
        &mut self,
        bus: &mut B,
        dst: Operand,
        src: Operand,
        size: Size,
    ) -> Result<(), CpuError> {
        let source = self.resolve(src)?;
        let dest = self.resolve(dst)?;

        // No memory-to-memory path in this core.
        if source.is_memory() && dest.is_memory() {
            return Err(CpuError::internal(Violation::MemoryToMemory));
        }
        // Memory sources are only fetched as longwords.
        if source.is_memory() && size != Size::Long {
            return Err(CpuError::internal(Violation::IndirectWidth(size)));
        }

        let value = self.read_target(bus, source, size).inspect_err(|err| {
            log::debug!("move.{size} {src:?} read failed ({:?}): {err}", self.data_fc());
        })?;
        let moved = self.write_target(bus, dest, value, size).inspect_err(|err| {
            log::debug!("move.{size} {dst:?} write failed ({:?}): {err}", self.data_fc());
        })?;

        self.set_flags_move(moved, size);
        log::trace!(
            "move.{size} {} -> {}: ${moved:08X} SR=${:04X}",
            src.reg,
            dst.reg,
            self.regs.sr
        );
        Ok(())
    }

    /// Set MOVE-style flags: clear V and C, update N and Z.
    pub(crate) fn set_flags_move(&mut self, value: u32, size: Size) {
        self.regs.sr = Status::update_nz(Status::clear_vc(self.regs.sr), value, size);
    }
}
