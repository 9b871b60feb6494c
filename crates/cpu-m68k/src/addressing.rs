//! Addressing mode definitions for the 68000.
//!
//! The 68000 has twelve addressing modes. Instruction handlers receive each
//! operand as an [`Operand`]: the register named by the opcode's EA field plus
//! the mode. Only the register-direct and address-register-indirect modes are
//! executed so far; asking for any other mode is reported, never guessed.

use crate::registers::Register;

/// Addressing mode for 68000 instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddrMode {
    /// Data register direct: Dn
    DataRegDirect,
    /// Address register direct: An
    AddrRegDirect,
    /// Address register indirect: (An)
    AddrRegIndirect,
    /// Address register indirect with postincrement: (An)+
    AddrRegIndirectPostInc,
    /// Address register indirect with predecrement: -(An)
    AddrRegIndirectPreDec,
    /// Address register indirect with displacement: d16(An)
    AddrRegIndirectDisp,
    /// Address register indirect with index: d8(An,Xn)
    AddrRegIndirectIndex,
    /// Absolute short: (xxx).W
    AbsShort,
    /// Absolute long: (xxx).L
    AbsLong,
    /// Program counter with displacement: d16(PC)
    PcDisp,
    /// Program counter with index: d8(PC,Xn)
    PcIndex,
    /// Immediate: #<data>
    Immediate,
}

impl AddrMode {
    /// Modes the executor can resolve today.
    #[must_use]
    pub const fn is_implemented(self) -> bool {
        matches!(self, Self::DataRegDirect | Self::AddrRegDirect | Self::AddrRegIndirect)
    }
}

/// An instruction operand: register plus addressing mode.
///
/// For the mode-7 family (absolute, PC-relative, immediate) the register is
/// `Pc`, since their extension words come from the instruction stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Operand {
    pub reg: Register,
    pub mode: AddrMode,
}

impl Operand {
    #[must_use]
    pub const fn new(reg: Register, mode: AddrMode) -> Self {
        Self { reg, mode }
    }

    /// Dn
    #[must_use]
    pub const fn data_reg(reg: Register) -> Self {
        Self::new(reg, AddrMode::DataRegDirect)
    }

    /// An
    #[must_use]
    pub const fn addr_reg(reg: Register) -> Self {
        Self::new(reg, AddrMode::AddrRegDirect)
    }

    /// (An)
    #[must_use]
    pub const fn indirect(reg: Register) -> Self {
        Self::new(reg, AddrMode::AddrRegIndirect)
    }
}
