//! Operand sizes.

use std::fmt;

use crate::error::{CpuError, Violation};

/// Operation size: byte, word or long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Size {
    /// 8 bits.
    Byte,
    /// 16 bits.
    Word,
    /// 32 bits.
    Long,
}

impl Size {
    /// Width in bytes.
    #[must_use]
    pub const fn bytes(self) -> u32 {
        match self {
            Self::Byte => 1,
            Self::Word => 2,
            Self::Long => 4,
        }
    }

    /// Mask covering the bits this size operates on.
    #[must_use]
    pub const fn mask(self) -> u32 {
        match self {
            Self::Byte => 0x0000_00FF,
            Self::Word => 0x0000_FFFF,
            Self::Long => 0xFFFF_FFFF,
        }
    }

    /// Sign bit at this size.
    #[must_use]
    pub const fn msb(self) -> u32 {
        match self {
            Self::Byte => 0x0000_0080,
            Self::Word => 0x0000_8000,
            Self::Long => 0x8000_0000,
        }
    }

    #[must_use]
    pub const fn truncate(self, value: u32) -> u32 {
        value & self.mask()
    }

    #[must_use]
    pub const fn is_negative(self, value: u32) -> bool {
        value & self.msb() != 0
    }

    #[must_use]
    pub const fn is_zero(self, value: u32) -> bool {
        value & self.mask() == 0
    }

    /// Merge `value` into the low bits of `into`, keeping the bits above this size.
    #[must_use]
    pub const fn merge(self, into: u32, value: u32) -> u32 {
        (into & !self.mask()) | (value & self.mask())
    }

    /// Size for a raw width in bytes.
    ///
    /// Anything other than 1, 2 or 4 is a decode bug upstream.
    #[track_caller]
    pub fn from_bytes(width: u32) -> Result<Self, CpuError> {
        match width {
            1 => Ok(Self::Byte),
            2 => Ok(Self::Word),
            4 => Ok(Self::Long),
            other => Err(CpuError::internal(Violation::InvalidWidth(other))),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Byte => "byte",
            Self::Word => "word",
            Self::Long => "long",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_preserves_bits_above_size() {
        let reg = 0xAABB_CCDD;
        assert_eq!(Size::Byte.merge(reg, 0x1234_5678), 0xAABB_CC78);
        assert_eq!(Size::Word.merge(reg, 0x1234_5678), 0xAABB_5678);
        assert_eq!(Size::Long.merge(reg, 0x1234_5678), 0x1234_5678);
    }

    #[test]
    fn sign_bit_tracks_size() {
        assert!(Size::Byte.is_negative(0x80));
        assert!(!Size::Byte.is_negative(0x7F));
        assert!(!Size::Word.is_negative(0x80));
        assert!(Size::Word.is_negative(0x8000));
        assert!(!Size::Long.is_negative(0x8000));
        assert!(Size::Long.is_negative(0x8000_0000));
    }

    #[test]
    fn zero_is_judged_at_size() {
        assert!(Size::Byte.is_zero(0x1200));
        assert!(!Size::Word.is_zero(0x1200));
        assert!(Size::Word.is_zero(0xFFFF_0000));
        assert!(!Size::Long.is_zero(0xFFFF_0000));
    }

    #[test]
    fn from_bytes_accepts_bus_widths_only() {
        assert_eq!(Size::from_bytes(1), Ok(Size::Byte));
        assert_eq!(Size::from_bytes(2), Ok(Size::Word));
        assert_eq!(Size::from_bytes(4), Ok(Size::Long));
        for width in [0, 3, 5, 8] {
            let err = Size::from_bytes(width).unwrap_err();
            assert_eq!(err.violation(), Some(Violation::InvalidWidth(width)));
        }
    }
}
