//! Mega Drive address space: cartridge ROM and 68000 work RAM.
//!
//! One 16 MiB byte store covers the whole 24-bit bus. Named regions are
//! windows into it:
//!
//! | Region        | Base      | Size      |
//! |---------------|-----------|-----------|
//! | Cartridge ROM | `$000000` | `$400000` |
//! | RAM           | `$FF0000` | `$010000` |
//!
//! Multi-byte values are stored big-endian, as the 68000 sees them,
//! regardless of the host.

use cpu_m68k::{Access, BusFault, CpuError, FunctionCode, M68kBus, Size};

/// Bytes addressable on the 24-bit bus.
pub const ADDRESS_SPACE_SIZE: usize = 0x100_0000;

/// Cartridge ROM base address.
pub const ROM_BASE: u32 = 0x00_0000;
/// Cartridge ROM window size: 4 MiB.
pub const ROM_SIZE: u32 = 0x40_0000;

/// Work RAM base address.
pub const RAM_BASE: u32 = 0xFF_0000;
/// Work RAM size: 64 KiB.
pub const RAM_SIZE: u32 = 0x1_0000;

/// A named window of the address space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    CartridgeRom,
    Ram,
}

impl Region {
    pub const ALL: [Region; 2] = [Self::CartridgeRom, Self::Ram];

    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Self::CartridgeRom => ROM_BASE,
            Self::Ram => RAM_BASE,
        }
    }

    #[must_use]
    pub const fn size(self) -> u32 {
        match self {
            Self::CartridgeRom => ROM_SIZE,
            Self::Ram => RAM_SIZE,
        }
    }

    /// One past the last address of the region.
    #[must_use]
    pub const fn end(self) -> u32 {
        self.base() + self.size()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CartridgeRom => "rom",
            Self::Ram => "ram",
        }
    }

    /// True if `len` bytes starting at `addr` lie wholly inside the region.
    #[must_use]
    pub const fn contains(self, addr: u32, len: u32) -> bool {
        let start = addr as u64;
        start >= self.base() as u64 && start + len as u64 <= self.end() as u64
    }
}

/// How strictly accesses are bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessPolicy {
    /// Only the end of the store faults. Gaps between regions are plain memory.
    #[default]
    Flat,
    /// Every access must fall wholly inside one mapped region.
    Mapped,
}

/// The 68000's view of Mega Drive memory.
pub struct AddressSpace {
    bytes: Box<[u8]>,
    regions: Vec<Region>,
    policy: AccessPolicy,
}

impl AddressSpace {
    /// Zero-filled address space with the region table in place.
    #[must_use]
    pub fn new(policy: AccessPolicy) -> Self {
        let mut space = Self {
            bytes: vec![0; ADDRESS_SPACE_SIZE].into_boxed_slice(),
            regions: Vec::with_capacity(Region::ALL.len()),
            policy,
        };
        space.initialize_regions();
        space
    }

    /// Populate the region table. Rewrites the same fixed entries if repeated.
    pub fn initialize_regions(&mut self) {
        self.regions.clear();
        self.regions.extend(Region::ALL);
    }

    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Region containing `addr`, if any.
    #[must_use]
    pub fn region_at(&self, addr: u32) -> Option<Region> {
        self.regions.iter().copied().find(|r| r.contains(addr, 1))
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Read `size` bytes at `addr`, big-endian, zero-extended.
    pub fn read(&self, addr: u32, size: Size) -> Result<u32, BusFault> {
        let span = self.span(addr, size, Access::Read)?;
        let mut be = [0u8; 4];
        be[4 - span.len()..].copy_from_slice(&self.bytes[span]);
        Ok(u32::from_be_bytes(be))
    }

    /// Write the low `size` bytes of `value` at `addr`, big-endian.
    pub fn write(&mut self, addr: u32, value: u32, size: Size) -> Result<(), BusFault> {
        let span = self.span(addr, size, Access::Write)?;
        let n = span.len();
        self.bytes[span].copy_from_slice(&value.to_be_bytes()[4 - n..]);
        Ok(())
    }

    /// Read with a raw byte width (1, 2 or 4).
    pub fn read_width(&self, addr: u32, width: u32) -> Result<u32, CpuError> {
        let size = Size::from_bytes(width)?;
        Ok(self.read(addr, size)?)
    }

    /// Write with a raw byte width (1, 2 or 4).
    pub fn write_width(&mut self, addr: u32, value: u32, width: u32) -> Result<(), CpuError> {
        let size = Size::from_bytes(width)?;
        Ok(self.write(addr, value, size)?)
    }

    /// Read a byte without bounds faults (for observation). The address wraps at 24 bits.
    #[must_use]
    pub fn peek(&self, addr: u32) -> u8 {
        self.bytes[(addr & 0x00FF_FFFF) as usize]
    }

    fn span(
        &self,
        addr: u32,
        size: Size,
        access: Access,
    ) -> Result<std::ops::Range<usize>, BusFault> {
        let len = size.bytes();
        let in_bounds = match self.policy {
            AccessPolicy::Flat => u64::from(addr) + u64::from(len) <= self.bytes.len() as u64,
            AccessPolicy::Mapped => self.region_at(addr).is_some_and(|r| r.contains(addr, len)),
        };
        if !in_bounds {
            log::debug!("{access:?} of {size} at ${addr:08X} outside {:?} map", self.policy);
            return Err(BusFault {
                address: addr,
                size,
                access,
            });
        }
        let start = addr as usize;
        Ok(start..start + len as usize)
    }
}

impl M68kBus for AddressSpace {
    fn read(&mut self, addr: u32, size: Size, _fc: FunctionCode) -> Result<u32, BusFault> {
        AddressSpace::read(self, addr, size)
    }

    fn write(
        &mut self,
        addr: u32,
        value: u32,
        size: Size,
        _fc: FunctionCode,
    ) -> Result<(), BusFault> {
        AddressSpace::write(self, addr, value, size)
    }
}
