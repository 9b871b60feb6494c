//! Top-level Mega Drive system.
//!
//! Owns the CPU and its address space. Each `MegaDrive` is independent;
//! nothing here is global, so several can run in one process.

use cpu_m68k::{Cpu68000, CpuError, Operand, Register, Size, StatusBit};
use emu_core::{Observable, Value};

use crate::config::MegaDriveConfig;
use crate::memory::AddressSpace;

pub struct MegaDrive {
    pub cpu: Cpu68000,
    pub memory: AddressSpace,
}

impl MegaDrive {
    #[must_use]
    pub fn new(config: &MegaDriveConfig) -> Self {
        let mut md = Self {
            cpu: Cpu68000::new(),
            memory: AddressSpace::new(config.access_policy),
        };
        if config.bootstrap {
            md.cpu.bootstrap();
        }
        log::debug!(
            "mega drive created: {:?} access, cpu {:?}",
            config.access_policy,
            md.cpu.lifecycle()
        );
        md
    }

    /// Enter supervisor state. Repeating it has no further effect.
    pub fn bootstrap(&mut self) {
        self.cpu.bootstrap();
    }

    #[must_use]
    pub fn register(&self, reg: Register) -> u32 {
        self.cpu.register(reg)
    }

    pub fn set_register(&mut self, reg: Register, value: u32) {
        self.cpu.set_register(reg, value);
    }

    #[must_use]
    pub fn status_bit(&self, bit: StatusBit) -> bool {
        self.cpu.status_bit(bit)
    }

    pub fn set_status_bit(&mut self, bit: StatusBit, value: bool) {
        self.cpu.set_status_bit(bit, value);
    }

    /// Read `width` bytes (1, 2 or 4) at `addr`.
    pub fn read(&self, addr: u32, width: u32) -> Result<u32, CpuError> {
        self.memory.read_width(addr, width)
    }

    /// Write the low `width` bytes (1, 2 or 4) of `value` at `addr`.
    pub fn write(&mut self, addr: u32, value: u32, width: u32) -> Result<(), CpuError> {
        self.memory.write_width(addr, value, width)
    }

    pub fn exec_move(&mut self, dst: Operand, src: Operand, size: Size) -> Result<(), CpuError> {
        self.cpu.exec_move(&mut self.memory, dst, src, size)
    }
}

impl Default for MegaDrive {
    fn default() -> Self {
        Self::new(&MegaDriveConfig::default())
    }
}

impl Observable for MegaDrive {
    fn query(&self, path: &str) -> Option<Value> {
        if let Some(rest) = path.strip_prefix("cpu.") {
            self.cpu.query(rest)
        } else if let Some(rest) = path.strip_prefix("memory.") {
            let region = self.memory.regions().iter().find(|r| rest.starts_with(r.name()));
            if let Some(region) = region {
                return match &rest[region.name().len()..] {
                    ".base" => Some(region.base().into()),
                    ".size" => Some(region.size().into()),
                    _ => None,
                };
            }
            let addr = u32::try_from(parse_hex_or_dec(rest)?).ok()?;
            if addr as usize >= self.memory.capacity() {
                return None;
            }
            Some(Value::U8(self.memory.peek(addr)))
        } else {
            self.cpu.query(path)
        }
    }

    fn query_paths(&self) -> &'static [&'static str] {
        &[
            "cpu.<68000_paths>",
            "memory.<address>",
            "memory.rom.base",
            "memory.rom.size",
            "memory.ram.base",
            "memory.ram.size",
        ]
    }
}

fn parse_hex_or_dec(s: &str) -> Option<u64> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16).ok()
    } else if let Some(hex) = s.strip_prefix('$') {
        u64::from_str_radix(hex, 16).ok()
    } else {
        s.parse().ok()
    }
}
