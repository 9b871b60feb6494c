//! Sega Mega Drive machine: a 68000 wired to cartridge ROM and work RAM.

pub mod config;
pub mod machine;
pub mod memory;

pub use config::MegaDriveConfig;
pub use machine::MegaDrive;
pub use memory::{AccessPolicy, AddressSpace, Region};
