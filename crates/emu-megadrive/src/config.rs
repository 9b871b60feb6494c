//! Mega Drive system configuration.

pub use crate::memory::AccessPolicy;

/// Configuration for a Mega Drive system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MegaDriveConfig {
    /// Bounds checking applied to every bus access.
    pub access_policy: AccessPolicy,
    /// Put the CPU into supervisor state as part of construction.
    pub bootstrap: bool,
}

impl Default for MegaDriveConfig {
    fn default() -> Self {
        Self {
            access_policy: AccessPolicy::Flat,
            bootstrap: true,
        }
    }
}
