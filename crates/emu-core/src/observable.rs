//! State-query protocol for inspecting components.
//!
//! A machine is a tree of components. Each answers dotted paths such as
//! `cpu.d0` or `cpu.flags.z` with a [`Value`], so front ends and tests can
//! read state without depending on a component's field layout.

use std::fmt;

/// A dynamically-typed answer to a state query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A single flag or line.
    Bool(bool),
    /// 8-bit quantity (condition codes, interrupt mask, memory byte).
    U8(u8),
    /// 16-bit quantity (status register).
    U16(u16),
    /// 32-bit quantity (data, address and control registers).
    U32(u32),
    /// Free-form text (lifecycle state, region names).
    Text(String),
}

impl Value {
    /// Numeric view of the value. Flags map to 0 or 1; text has none.
    #[must_use]
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Bool(v) => Some(u32::from(*v)),
            Value::U8(v) => Some(u32::from(*v)),
            Value::U16(v) => Some(u32::from(*v)),
            Value::U32(v) => Some(*v),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Motorola notation: `$` prefix, zero-padded to the value's width.
        match self {
            Value::Bool(v) => write!(f, "{}", u8::from(*v)),
            Value::U8(v) => write!(f, "${v:02X}"),
            Value::U16(v) => write!(f, "${v:04X}"),
            Value::U32(v) => write!(f, "${v:08X}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<u8> for Value {
    fn from(v: u8) -> Self {
        Value::U8(v)
    }
}

impl From<u16> for Value {
    fn from(v: u16) -> Self {
        Value::U16(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::U32(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

/// A component whose state can be inspected.
pub trait Observable {
    /// Query a property by dotted path, e.g. `d0`, `flags.n` or `memory.$FF0000`.
    ///
    /// Returns `None` if the path is not recognised.
    fn query(&self, path: &str) -> Option<Value>;

    /// Paths accepted by [`Observable::query`]. Parameterised families are
    /// listed with a placeholder, e.g. `memory.<addr>`.
    fn query_paths(&self) -> &'static [&'static str];
}
