//! Core traits and types shared by the emulator crates.
//!
//! Every component exposes its internal state for debugging and tests
//! through [`Observable`]. Queries never affect emulation state.

mod observable;

pub use observable::{Observable, Value};
