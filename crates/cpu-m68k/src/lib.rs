//! Motorola 68000 core for a Mega Drive emulator.
//!
//! The crate holds the programmer-visible CPU state (registers, status
//! flags, user/supervisor split) and the execution protocol instruction
//! handlers share: operand resolution, size-dependent data movement and
//! flag computation. MOVE is the first handler; the rest of the opcode set
//! plugs into [`Instruction`] the same way.
//!
//! Memory is reached only through an [`M68kBus`], so a CPU is a plain
//! value and any number of machines can run side by side.

pub mod addressing;
pub mod bits;
pub mod bus;
pub mod cpu;
mod ea;
pub mod error;
mod execute;
pub mod flags;
pub mod registers;
pub mod size;

pub use addressing::{AddrMode, Operand};
pub use bus::{FunctionCode, M68kBus};
pub use cpu::{Cpu68000, Lifecycle};
pub use error::{Access, BusFault, CpuError, Violation};
pub use execute::Instruction;
pub use flags::{C, N, Status, StatusBit, V, X, Z};
pub use registers::{Register, Registers, TraceMode, UnknownRegister};
pub use size::Size;
