//! # VM13 Specification
//!
//! 13-bit fixed-width instruction set for a tiny register/array machine.
//!
//! ## Key Features
//! - 13-bit instructions written as strings of `0`/`1`
//! - 5-bit opcode, 11 defined operations (`Stop` through `TidyUp`)
//! - 4 registers addressed by 2-bit codes (`00`, `01`, `10`, `11`)
//! - Per-register arrays created by `List`
//! - Straight-line execution: no branches, program order is execution order
//!
//! ## Instruction Layout
//!
//! ```text
//!  0     5      11  13
//! [opcode][imm6 ][reg]      In/Out/Incr/List/ListInit/ListSum
//! [opcode][r][r][r][--]     Add/Sub/Mul
//! ```

pub mod encoding;
pub mod error;
pub mod instruction;
pub mod opcode;
pub mod program;
pub mod register;
pub mod source;
pub mod validation;
pub mod word;

pub use encoding::{binary_to_integer, integer_to_binary};
pub use error::{DecodeError, MalformedReason, Result, SpecError};
pub use instruction::{Imm6, Instruction, ListSize};
pub use opcode::Opcode;
pub use program::Program;
pub use register::{Register, NUM_REGISTERS};
pub use source::{FileSource, InstructionSource};
pub use validation::{lint, validate, ValidationWarning};
pub use word::Word;

/// Value held by a register or array element
pub type Value = u32;
