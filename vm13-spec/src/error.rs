//! # Error Types for VM13

use std::path::PathBuf;
use thiserror::Error;

/// Failure of the binary-string-to-integer primitive
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Non-binary digit {found:?} at position {position} in '{bits}'")]
    NonBinaryDigit {
        bits: String,
        position: usize,
        found: char,
    },

    #[error("Binary string '{bits}' is wider than {max} bits")]
    Overflow { bits: String, max: usize },

    #[error("Value {value} does not fit in {bits} bits")]
    OutOfRange { value: u32, bits: usize },
}

/// Why a source token is not an instruction word
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MalformedReason {
    /// Token is not exactly 13 characters long
    #[error("expected 13 bits, found {found}")]
    WrongLength { found: usize },

    /// Token contains something other than `0`/`1`
    #[error(transparent)]
    NotBinary(#[from] DecodeError),
}

#[derive(Debug, Error)]
pub enum SpecError {
    // Source errors
    #[error("Could not open instruction source '{}': {source}", path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed instruction '{token}' at index {index}: {reason}")]
    MalformedInstruction {
        index: usize,
        token: String,
        reason: MalformedReason,
    },

    // Program validation errors
    #[error("Could not find the 'Stop' instruction (0000000000000)")]
    MissingHalt,

    #[error("Invalid opcode '{0}'")]
    InvalidOpcode(String),

    #[error("Invalid register '{0}'")]
    InvalidRegister(String),
}

pub type Result<T> = std::result::Result<T, SpecError>;
