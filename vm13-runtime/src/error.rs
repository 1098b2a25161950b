//! Runtime error types for VM13

use thiserror::Error;
use vm13_disassembler::DisassemblerError;
use vm13_spec::{Register, SpecError};

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Decode(#[from] DisassemblerError),

    #[error("Console input exhausted")]
    InputExhausted,

    #[error("Console error: {0}")]
    Console(String),

    #[error("Array for register {register} too large: requested {requested}, limit {limit}")]
    ArrayTooLarge {
        register: Register,
        requested: u64,
        limit: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
