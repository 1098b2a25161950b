//! Disassembler errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DisassemblerError {
    #[error("Invalid opcode '{0}'")]
    UnknownOpcode(String),
}

pub type Result<T> = std::result::Result<T, DisassemblerError>;
