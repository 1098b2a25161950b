//! Assembler errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssemblerError {
    #[error("Syntax error at column {column}: {message}")]
    SyntaxError { column: usize, message: String },

    #[error("Unknown instruction: {0}")]
    UnknownInstruction(String),

    #[error("Invalid register: {0}")]
    InvalidRegister(String),

    #[error("Invalid immediate value: {value} (valid range: 0-{max})")]
    InvalidImmediate { value: u64, max: u8 },

    #[error("'{mnemonic}' expects {expected} operand(s), found {found}")]
    OperandCount {
        mnemonic: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("List size {0} cannot be encoded as a literal (bits [7, 11) would be 0000); load it into a register instead")]
    UnencodableListSize(u8),

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<AssemblerError>,
    },
}

impl AssemblerError {
    /// Attach a 1-based source line number
    pub fn at_line(self, line: usize) -> Self {
        AssemblerError::Line {
            line,
            source: Box::new(self),
        }
    }

    /// The error without its line wrapper
    pub fn root(&self) -> &AssemblerError {
        match self {
            AssemblerError::Line { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, AssemblerError>;
