//! # VM13 Disassembler
//!
//! Decode 13-bit words into typed [`vm13_spec::Instruction`]s and render them
//! as assembly text. The runtime decodes every instruction through [`decode`].
//!
//! ## Example
//!
//! ```rust
//! use vm13_spec::Program;
//! use vm13_disassembler::disassemble;
//!
//! let program = Program::from_source("0001100010100 0000000000000").unwrap();
//! let asm = disassemble(&program);
//! assert!(asm.contains("incr r00, 5"));
//! ```

pub mod error;
pub mod decoder;
pub mod formatter;
pub mod disassembler;

pub use error::{DisassemblerError, Result};
pub use disassembler::disassemble;
pub use decoder::decode;
pub use formatter::format;

#[cfg(test)]
mod tests {
    use super::*;
    use vm13_spec::{Instruction, Word};

    #[test]
    fn test_public_exports() {
        let _ = DisassemblerError::UnknownOpcode("11111".to_string());
    }

    #[test]
    fn test_decode_function() {
        let instr = decode(Word::STOP).unwrap();
        assert_eq!(instr, Instruction::Stop);
    }

    #[test]
    fn test_format_function() {
        assert_eq!(format(&Instruction::TidyUp), "tidyup");
    }

    #[test]
    fn test_error_display_names_bits() {
        let err = DisassemblerError::UnknownOpcode("01100".to_string());
        assert_eq!(err.to_string(), "Invalid opcode '01100'");
    }
}
