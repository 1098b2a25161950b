//! VM13 Assembler
//!
//! Assemble VM13 assembly language into 13-bit instruction words.
//!
//! ## Example
//!
//! ```rust
//! use vm13_assembler::assemble;
//!
//! let source = r#"
//!     incr r00, 5
//!     out r00
//!     stop
//! "#;
//!
//! let program = assemble(source).unwrap();
//! assert_eq!(program.len(), 3);
//! ```

pub mod error;
pub mod lexer;
pub mod parser;
pub mod encoder;
pub mod assembler;

pub use error::{AssemblerError, Result};
pub use assembler::assemble;
pub use parser::{parse_instruction, parse_register};
pub use encoder::encode;
