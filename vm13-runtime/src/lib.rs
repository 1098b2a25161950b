//! # VM13 Runtime
//!
//! Execute 13-bit VM13 programs.
//!
//! The machine has four registers (`r00`, `r01`, `r10`, `r11`), one optional
//! array per register, and a numeric console. Programs run straight through
//! from the first word to the first `Stop`; there are no branches.
//!
//! ## Example
//!
//! ```rust
//! use vm13_runtime::{IOHandler, VM, VMConfig};
//! use vm13_spec::Program;
//!
//! // in r00; out r00; stop
//! let program = Program::from_source("0000100000000 0001000000000 0000000000000").unwrap();
//! let mut io = IOHandler::new(vec![7]);
//! let result = VM::new(program, VMConfig::default()).unwrap().run(&mut io).unwrap();
//! assert_eq!(result.steps, 3);
//! assert_eq!(io.outputs(), &[7]);
//! ```

pub mod error;
pub mod state;
pub mod io;
pub mod execute;
pub mod vm;

pub use error::{Result, RuntimeError};
pub use state::VMState;
pub use io::{Console, IOHandler};
pub use execute::{execute, Flow};
pub use vm::{ExecutionResult, VMConfig, VM};

/// Simple execution helper
///
/// Runs a program with the given inputs and returns the outputs.
pub fn run(program: vm13_spec::Program, inputs: Vec<vm13_spec::Value>) -> Result<Vec<vm13_spec::Value>> {
    let mut io = IOHandler::new(inputs);
    VM::new(program, VMConfig::default())?.run(&mut io)?;
    Ok(io.take_outputs())
}
