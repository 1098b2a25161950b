//! Virtual Machine for VM13

use tracing::{debug, info};
use vm13_spec::{Program, SpecError};
use crate::error::Result;
use crate::execute::{execute, Flow};
use crate::io::Console;
use crate::state::VMState;

/// VM configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VMConfig {
    /// Largest array `List` may bind, in elements
    pub max_array_len: usize,
}

impl Default for VMConfig {
    fn default() -> Self {
        Self {
            max_array_len: 1 << 20,
        }
    }
}

/// Execution result
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Instructions executed, the final `Stop` included
    pub steps: u64,

    /// Index of the `Stop` that ended the run
    pub halted_at: usize,

    /// Registers and arrays at halt
    pub state: VMState,
}

/// VM13 Virtual Machine
///
/// Owns the program and the machine state for a single run. Construction
/// validates the whole program, so no instruction executes unless every
/// opcode is defined and a halt word is present.
#[derive(Debug)]
pub struct VM {
    program: Program,
    state: VMState,
    config: VMConfig,
}

impl VM {
    /// Validate `program` and set up a fresh machine
    pub fn new(program: Program, config: VMConfig) -> Result<Self> {
        program.validate()?;
        debug!(instructions = program.len(), "program validated");

        Ok(Self {
            program,
            state: VMState::new(),
            config,
        })
    }

    /// Run until `Stop`
    pub fn run(mut self, console: &mut dyn Console) -> Result<ExecutionResult> {
        for (index, word) in self.program.words().iter().enumerate() {
            let instr = vm13_disassembler::decode(*word)?;
            debug!(index, %word, ?instr, "execute");

            let flow = execute(&instr, &mut self.state, console, &self.config)?;
            self.state.inc_steps();

            if flow == Flow::Halt {
                info!(steps = self.state.steps, index, "halted");
                return Ok(ExecutionResult {
                    steps: self.state.steps,
                    halted_at: index,
                    state: self.state,
                });
            }
        }

        // Only reachable if validation was bypassed
        Err(SpecError::MissingHalt.into())
    }

    /// Current state (for debugging)
    pub fn state(&self) -> &VMState {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RuntimeError;
    use crate::io::IOHandler;
    use vm13_spec::{Instruction, Register, Word};

    fn program_from_instructions(instructions: &[Instruction]) -> Program {
        let words: Vec<Word> = instructions
            .iter()
            .map(|instr| vm13_assembler::encode(instr).unwrap())
            .collect();
        Program::new(words)
    }

    #[test]
    fn test_vmconfig_default() {
        assert_eq!(VMConfig::default().max_array_len, 1_048_576);
    }

    #[test]
    fn test_stop_only() {
        let program = program_from_instructions(&[Instruction::Stop]);
        let vm = VM::new(program, VMConfig::default()).unwrap();
        let result = vm.run(&mut IOHandler::default()).unwrap();

        assert_eq!(result.steps, 1);
        assert_eq!(result.halted_at, 0);
        assert_eq!(result.state.registers, [0; 4]);
    }

    #[test]
    fn test_instructions_after_stop_never_run() {
        let program = program_from_instructions(&[
            Instruction::Out { src: Register::R00 },
            Instruction::Stop,
            Instruction::Out { src: Register::R00 },
        ]);
        let mut io = IOHandler::default();
        let result = VM::new(program, VMConfig::default()).unwrap().run(&mut io).unwrap();

        assert_eq!(result.steps, 2);
        assert_eq!(result.halted_at, 1);
        assert_eq!(io.outputs(), &[0]);
    }

    #[test]
    fn test_new_rejects_missing_halt() {
        let program = program_from_instructions(&[Instruction::TidyUp]);
        assert!(matches!(
            VM::new(program, VMConfig::default()),
            Err(RuntimeError::Spec(SpecError::MissingHalt))
        ));
    }

    #[test]
    fn test_new_rejects_invalid_opcode() {
        let program = Program::from_source("0101100000000 0000000000000").unwrap();
        match VM::new(program, VMConfig::default()) {
            Err(RuntimeError::Spec(SpecError::InvalidOpcode(bits))) => assert_eq!(bits, "01011"),
            other => panic!("unexpected {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_run_bypassing_validation_reports_missing_halt() {
        let vm = VM {
            program: program_from_instructions(&[Instruction::TidyUp]),
            state: VMState::new(),
            config: VMConfig::default(),
        };
        assert!(matches!(
            vm.run(&mut IOHandler::default()),
            Err(RuntimeError::Spec(SpecError::MissingHalt))
        ));
    }
}
