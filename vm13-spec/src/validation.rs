//! Program validation for VM13
//!
//! [`validate`] is the fail-fast pre-pass that runs before any instruction
//! executes:
//! - the literal halt word `0000000000000` must appear somewhere
//! - every opcode field must name a defined opcode
//!
//! [`lint`] reports suspicious but legal encodings.

use crate::encoding::{extract_reg, REG_D_SHIFT};
use crate::error::{Result, SpecError};
use crate::opcode::Opcode;
use crate::program::Program;

/// Validation warning types (not errors, but worth noting)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// Word sits after the first opcode-0 word and can never execute
    Unreachable { index: usize },

    /// Opcode is `Stop` but operand bits are set; it halts, yet does not
    /// count as the mandatory halt word
    NonCanonicalStop { index: usize },

    /// Add/Sub/Mul with the reserved trailing bits [11, 13) set
    ReservedBitsSet { index: usize, opcode: Opcode },
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::Unreachable { index } => {
                write!(f, "instruction {} is never reached", index)
            }
            ValidationWarning::NonCanonicalStop { index } => {
                write!(f, "instruction {} halts but is not the canonical stop word", index)
            }
            ValidationWarning::ReservedBitsSet { index, opcode } => {
                write!(f, "instruction {} ({}) sets reserved bits [11, 13)", index, opcode)
            }
        }
    }
}

/// Pre-execution checks. The halt check runs first, then each opcode in
/// program order; the first failure is returned.
pub fn validate(program: &Program) -> Result<()> {
    if !program.contains_stop() {
        return Err(SpecError::MissingHalt);
    }

    for word in program.words() {
        if word.opcode().is_none() {
            return Err(SpecError::InvalidOpcode(word.opcode_bits()));
        }
    }

    Ok(())
}

/// Collect warnings for a program that may or may not pass [`validate`]
pub fn lint(program: &Program) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut halted = false;

    for (index, word) in program.words().iter().enumerate() {
        if halted {
            warnings.push(ValidationWarning::Unreachable { index });
            continue;
        }

        match word.opcode() {
            Some(Opcode::Stop) => {
                if !word.is_stop() {
                    warnings.push(ValidationWarning::NonCanonicalStop { index });
                }
                halted = true;
            }
            Some(opcode) if opcode.is_three_register() => {
                if extract_reg(word.raw(), REG_D_SHIFT) != 0 {
                    warnings.push(ValidationWarning::ReservedBitsSet { index, opcode });
                }
            }
            _ => {}
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program(text: &str) -> Program {
        Program::from_source(text).unwrap()
    }

    #[test]
    fn test_stop_only_is_valid() {
        assert!(validate(&program("0000000000000")).is_ok());
    }

    #[test]
    fn test_missing_halt() {
        let result = validate(&program("0001100010100"));
        assert!(matches!(result, Err(SpecError::MissingHalt)));

        let result = validate(&program(""));
        assert!(matches!(result, Err(SpecError::MissingHalt)));
    }

    #[test]
    fn test_non_canonical_stop_does_not_satisfy_halt_check() {
        let result = validate(&program("0000000000001"));
        assert!(matches!(result, Err(SpecError::MissingHalt)));
    }

    #[test]
    fn test_invalid_opcode_named_verbatim() {
        let result = validate(&program("0101100000000 0000000000000"));
        match result {
            Err(SpecError::InvalidOpcode(bits)) => assert_eq!(bits, "01011"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_halt_check_runs_before_opcode_check() {
        let result = validate(&program("1111100000000"));
        assert!(matches!(result, Err(SpecError::MissingHalt)));
    }

    #[test]
    fn test_invalid_opcode_after_stop_still_rejected() {
        let result = validate(&program("0000000000000 1000000000000"));
        assert!(matches!(result, Err(SpecError::InvalidOpcode(ref b)) if b == "10000"));
    }

    #[test]
    fn test_highest_opcode_accepted() {
        assert!(validate(&program("0101000000000 0000000000000")).is_ok());
    }

    #[test]
    fn test_lint_clean_program() {
        assert!(lint(&program("0001100010100 0000000000000")).is_empty());
    }

    #[test]
    fn test_lint_unreachable_and_non_canonical() {
        let warnings = lint(&program("0000000000010 0001100010100 0000000000000"));
        assert_eq!(
            warnings,
            vec![
                ValidationWarning::NonCanonicalStop { index: 0 },
                ValidationWarning::Unreachable { index: 1 },
                ValidationWarning::Unreachable { index: 2 },
            ]
        );
    }

    #[test]
    fn test_lint_reserved_bits() {
        let warnings = lint(&program("0010000011001 0000000000000"));
        assert_eq!(
            warnings,
            vec![ValidationWarning::ReservedBitsSet {
                index: 0,
                opcode: Opcode::Add
            }]
        );
    }
}
