//! Assembly parser
//!
//! Syntax is `mnemonic [operand {, operand}]`, destination first:
//!
//! ```text
//! in r00
//! incr r01, 5
//! add r10, r00, r01      ; r10 = r00 + r01
//! list r11, 3            ; literal size
//! list r11, r00          ; size read from r00
//! listsum r00, r11       ; r00 = sum(arrays[r11])
//! ```

use logos::Logos;
use vm13_spec::{Imm6, Instruction, ListSize, Opcode, Register};
use crate::error::{AssemblerError, Result};
use crate::lexer::Token;

/// A parsed operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Immediate(u64),
}

/// Parse a single instruction from assembly text
pub fn parse_instruction(text: &str) -> Result<Instruction> {
    let tokens = tokenize(text)?;

    let (mnemonic, rest) = match tokens.split_first() {
        Some(((Token::Identifier(name), _), rest)) => (name.as_str(), rest),
        Some(((_, span), _)) => {
            return Err(AssemblerError::SyntaxError {
                column: span.start + 1,
                message: "Expected instruction mnemonic".to_string(),
            })
        }
        None => {
            return Err(AssemblerError::SyntaxError {
                column: 0,
                message: "Empty instruction".to_string(),
            })
        }
    };

    let opcode = Opcode::from_mnemonic(mnemonic)
        .ok_or_else(|| AssemblerError::UnknownInstruction(mnemonic.to_string()))?;
    let operands = parse_operands(rest)?;

    build(opcode, &operands)
}

/// Parse register name (`r00`-`r11`)
pub fn parse_register(name: &str) -> Result<Register> {
    let name = name.trim();
    let bits = name
        .strip_prefix('r')
        .or_else(|| name.strip_prefix('R'))
        .ok_or_else(|| AssemblerError::InvalidRegister(name.to_string()))?;

    Register::from_bits(bits).map_err(|_| AssemblerError::InvalidRegister(name.to_string()))
}

fn tokenize(text: &str) -> Result<Vec<(Token, std::ops::Range<usize>)>> {
    let mut lex = Token::lexer(text);
    let mut tokens = Vec::new();

    while let Some(token) = lex.next() {
        match token {
            Ok(token) => tokens.push((token, lex.span())),
            Err(()) => {
                return Err(AssemblerError::SyntaxError {
                    column: lex.span().start + 1,
                    message: format!("Unexpected input '{}'", lex.slice()),
                })
            }
        }
    }

    Ok(tokens)
}

/// Comma-separated operand list
fn parse_operands(tokens: &[(Token, std::ops::Range<usize>)]) -> Result<Vec<Operand>> {
    let mut operands = Vec::new();
    let mut expect_operand = true;

    for (token, span) in tokens {
        let column = span.start + 1;
        match (expect_operand, token) {
            (true, Token::Register(bits)) => {
                let reg = Register::from_bits(bits)
                    .map_err(|_| AssemblerError::InvalidRegister(format!("r{}", bits)))?;
                operands.push(Operand::Register(reg));
                expect_operand = false;
            }
            (true, Token::Identifier(name)) => {
                return Err(AssemblerError::InvalidRegister(name.clone()));
            }
            (false, Token::Comma) => expect_operand = true,
            (true, literal) => match literal.number() {
                Some(value) => {
                    operands.push(Operand::Immediate(value));
                    expect_operand = false;
                }
                None => {
                    return Err(AssemblerError::SyntaxError {
                        column,
                        message: "Expected operand".to_string(),
                    })
                }
            },
            (false, _) => {
                return Err(AssemblerError::SyntaxError {
                    column,
                    message: "Expected ','".to_string(),
                })
            }
        }
    }

    if expect_operand && !operands.is_empty() {
        return Err(AssemblerError::SyntaxError {
            column: tokens.last().map_or(0, |(_, span)| span.end + 1),
            message: "Trailing ','".to_string(),
        });
    }

    Ok(operands)
}

fn build(opcode: Opcode, operands: &[Operand]) -> Result<Instruction> {
    let expected = match opcode {
        Opcode::Stop | Opcode::TidyUp => 0,
        Opcode::In | Opcode::Out | Opcode::ListInit => 1,
        Opcode::Incr | Opcode::List | Opcode::ListSum => 2,
        Opcode::Add | Opcode::Sub | Opcode::Mul => 3,
    };
    if operands.len() != expected {
        return Err(AssemblerError::OperandCount {
            mnemonic: opcode.mnemonic(),
            expected,
            found: operands.len(),
        });
    }

    let instr = match opcode {
        Opcode::Stop => Instruction::Stop,
        Opcode::TidyUp => Instruction::TidyUp,
        Opcode::In => Instruction::In {
            dest: register(&operands[0])?,
        },
        Opcode::Out => Instruction::Out {
            src: register(&operands[0])?,
        },
        Opcode::ListInit => Instruction::ListInit {
            src: register(&operands[0])?,
        },
        Opcode::Incr => Instruction::Incr {
            reg: register(&operands[0])?,
            amount: immediate(&operands[1])?,
        },
        Opcode::Add | Opcode::Sub | Opcode::Mul => {
            let dest = register(&operands[0])?;
            let lhs = register(&operands[1])?;
            let rhs = register(&operands[2])?;
            match opcode {
                Opcode::Add => Instruction::Add { dest, lhs, rhs },
                Opcode::Sub => Instruction::Sub { dest, lhs, rhs },
                _ => Instruction::Mul { dest, lhs, rhs },
            }
        }
        Opcode::List => {
            let dest = register(&operands[0])?;
            let size = match operands[1] {
                Operand::Register(reg) => ListSize::Indirect(reg),
                Operand::Immediate(_) => ListSize::Literal(immediate(&operands[1])?),
            };
            Instruction::List { dest, size }
        }
        Opcode::ListSum => Instruction::ListSum {
            dest: register(&operands[0])?,
            src: register(&operands[1])?,
        },
    };

    Ok(instr)
}

fn register(operand: &Operand) -> Result<Register> {
    match operand {
        Operand::Register(reg) => Ok(*reg),
        Operand::Immediate(value) => Err(AssemblerError::InvalidRegister(value.to_string())),
    }
}

fn immediate(operand: &Operand) -> Result<Imm6> {
    match operand {
        Operand::Immediate(value) => u8::try_from(*value)
            .ok()
            .and_then(Imm6::new)
            .ok_or(AssemblerError::InvalidImmediate {
                value: *value,
                max: Imm6::MAX,
            }),
        Operand::Register(reg) => Err(AssemblerError::SyntaxError {
            column: 0,
            message: format!("Expected immediate, found register {}", reg),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_no_operands() {
        assert_eq!(parse_instruction("stop").unwrap(), Instruction::Stop);
        assert_eq!(parse_instruction("  TidyUp ").unwrap(), Instruction::TidyUp);
    }

    #[test]
    fn test_parse_three_register() {
        assert_eq!(
            parse_instruction("mul r11, r01, r10").unwrap(),
            Instruction::Mul {
                dest: Register::R11,
                lhs: Register::R01,
                rhs: Register::R10,
            }
        );
    }

    #[test]
    fn test_parse_incr_number_formats() {
        for text in ["incr r00, 5", "incr r00, 0x5", "incr r00, 0b101"] {
            assert_eq!(
                parse_instruction(text).unwrap(),
                Instruction::Incr {
                    reg: Register::R00,
                    amount: Imm6::new(5).unwrap(),
                }
            );
        }
    }

    #[test]
    fn test_parse_list_forms() {
        assert_eq!(
            parse_instruction("list r01, 3").unwrap(),
            Instruction::List {
                dest: Register::R01,
                size: ListSize::Literal(Imm6::new(3).unwrap()),
            }
        );
        assert_eq!(
            parse_instruction("list r01, r00").unwrap(),
            Instruction::List {
                dest: Register::R01,
                size: ListSize::Indirect(Register::R00),
            }
        );
    }

    #[test]
    fn test_parse_register() {
        assert_eq!(parse_register("r10").unwrap(), Register::R10);
        assert_eq!(parse_register("R01").unwrap(), Register::R01);
        assert!(matches!(
            parse_register("r2"),
            Err(AssemblerError::InvalidRegister(name)) if name == "r2"
        ));
    }

    #[test]
    fn test_immediate_out_of_range() {
        assert!(matches!(
            parse_instruction("incr r00, 64"),
            Err(AssemblerError::InvalidImmediate { value: 64, max: 63 })
        ));
    }

    #[test]
    fn test_operand_count() {
        assert!(matches!(
            parse_instruction("add r00, r01"),
            Err(AssemblerError::OperandCount { expected: 3, found: 2, .. })
        ));
        assert!(matches!(
            parse_instruction("stop r00"),
            Err(AssemblerError::OperandCount { expected: 0, found: 1, .. })
        ));
    }

    #[test]
    fn test_missing_comma() {
        assert!(matches!(
            parse_instruction("listsum r00 r01"),
            Err(AssemblerError::SyntaxError { .. })
        ));
    }

    #[test]
    fn test_trailing_comma() {
        assert!(matches!(
            parse_instruction("out r00,"),
            Err(AssemblerError::SyntaxError { .. })
        ));
    }
}
