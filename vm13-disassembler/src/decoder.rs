//! Instruction decoder

use vm13_spec::encoding::{
    extract_imm6, extract_list_discriminator, extract_reg, REG_A_SHIFT, REG_B_SHIFT,
    REG_C_SHIFT, REG_D_SHIFT,
};
use vm13_spec::{Imm6, Instruction, ListSize, Opcode, Register, Word};
use crate::error::{DisassemblerError, Result};

/// Decode a 13-bit instruction word
pub fn decode(word: Word) -> Result<Instruction> {
    let raw = word.raw();
    let opcode = word
        .opcode()
        .ok_or_else(|| DisassemblerError::UnknownOpcode(word.opcode_bits()))?;

    let instr = match opcode {
        Opcode::Stop => Instruction::Stop,
        Opcode::In => Instruction::In {
            dest: reg_at(raw, REG_A_SHIFT),
        },
        Opcode::Out => Instruction::Out {
            src: reg_at(raw, REG_A_SHIFT),
        },
        Opcode::Incr => Instruction::Incr {
            reg: reg_at(raw, REG_D_SHIFT),
            amount: Imm6::from_field(extract_imm6(raw)),
        },
        Opcode::Add => {
            let (dest, lhs, rhs) = decode_three_register(raw);
            Instruction::Add { dest, lhs, rhs }
        }
        Opcode::Sub => {
            let (dest, lhs, rhs) = decode_three_register(raw);
            Instruction::Sub { dest, lhs, rhs }
        }
        Opcode::Mul => {
            let (dest, lhs, rhs) = decode_three_register(raw);
            Instruction::Mul { dest, lhs, rhs }
        }
        Opcode::List => Instruction::List {
            dest: reg_at(raw, REG_D_SHIFT),
            size: decode_list_size(raw),
        },
        Opcode::ListInit => Instruction::ListInit {
            src: reg_at(raw, REG_A_SHIFT),
        },
        Opcode::ListSum => Instruction::ListSum {
            src: reg_at(raw, REG_A_SHIFT),
            dest: reg_at(raw, REG_B_SHIFT),
        },
        Opcode::TidyUp => Instruction::TidyUp,
    };

    Ok(instr)
}

/// `[lhs:5..7][rhs:7..9][dest:9..11]`; bits 11..13 are reserved and ignored
fn decode_three_register(raw: u16) -> (Register, Register, Register) {
    (
        reg_at(raw, REG_C_SHIFT),
        reg_at(raw, REG_A_SHIFT),
        reg_at(raw, REG_B_SHIFT),
    )
}

fn decode_list_size(raw: u16) -> ListSize {
    if extract_list_discriminator(raw) == 0 {
        ListSize::Indirect(reg_at(raw, REG_A_SHIFT))
    } else {
        ListSize::Literal(Imm6::from_field(extract_imm6(raw)))
    }
}

fn reg_at(raw: u16, shift: u32) -> Register {
    Register::from_field(extract_reg(raw, shift))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(bits: &str) -> Word {
        Word::parse(bits).unwrap()
    }

    #[test]
    fn test_decode_stop() {
        assert_eq!(decode(Word::STOP).unwrap(), Instruction::Stop);
    }

    #[test]
    fn test_decode_in_out() {
        assert_eq!(
            decode(word("0000110000000")).unwrap(),
            Instruction::In { dest: Register::R10 }
        );
        assert_eq!(
            decode(word("0001011000000")).unwrap(),
            Instruction::Out { src: Register::R11 }
        );
    }

    #[test]
    fn test_decode_incr() {
        assert_eq!(
            decode(word("0001100010100")).unwrap(),
            Instruction::Incr {
                reg: Register::R00,
                amount: Imm6::from_field(5),
            }
        );
    }

    #[test]
    fn test_decode_add_layout() {
        // lhs=01 rhs=10 dest=11 reserved=00
        assert_eq!(
            decode(word("0010001101100")).unwrap(),
            Instruction::Add {
                dest: Register::R11,
                lhs: Register::R01,
                rhs: Register::R10,
            }
        );
    }

    #[test]
    fn test_reserved_bits_ignored() {
        assert_eq!(
            decode(word("0010101101111")).unwrap(),
            decode(word("0010101101100")).unwrap()
        );
    }

    #[test]
    fn test_decode_list_literal() {
        assert_eq!(
            decode(word("0011100001101")).unwrap(),
            Instruction::List {
                dest: Register::R01,
                size: ListSize::Literal(Imm6::from_field(3)),
            }
        );
    }

    #[test]
    fn test_decode_list_indirect() {
        // bits [7, 11) = 0000: size comes from r10
        assert_eq!(
            decode(word("0011110000001")).unwrap(),
            Instruction::List {
                dest: Register::R01,
                size: ListSize::Indirect(Register::R10),
            }
        );
    }

    #[test]
    fn test_decode_list_sum() {
        assert_eq!(
            decode(word("0100101000000")).unwrap(),
            Instruction::ListSum {
                src: Register::R01,
                dest: Register::R00,
            }
        );
    }

    #[test]
    fn test_decode_unknown_opcode() {
        assert_eq!(
            decode(word("0101100000000")),
            Err(DisassemblerError::UnknownOpcode("01011".to_string()))
        );
    }
}
