//! Instruction encoding to 13-bit words

use vm13_spec::encoding::{encode_itype, encode_rtype};
use vm13_spec::{Instruction, ListSize, Word};
use crate::error::{AssemblerError, Result};

/// Encode instruction to a 13-bit word.
///
/// Fails only for `List` literal sizes whose low four bits are zero, which the
/// decoder would read back as register-indirect.
pub fn encode(instr: &Instruction) -> Result<Word> {
    let op = instr.opcode().to_u8();

    let raw = match instr {
        Instruction::Stop | Instruction::TidyUp => encode_itype(op, 0, 0),

        // Single register in [5, 7)
        Instruction::In { dest: reg }
        | Instruction::Out { src: reg }
        | Instruction::ListInit { src: reg } => encode_rtype(op, *reg as u8, 0, 0),

        Instruction::Incr { reg, amount } => encode_itype(op, amount.value(), *reg as u8),

        Instruction::Add { dest, lhs, rhs }
        | Instruction::Sub { dest, lhs, rhs }
        | Instruction::Mul { dest, lhs, rhs } => {
            encode_rtype(op, *lhs as u8, *rhs as u8, *dest as u8)
        }

        Instruction::List { dest, size } => match size {
            ListSize::Literal(n) => {
                if !n.is_list_literal() {
                    return Err(AssemblerError::UnencodableListSize(n.value()));
                }
                encode_itype(op, n.value(), *dest as u8)
            }
            // [opcode][src][0000][dest]
            ListSize::Indirect(src) => encode_itype(op, (*src as u8) << 4, *dest as u8),
        },

        Instruction::ListSum { dest, src } => encode_rtype(op, *src as u8, *dest as u8, 0),
    };

    Ok(Word::from_masked(raw))
}
