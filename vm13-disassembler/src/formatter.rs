//! Instruction formatting to assembly text

use vm13_spec::{Instruction, ListSize};

/// Format instruction as assembly text (destination operand first)
pub fn format(instr: &Instruction) -> String {
    let mnemonic = instr.mnemonic();
    match instr {
        Instruction::Stop | Instruction::TidyUp => mnemonic.to_string(),

        Instruction::In { dest } => format!("{} {}", mnemonic, dest),
        Instruction::Out { src } | Instruction::ListInit { src } => {
            format!("{} {}", mnemonic, src)
        }

        Instruction::Incr { reg, amount } => format!("{} {}, {}", mnemonic, reg, amount),

        Instruction::Add { dest, lhs, rhs }
        | Instruction::Sub { dest, lhs, rhs }
        | Instruction::Mul { dest, lhs, rhs } => {
            format!("{} {}, {}, {}", mnemonic, dest, lhs, rhs)
        }

        Instruction::List { dest, size } => match size {
            ListSize::Literal(n) => format!("{} {}, {}", mnemonic, dest, n),
            ListSize::Indirect(reg) => format!("{} {}, {}", mnemonic, dest, reg),
        },

        Instruction::ListSum { dest, src } => format!("{} {}, {}", mnemonic, dest, src),
    }
}
