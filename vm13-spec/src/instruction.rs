//! VM13 Instruction Set
//!
//! Decoded instructions carry typed operands, so a register field can never
//! hold anything but one of the four codes and a literal never exceeds 6 bits.

use crate::error::DecodeError;
use crate::opcode::Opcode;
use crate::register::Register;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 6-bit unsigned literal (0-63)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Imm6(u8);

impl Imm6 {
    pub const BITS: usize = 6;
    pub const MAX: u8 = 63;

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(Imm6(value))
        } else {
            None
        }
    }

    /// Build from a decoded 6-bit field; higher bits are dropped.
    #[inline]
    pub const fn from_field(field: u8) -> Self {
        Imm6(field & Self::MAX)
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Whether `List` can carry this size on the literal path. Bits [7, 11)
    /// of the word are the low four bits of the literal; `0000` there means
    /// register-indirect instead.
    #[inline]
    pub const fn is_list_literal(self) -> bool {
        self.0 & 0xF != 0
    }
}

impl TryFrom<u8> for Imm6 {
    type Error = DecodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Imm6::new(value).ok_or(DecodeError::OutOfRange {
            value: value as u32,
            bits: Self::BITS,
        })
    }
}

impl From<Imm6> for u8 {
    fn from(imm: Imm6) -> u8 {
        imm.0
    }
}

impl fmt::Display for Imm6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where `List` takes its array length from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListSize {
    /// Size is the 6-bit literal at [5, 11)
    Literal(Imm6),
    /// Size is the current value of the register named at [5, 7)
    Indirect(Register),
}

/// VM13 Instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Instruction {
    /// STOP: end of program
    Stop,

    /// IN: dest = console.read_value()
    In { dest: Register },

    /// OUT: console.write_value(src)
    Out { src: Register },

    /// INCR: reg += amount
    Incr { reg: Register, amount: Imm6 },

    /// ADD: dest = lhs + rhs
    Add { dest: Register, lhs: Register, rhs: Register },

    /// SUB: dest = lhs - rhs (wrapping)
    Sub { dest: Register, lhs: Register, rhs: Register },

    /// MUL: dest = lhs * rhs
    Mul { dest: Register, lhs: Register, rhs: Register },

    /// LIST: arrays[dest] = zero-filled array of `size` elements
    List { dest: Register, size: ListSize },

    /// LISTINIT: fill arrays[src] from the console, ascending index order
    ListInit { src: Register },

    /// LISTSUM: dest = sum(arrays[src])
    ListSum { dest: Register, src: Register },

    /// TIDYUP: every register = 0
    TidyUp,
}

impl Instruction {
    pub fn opcode(&self) -> Opcode {
        match self {
            Instruction::Stop => Opcode::Stop,
            Instruction::In { .. } => Opcode::In,
            Instruction::Out { .. } => Opcode::Out,
            Instruction::Incr { .. } => Opcode::Incr,
            Instruction::Add { .. } => Opcode::Add,
            Instruction::Sub { .. } => Opcode::Sub,
            Instruction::Mul { .. } => Opcode::Mul,
            Instruction::List { .. } => Opcode::List,
            Instruction::ListInit { .. } => Opcode::ListInit,
            Instruction::ListSum { .. } => Opcode::ListSum,
            Instruction::TidyUp => Opcode::TidyUp,
        }
    }

    /// Get instruction mnemonic
    pub fn mnemonic(&self) -> &'static str {
        self.opcode().mnemonic()
    }

    /// Register overwritten by this instruction, if exactly one
    pub fn dest_register(&self) -> Option<Register> {
        match self {
            Instruction::In { dest }
            | Instruction::Add { dest, .. }
            | Instruction::Sub { dest, .. }
            | Instruction::Mul { dest, .. }
            | Instruction::ListSum { dest, .. } => Some(*dest),
            Instruction::Incr { reg, .. } => Some(*reg),
            _ => None,
        }
    }

    pub fn is_stop(&self) -> bool {
        matches!(self, Instruction::Stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_imm6_bounds() {
        assert_eq!(Imm6::new(63).map(Imm6::value), Some(63));
        assert!(Imm6::new(64).is_none());
        assert_eq!(Imm6::from_field(0xFF).value(), 63);
    }

    #[test]
    fn test_list_literal_ambiguity() {
        for value in [0u8, 16, 32, 48] {
            assert!(!Imm6::from_field(value).is_list_literal());
        }
        for value in [1u8, 3, 15, 17, 63] {
            assert!(Imm6::from_field(value).is_list_literal());
        }
    }

    #[test]
    fn test_opcode_and_mnemonic() {
        let inst = Instruction::ListSum {
            dest: Register::R00,
            src: Register::R01,
        };
        assert_eq!(inst.opcode(), Opcode::ListSum);
        assert_eq!(inst.mnemonic(), "listsum");
        assert_eq!(Instruction::TidyUp.mnemonic(), "tidyup");
    }

    #[test]
    fn test_dest_register() {
        let incr = Instruction::Incr {
            reg: Register::R10,
            amount: Imm6::from_field(1),
        };
        assert_eq!(incr.dest_register(), Some(Register::R10));
        assert_eq!(Instruction::Out { src: Register::R00 }.dest_register(), None);
        assert_eq!(Instruction::TidyUp.dest_register(), None);
    }

    #[test]
    fn test_imm6_try_from() {
        assert_eq!(Imm6::try_from(63u8), Ok(Imm6::from_field(63)));
        assert_eq!(
            Imm6::try_from(200u8),
            Err(DecodeError::OutOfRange { value: 200, bits: 6 })
        );
    }

    #[test]
    fn test_deserialize_rejects_wide_literal() {
        let incr = Instruction::Incr {
            reg: Register::R00,
            amount: Imm6::from_field(5),
        };
        let mut bytes = bincode::serialize(&incr).unwrap();
        assert_eq!(bincode::deserialize::<Instruction>(&bytes).unwrap(), incr);

        // The literal is the final byte of the encoding
        if let Some(amount) = bytes.last_mut() {
            *amount = 200;
        }
        assert!(bincode::deserialize::<Instruction>(&bytes).is_err());
    }
}
