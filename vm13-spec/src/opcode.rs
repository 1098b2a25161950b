//! # VM13 Opcode Definitions
//!
//! Opcodes occupy the leading 5 bits of a word (0x00-0x1F). Only 0x00-0x0A
//! are defined; anything above `TidyUp` is rejected before execution.

use serde::{Deserialize, Serialize};

/// Instruction opcode (5 bits, values 0x00-0x0A)
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Opcode {
    /// STOP: terminate the program
    Stop = 0x00,
    /// IN: dest = console input
    In = 0x01,
    /// OUT: console output = src
    Out = 0x02,
    /// INCR: reg += imm6
    Incr = 0x03,
    /// ADD: dest = lhs + rhs
    Add = 0x04,
    /// SUB: dest = lhs - rhs (wrapping)
    Sub = 0x05,
    /// MUL: dest = lhs * rhs
    Mul = 0x06,
    /// LIST: arrays[dest] = [0; size]
    List = 0x07,
    /// LISTINIT: read every element of arrays[src] from the console
    ListInit = 0x08,
    /// LISTSUM: dest = sum(arrays[src])
    ListSum = 0x09,
    /// TIDYUP: clear all registers
    TidyUp = 0x0A,
}

impl Opcode {
    /// Opcode width in bits
    pub const BITS: usize = 5;

    /// Opcode mask (0x1F for 5 bits)
    pub const MASK: u8 = 0x1F;

    /// Highest defined opcode
    pub const MAX: Opcode = Opcode::TidyUp;

    /// Every defined opcode in numeric order
    pub const ALL: [Opcode; 11] = [
        Opcode::Stop,
        Opcode::In,
        Opcode::Out,
        Opcode::Incr,
        Opcode::Add,
        Opcode::Sub,
        Opcode::Mul,
        Opcode::List,
        Opcode::ListInit,
        Opcode::ListSum,
        Opcode::TidyUp,
    ];

    /// Try to convert from u8
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Opcode::Stop),
            0x01 => Some(Opcode::In),
            0x02 => Some(Opcode::Out),
            0x03 => Some(Opcode::Incr),
            0x04 => Some(Opcode::Add),
            0x05 => Some(Opcode::Sub),
            0x06 => Some(Opcode::Mul),
            0x07 => Some(Opcode::List),
            0x08 => Some(Opcode::ListInit),
            0x09 => Some(Opcode::ListSum),
            0x0A => Some(Opcode::TidyUp),
            _ => None,
        }
    }

    #[inline]
    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Assembly mnemonic
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Stop => "stop",
            Opcode::In => "in",
            Opcode::Out => "out",
            Opcode::Incr => "incr",
            Opcode::Add => "add",
            Opcode::Sub => "sub",
            Opcode::Mul => "mul",
            Opcode::List => "list",
            Opcode::ListInit => "listinit",
            Opcode::ListSum => "listsum",
            Opcode::TidyUp => "tidyup",
        }
    }

    /// Look up an opcode by mnemonic (case-insensitive)
    pub fn from_mnemonic(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.mnemonic().eq_ignore_ascii_case(name))
    }

    /// Check if this opcode uses the `[lhs][rhs][dest]` layout
    #[inline]
    pub const fn is_three_register(self) -> bool {
        matches!(self, Opcode::Add | Opcode::Sub | Opcode::Mul)
    }

    /// Check if this opcode blocks on console input
    #[inline]
    pub const fn reads_console(self) -> bool {
        matches!(self, Opcode::In | Opcode::ListInit)
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_u8_round_trip() {
        for op in Opcode::ALL {
            assert_eq!(Opcode::from_u8(op.to_u8()), Some(op));
        }
    }

    #[test]
    fn test_undefined_opcodes() {
        for value in (Opcode::MAX.to_u8() + 1)..=Opcode::MASK {
            assert_eq!(Opcode::from_u8(value), None);
        }
    }

    #[test]
    fn test_mnemonic_lookup() {
        assert_eq!(Opcode::from_mnemonic("listsum"), Some(Opcode::ListSum));
        assert_eq!(Opcode::from_mnemonic("TidyUp"), Some(Opcode::TidyUp));
        assert_eq!(Opcode::from_mnemonic("halt"), None);
    }

    #[test]
    fn test_categories() {
        assert!(Opcode::Sub.is_three_register());
        assert!(!Opcode::Incr.is_three_register());
        assert!(Opcode::ListInit.reads_console());
        assert!(!Opcode::Out.reads_console());
    }
}
