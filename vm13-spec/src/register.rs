//! Register definitions for VM13

use crate::error::{Result, SpecError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of registers
pub const NUM_REGISTERS: usize = 4;

/// Register addressed by a 2-bit code
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Register {
    R00 = 0b00,
    R01 = 0b01,
    R10 = 0b10,
    R11 = 0b11,
}

impl Register {
    pub const ALL: [Register; NUM_REGISTERS] =
        [Register::R00, Register::R01, Register::R10, Register::R11];

    #[inline]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Build from a decoded 2-bit field; bits above the low two are ignored.
    #[inline]
    pub const fn from_field(field: u8) -> Self {
        match field & 0b11 {
            0b00 => Register::R00,
            0b01 => Register::R01,
            0b10 => Register::R10,
            _ => Register::R11,
        }
    }

    /// Parse the textual register code (`"00"`, `"01"`, `"10"`, `"11"`).
    ///
    /// Anything else is reported verbatim as [`SpecError::InvalidRegister`].
    pub fn from_bits(bits: &str) -> Result<Self> {
        match bits {
            "00" => Ok(Register::R00),
            "01" => Ok(Register::R01),
            "10" => Ok(Register::R10),
            "11" => Ok(Register::R11),
            _ => Err(SpecError::InvalidRegister(bits.to_string())),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The 2-bit code as it appears in an instruction word
    pub const fn bits(self) -> &'static str {
        match self {
            Register::R00 => "00",
            Register::R01 => "01",
            Register::R10 => "10",
            Register::R11 => "11",
        }
    }

    /// Assembly name
    pub const fn name(self) -> &'static str {
        match self {
            Register::R00 => "r00",
            Register::R01 => "r01",
            Register::R10 => "r10",
            Register::R11 => "r11",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
