//! 13-bit instruction word

use crate::encoding::{
    binary_to_integer, extract_opcode, integer_to_binary, WORD_BITS, WORD_MASK,
};
use crate::error::{DecodeError, MalformedReason};
use crate::opcode::Opcode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One instruction word. Always exactly 13 bits wide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Word(u16);

impl Word {
    /// Width in bits
    pub const BITS: usize = WORD_BITS;

    /// The mandatory halt word `0000000000000`
    pub const STOP: Word = Word(0);

    /// Wrap a raw value; `None` if it does not fit in 13 bits
    pub const fn new(raw: u16) -> Option<Self> {
        if raw & !WORD_MASK == 0 {
            Some(Word(raw))
        } else {
            None
        }
    }

    /// Keep the low 13 bits of `raw`
    #[inline]
    pub const fn from_masked(raw: u16) -> Self {
        Word(raw & WORD_MASK)
    }

    /// Parse a source token such as `"0001100010100"`
    pub fn parse(token: &str) -> Result<Self, MalformedReason> {
        let found = token.chars().count();
        if found != Self::BITS {
            return Err(MalformedReason::WrongLength { found });
        }
        let value = binary_to_integer(token).map_err(MalformedReason::NotBinary)?;
        Ok(Word(value as u16))
    }

    #[inline]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Numeric value of the opcode field (may exceed the defined range)
    #[inline]
    pub const fn opcode_value(self) -> u8 {
        extract_opcode(self.0)
    }

    /// The leading 5 characters, verbatim
    pub fn opcode_bits(self) -> String {
        integer_to_binary(self.opcode_value() as u32, Opcode::BITS)
    }

    pub fn opcode(self) -> Option<Opcode> {
        Opcode::from_u8(self.opcode_value())
    }

    #[inline]
    pub const fn is_stop(self) -> bool {
        self.0 == 0
    }
}

impl TryFrom<u16> for Word {
    type Error = DecodeError;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        Word::new(raw).ok_or(DecodeError::OutOfRange {
            value: raw as u32,
            bits: Self::BITS,
        })
    }
}

impl From<Word> for u16 {
    fn from(word: Word) -> u16 {
        word.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&integer_to_binary(self.0 as u32, Self::BITS))
    }
}
