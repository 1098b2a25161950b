//! # Instruction Encoding Constants and Helpers
//!
//! Bit positions are counted from the leftmost character of the 13-bit word,
//! so field `[a, b)` lives at shift `13 - b` of the numeric value.
//!
//! ```text
//! I-type: [opcode:5][imm6:6][reg:2]
//! R-type: [opcode:5][lhs:2][rhs:2][dest:2][reserved:2]
//! ```

use crate::error::DecodeError;

// ============================================================================
// Bit Position Constants
// ============================================================================

/// Total instruction width
pub const WORD_BITS: usize = 13;

/// Opcode field: [0, 5)
pub const OPCODE_SHIFT: u32 = 8;

/// First register field: [5, 7)
pub const REG_A_SHIFT: u32 = 6;

/// Second register field: [7, 9)
pub const REG_B_SHIFT: u32 = 4;

/// Third register field: [9, 11)
pub const REG_C_SHIFT: u32 = 2;

/// Trailing register field: [11, 13)
pub const REG_D_SHIFT: u32 = 0;

/// 6-bit literal: [5, 11)
pub const IMM6_SHIFT: u32 = 2;

/// List size discriminator: [7, 11)
pub const LIST_DISCRIMINATOR_SHIFT: u32 = 2;

// ============================================================================
// Field Masks
// ============================================================================

pub const OPCODE_MASK: u16 = 0x1F;

pub const REGISTER_MASK: u16 = 0x3;

pub const IMM6_MASK: u16 = 0x3F;

pub const LIST_DISCRIMINATOR_MASK: u16 = 0xF;

/// All 13 bits
pub const WORD_MASK: u16 = 0x1FFF;

// ============================================================================
// Field Extraction Functions
// ============================================================================

#[inline]
pub const fn extract_opcode(word: u16) -> u8 {
    ((word >> OPCODE_SHIFT) & OPCODE_MASK) as u8
}

/// Extract a 2-bit register code at `shift`
#[inline]
pub const fn extract_reg(word: u16, shift: u32) -> u8 {
    ((word >> shift) & REGISTER_MASK) as u8
}

#[inline]
pub const fn extract_imm6(word: u16) -> u8 {
    ((word >> IMM6_SHIFT) & IMM6_MASK) as u8
}

/// Bits [7, 11); `0000` selects register-indirect List sizing
#[inline]
pub const fn extract_list_discriminator(word: u16) -> u8 {
    ((word >> LIST_DISCRIMINATOR_SHIFT) & LIST_DISCRIMINATOR_MASK) as u8
}

// ============================================================================
// Instruction Encoding Functions
// ============================================================================

/// Encode `[opcode][imm6][reg]`
#[inline]
pub const fn encode_itype(opcode: u8, imm6: u8, reg: u8) -> u16 {
    (((opcode as u16) & OPCODE_MASK) << OPCODE_SHIFT)
        | (((imm6 as u16) & IMM6_MASK) << IMM6_SHIFT)
        | (((reg as u16) & REGISTER_MASK) << REG_D_SHIFT)
}

/// Encode `[opcode][a][b][c][00]`
#[inline]
pub const fn encode_rtype(opcode: u8, a: u8, b: u8, c: u8) -> u16 {
    (((opcode as u16) & OPCODE_MASK) << OPCODE_SHIFT)
        | (((a as u16) & REGISTER_MASK) << REG_A_SHIFT)
        | (((b as u16) & REGISTER_MASK) << REG_B_SHIFT)
        | (((c as u16) & REGISTER_MASK) << REG_C_SHIFT)
}

// ============================================================================
// Binary String Conversion
// ============================================================================

/// Convert a string of `0`/`1` to its unsigned value, most significant bit first.
///
/// The empty string is 0. Leading zeros do not count towards the 32-bit limit.
pub fn binary_to_integer(bits: &str) -> Result<u32, DecodeError> {
    let mut result: u32 = 0;
    let mut significant = 0usize;

    for (position, ch) in bits.chars().enumerate() {
        let bit = match ch {
            '0' => 0,
            '1' => 1,
            found => {
                return Err(DecodeError::NonBinaryDigit {
                    bits: bits.to_string(),
                    position,
                    found,
                })
            }
        };

        if significant > 0 || bit == 1 {
            significant += 1;
        }
        if significant > u32::BITS as usize {
            return Err(DecodeError::Overflow {
                bits: bits.to_string(),
                max: u32::BITS as usize,
            });
        }

        result = (result << 1) | bit;
    }

    Ok(result)
}

/// Render the low `width` bits of `value`, most significant first
pub fn integer_to_binary(value: u32, width: usize) -> String {
    (0..width)
        .rev()
        .map(|i| {
            if i < u32::BITS as usize && (value >> i) & 1 == 1 {
                '1'
            } else {
                '0'
            }
        })
        .collect()
}
