//! # Lexer for VM13 Assembly Language

use logos::Logos;

/// Tokens for VM13 assembly
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")] // Skip whitespace
#[logos(skip r"[;#][^\n]*")] // Skip comments
pub enum Token {
    /// Identifier (instruction mnemonics)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// Register (r00, r01, r10, r11)
    #[regex(r"[rR][01][01]", |lex| lex.slice()[1..].to_string())]
    Register(String),

    /// Decimal number
    #[regex(r"[0-9]+", |lex| lex.slice().parse().ok())]
    Number(u64),

    /// Hexadecimal number
    #[regex(r"0x[0-9a-fA-F]+", |lex| u64::from_str_radix(&lex.slice()[2..], 16).ok())]
    Hex(u64),

    /// Binary number
    #[regex(r"0b[01]+", |lex| u64::from_str_radix(&lex.slice()[2..], 2).ok())]
    Binary(u64),

    /// Comma
    #[token(",")]
    Comma,
}

impl Token {
    /// Numeric value of a literal token
    pub fn number(&self) -> Option<u64> {
        match self {
            Token::Number(n) | Token::Hex(n) | Token::Binary(n) => Some(*n),
            _ => None,
        }
    }
}
