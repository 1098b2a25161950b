//! # Program Structure for VM13
//!
//! A program is the ordered list of words read from an instruction source.
//! It is immutable once loaded; the VM walks it front to back exactly once.

use crate::error::{Result, SpecError};
use crate::source::InstructionSource;
use crate::word::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    words: Vec<Word>,
}

impl Program {
    pub fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Parse program text: whitespace-delimited 13-character tokens of `0`/`1`
    pub fn from_source(text: &str) -> Result<Self> {
        let words = text
            .split_whitespace()
            .enumerate()
            .map(|(index, token)| {
                Word::parse(token).map_err(|reason| SpecError::MalformedInstruction {
                    index,
                    token: token.to_string(),
                    reason,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { words })
    }

    /// Read and parse everything an instruction source provides
    pub fn load<S: InstructionSource + ?Sized>(source: &mut S) -> Result<Self> {
        let text = source.read_text()?;
        Self::from_source(&text)
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn get(&self, index: usize) -> Option<Word> {
        self.words.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the literal `0000000000000` appears anywhere
    pub fn contains_stop(&self) -> bool {
        self.words.iter().any(|w| w.is_stop())
    }

    /// Run the pre-execution checks (see [`crate::validation::validate`])
    pub fn validate(&self) -> Result<()> {
        crate::validation::validate(self)
    }

    /// Render one token per line, suitable for [`Program::from_source`]
    pub fn to_source(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            writeln!(f, "{}", word)?;
        }
        Ok(())
    }
}

impl From<Vec<Word>> for Program {
    fn from(words: Vec<Word>) -> Self {
        Self::new(words)
    }
}
