//! Instruction sources
//!
//! A source yields whitespace-delimited tokens; [`crate::Program::load`] turns
//! them into words.

use crate::error::{Result, SpecError};
use std::path::{Path, PathBuf};

/// Where program text comes from
pub trait InstructionSource {
    /// Read the complete program text
    fn read_text(&mut self) -> Result<String>;
}

impl InstructionSource for &str {
    fn read_text(&mut self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl InstructionSource for String {
    fn read_text(&mut self) -> Result<String> {
        Ok(self.clone())
    }
}

/// Program text stored in a file
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl InstructionSource for FileSource {
    fn read_text(&mut self) -> Result<String> {
        std::fs::read_to_string(&self.path).map_err(|source| SpecError::SourceOpen {
            path: self.path.clone(),
            source,
        })
    }
}
