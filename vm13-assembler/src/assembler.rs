//! Main assembler logic

use vm13_spec::Program;
use crate::encoder::encode;
use crate::error::Result;
use crate::parser::parse_instruction;

/// Assemble source code into a program
pub fn assemble(source: &str) -> Result<Program> {
    let mut words = Vec::new();

    for (line_num, line) in source.lines().enumerate() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        let word = parse_instruction(line)
            .and_then(|instr| encode(&instr))
            .map_err(|e| e.at_line(line_num + 1))?;
        words.push(word);
    }

    Ok(Program::new(words))
}
