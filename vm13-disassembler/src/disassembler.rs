//! Main disassembler logic

use vm13_spec::{lint, Program};
use crate::decoder::decode;
use crate::formatter::format;

/// Disassemble a program into an annotated listing.
///
/// Undecodable words are listed with an error comment instead of aborting,
/// so a listing can be produced for programs that fail validation.
pub fn disassemble(program: &Program) -> String {
    let mut output = String::new();

    output.push_str("; VM13 Disassembly\n");
    output.push_str(&format!("; {} instructions\n", program.len()));
    for warning in lint(program) {
        output.push_str(&format!("; warning: {}\n", warning));
    }
    output.push('\n');

    for (index, &word) in program.words().iter().enumerate() {
        output.push_str(&format!("{:4}:  {}  ", index, word));

        match decode(word) {
            Ok(instr) => output.push_str(&format(&instr)),
            Err(e) => output.push_str(&format!("; ERROR: {}", e)),
        }

        output.push('\n');
    }

    output
}
