//! Subcommand implementations
//!
//! Each command takes already-parsed arguments and writes its report to the
//! given writer so it can be exercised without a terminal.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use vm13_runtime::{Console, ExecutionResult, VMConfig, VM};
use vm13_spec::{lint, validate, FileSource, Program, ValidationWarning};

/// Load a program from a file of 13-bit words, or of assembly text when
/// `assembly` is set
pub fn load_program(path: &Path, assembly: bool) -> Result<Program> {
    if assembly {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not open file '{}'", path.display()))?;
        vm13_assembler::assemble(&text)
            .with_context(|| format!("Failed to assemble '{}'", path.display()))
    } else {
        Ok(Program::load(&mut FileSource::new(path))?)
    }
}

/// Validate and execute a program against `console`
pub fn run(program: Program, config: VMConfig, console: &mut dyn Console) -> Result<ExecutionResult> {
    let result = VM::new(program, config)?.run(console)?;
    info!(steps = result.steps, halted_at = result.halted_at, "program finished");
    Ok(result)
}

/// Assemble `source` and write one 13-bit word per line
pub fn asm(source: &str, out: &mut dyn Write) -> Result<usize> {
    let program = vm13_assembler::assemble(source)?;
    out.write_all(program.to_source().as_bytes())?;
    Ok(program.len())
}

pub fn disasm(program: &Program, out: &mut dyn Write) -> Result<()> {
    out.write_all(vm13_disassembler::disassemble(program).as_bytes())?;
    Ok(())
}

/// Run the pre-execution checks and report lint warnings.
///
/// Fails with the first validation error; otherwise returns the warnings.
pub fn check(program: &Program, out: &mut dyn Write) -> Result<Vec<ValidationWarning>> {
    validate(program)?;
    let warnings = lint(program);
    for warning in &warnings {
        writeln!(out, "warning: {}", warning)?;
    }
    writeln!(
        out,
        "ok: {} instructions, {} warning(s)",
        program.len(),
        warnings.len()
    )?;
    Ok(warnings)
}
