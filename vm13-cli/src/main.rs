//! VM13 command-line tool
//!
//! Usage:
//!   vm13 run <program> [--asm] [--input "1 2 3"] [--max-array-len N]
//!   vm13 asm <source.asm> [-o <program>]
//!   vm13 disasm <program>
//!   vm13 check <program>

use std::fs;
use std::io::{self, BufWriter, Cursor, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;

use vm13_cli::{commands, init_logging, StdConsole};
use vm13_runtime::VMConfig;

#[derive(Parser, Debug)]
#[command(name = "vm13", version)]
#[command(about = "Run, assemble, disassemble and check 13-bit VM13 programs")]
struct Cli {
    /// Log each executed instruction (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a program
    Run {
        /// Program file: whitespace-separated 13-bit words
        program: PathBuf,

        /// Treat the program file as assembly text
        #[arg(long)]
        asm: bool,

        /// Console input values instead of prompting on stdin
        #[arg(long)]
        input: Option<String>,

        /// Largest array `list` may create
        #[arg(long, default_value_t = VMConfig::default().max_array_len)]
        max_array_len: usize,
    },

    /// Assemble mnemonic source into 13-bit words
    Asm {
        source: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print an annotated listing of a program
    Disasm {
        program: PathBuf,

        #[arg(long)]
        asm: bool,
    },

    /// Validate a program without running it
    Check {
        program: PathBuf,

        #[arg(long)]
        asm: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Commands) -> Result<()> {
    match command {
        Commands::Run {
            program,
            asm,
            input,
            max_array_len,
        } => {
            let program = commands::load_program(&program, asm)?;
            let config = VMConfig { max_array_len };
            let stdout = io::stdout().lock();

            match input {
                Some(values) => {
                    let mut console = StdConsole::new(Cursor::new(values.into_bytes()), stdout, false);
                    commands::run(program, config, &mut console)?;
                }
                None => {
                    let mut console = StdConsole::new(io::stdin().lock(), stdout, true);
                    commands::run(program, config, &mut console)?;
                }
            }
            eprintln!("Program ended successfully.");
        }

        Commands::Asm { source, output } => {
            let text = fs::read_to_string(&source)
                .with_context(|| format!("Could not open file '{}'", source.display()))?;

            let count = match output {
                Some(path) => {
                    let file = fs::File::create(&path)
                        .with_context(|| format!("Could not create '{}'", path.display()))?;
                    let mut out = BufWriter::new(file);
                    let count = commands::asm(&text, &mut out)?;
                    out.flush()?;
                    count
                }
                None => commands::asm(&text, &mut io::stdout().lock())?,
            };
            debug!(count, "assembled");
        }

        Commands::Disasm { program, asm } => {
            let program = commands::load_program(&program, asm)?;
            commands::disasm(&program, &mut io::stdout().lock())?;
        }

        Commands::Check { program, asm } => {
            let program = commands::load_program(&program, asm)?;
            commands::check(&program, &mut io::stdout().lock())?;
        }
    }

    Ok(())
}
