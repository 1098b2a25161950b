//! VM13 command-line tools
//!
//! Library half of the `vm13` binary: logging setup, the terminal console
//! and the subcommands.

pub mod commands;
pub mod console;
pub mod logging;

pub use console::StdConsole;
pub use logging::init_logging;
