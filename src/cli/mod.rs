// CLI module
// Command-line arguments and the interactive session

mod args;
pub mod menu;
pub mod session;
pub mod terminal;

pub use args::{CliArgs, LogLevel};
pub use menu::MenuAction;
pub use session::{Session, SessionConfig};
pub use terminal::{Style, Terminal};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments or --help), clap displays an error
/// message or help text and exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
