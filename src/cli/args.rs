use crate::cli::session::SessionConfig;
use crate::core::file_store::DEFAULT_ROOT;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Interactive bank ledger: create accounts, deposit, withdraw and check balances
#[derive(Parser, Debug)]
#[command(name = "bank-ledger")]
#[command(
    about = "Interactive bank ledger: create accounts, deposit, withdraw and check balances",
    long_about = None
)]
pub struct CliArgs {
    /// Directory holding one JSON record per account
    #[arg(
        long = "accounts-dir",
        value_name = "DIR",
        default_value = DEFAULT_ROOT,
        help = "Directory holding one JSON record per account (created if missing)"
    )]
    pub accounts_dir: PathBuf,

    /// Currency symbol printed in front of amounts
    #[arg(
        long = "currency",
        value_name = "SYMBOL",
        default_value = "$",
        help = "Currency symbol printed in front of amounts"
    )]
    pub currency: String,

    /// Disable colored output
    #[arg(long = "no-color", help = "Disable colored output (also honors NO_COLOR)")]
    pub no_color: bool,

    /// Log verbosity written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log verbosity written to stderr (RUST_LOG takes precedence)"
    )]
    pub log_level: LogLevel,
}

/// Log levels accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// The level as a `tracing_subscriber::EnvFilter` directive
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl CliArgs {
    /// Create a SessionConfig from CLI arguments
    ///
    /// Color is enabled unless `--no-color` is given or the `NO_COLOR`
    /// environment variable is set.
    pub fn to_session_config(&self) -> SessionConfig {
        SessionConfig {
            currency: self.currency.clone(),
            color: !self.no_color && std::env::var_os("NO_COLOR").is_none(),
        }
    }
}
