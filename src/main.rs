//! Rust Bank Ledger CLI
//!
//! Interactive command-line ledger.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --accounts-dir ~/.bank --currency 'R$'
//! cargo run -- --no-color --log-level debug 2> ledger.log
//! ```
//!
//! The program creates the accounts directory if needed, then shows a menu to
//! create accounts, check balances, deposit and withdraw until EXIT is chosen.
//!
//! # Exit Codes
//!
//! - 0: EXIT chosen or input closed
//! - 1: The accounts directory could not be created, or the terminal failed

use rust_bank_ledger::cli::{self, Session, Terminal};
use rust_bank_ledger::logging;
use rust_bank_ledger::{FileStore, Ledger, RecordStore};
use std::io;
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();
    logging::init(args.log_level.as_directive());

    let store = FileStore::new(&args.accounts_dir);
    if let Err(e) = store.ensure_root() {
        error!(root = %args.accounts_dir.display(), error = %e, "cannot prepare accounts directory");
        eprintln!(
            "Error: cannot create accounts directory {}: {}",
            args.accounts_dir.display(),
            e
        );
        process::exit(1);
    }

    let config = args.to_session_config();
    let terminal = Terminal::new(io::stdin().lock(), io::stdout().lock(), config.color);
    let mut session = Session::new(Ledger::new(store), terminal, config);

    if let Err(e) = session.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
