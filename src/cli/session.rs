//! Interactive session
//!
//! The session shows the main menu, routes the chosen action to the ledger,
//! prints the outcome and shows the menu again until the user picks EXIT or
//! input is closed.
//!
//! # Error Policy
//!
//! - Invalid or duplicate names during account creation ask for another name.
//! - Every other ledger error is reported and control returns to the menu.
//! - Terminal I/O failures end the session and are returned to the caller.

use crate::cli::menu::MenuAction;
use crate::cli::terminal::{Style, Terminal};
use crate::core::ledger::Ledger;
use crate::core::traits::RecordStore;
use crate::io::amount::{format_amount, parse_amount};
use crate::types::{LedgerError, Money};
use std::io::{self, BufRead, Write};
use tracing::{debug, error, info, warn};

const MENU_QUESTION: &str = "What would you like to do?";
const FAREWELL: &str = "Thank you for using our bank!";

/// Presentation settings for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Symbol printed in front of amounts
    pub currency: String,
    /// Whether status lines are colored
    pub color: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            currency: "$".to_string(),
            color: true,
        }
    }
}

/// The kind of balance change requested from the menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Movement {
    Deposit,
    Withdrawal,
}

impl Movement {
    fn name_prompt(self) -> &'static str {
        match self {
            Movement::Deposit => "Enter the name of the account to deposit into:",
            Movement::Withdrawal => "Enter the account name:",
        }
    }

    fn amount_prompt(self) -> &'static str {
        match self {
            Movement::Deposit => "How much would you like to deposit?",
            Movement::Withdrawal => "How much would you like to withdraw?",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Movement::Deposit => "Deposit",
            Movement::Withdrawal => "Withdrawal",
        }
    }
}

/// One interactive session over a ledger and a terminal
pub struct Session<S: RecordStore, R, W> {
    ledger: Ledger<S>,
    terminal: Terminal<R, W>,
    config: SessionConfig,
}

impl<S, R, W> Session<S, R, W>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    /// Create a session
    pub fn new(ledger: Ledger<S>, terminal: Terminal<R, W>, config: SessionConfig) -> Self {
        Session {
            ledger,
            terminal,
            config,
        }
    }

    /// Consume the session and return its ledger
    pub fn into_ledger(self) -> Ledger<S> {
        self.ledger
    }

    /// Run the menu loop until EXIT or end of input
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Io` if reading from or writing to the terminal
    /// fails. Ledger errors never end the session.
    pub fn run(&mut self) -> Result<(), LedgerError> {
        info!("session started");

        loop {
            let selection = self
                .terminal
                .select(MENU_QUESTION, &MenuAction::ALL)
                .inspect_err(|e| error!(error = %e, "prompt failed"))?;

            let Some(action) = selection else {
                info!("input closed, session ended");
                return Ok(());
            };

            debug!(%action, "menu action selected");

            let outcome = match action {
                MenuAction::CreateAccount => self.create_account(),
                MenuAction::CheckBalance => self.check_balance(),
                MenuAction::Deposit => self.move_funds(Movement::Deposit),
                MenuAction::Withdraw => self.move_funds(Movement::Withdrawal),
                MenuAction::Exit => {
                    self.terminal.say(Style::Success, FAREWELL)?;
                    info!("session ended by user");
                    return Ok(());
                }
            };

            outcome.inspect_err(|e| error!(error = %e, %action, "prompt failed"))?;
        }
    }

    fn create_account(&mut self) -> io::Result<()> {
        self.terminal
            .say(Style::Highlight, "Congratulations on choosing our bank!")?;
        self.terminal
            .say(Style::Success, "Set up your account below...")?;

        loop {
            let Some(name) = self.terminal.ask("Enter a name for your account:")? else {
                return Ok(());
            };

            match self.ledger.create_account(&name) {
                Ok(_) => {
                    return self
                        .terminal
                        .say(Style::Success, "Your account was created successfully!");
                }
                Err(
                    e @ (LedgerError::InvalidName
                    | LedgerError::AccountExists { .. }
                    | LedgerError::InvalidStorageKey { .. }),
                ) => {
                    warn!(error = %e, "account name rejected");
                    self.report(&e)?;
                }
                Err(e) => return self.report(&e),
            }
        }
    }

    fn check_balance(&mut self) -> io::Result<()> {
        let Some(name) = self.terminal.ask("Enter the name of your account:")? else {
            return Ok(());
        };

        match self.ledger.balance(&name) {
            Ok(balance) => {
                let text = format!("Current balance: {}", self.format(balance));
                self.terminal.say(Style::Info, &text)
            }
            Err(e) => self.report(&e),
        }
    }

    fn move_funds(&mut self, movement: Movement) -> io::Result<()> {
        let Some(name) = self.terminal.ask(movement.name_prompt())? else {
            return Ok(());
        };

        if let Err(e) = self.ledger.ensure_exists(&name) {
            return self.report(&e);
        }

        let Some(amount_text) = self.terminal.ask(movement.amount_prompt())? else {
            return Ok(());
        };

        let result = parse_amount(&amount_text).and_then(|amount| {
            let applied = match movement {
                Movement::Deposit => self.ledger.deposit(&name, amount),
                Movement::Withdrawal => self.ledger.withdraw(&name, amount),
            };
            applied.map(|_| amount)
        });

        match result {
            Ok(amount) => {
                let text = format!(
                    "{} of {} completed successfully!",
                    movement.label(),
                    self.format(amount)
                );
                self.terminal.say(Style::Success, &text)
            }
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, error: &LedgerError) -> io::Result<()> {
        match error {
            LedgerError::Io { .. } => error!(%error, "operation failed"),
            _ => debug!(%error, "operation rejected"),
        }
        self.terminal.say(Style::Error, user_message(error))
    }

    fn format(&self, money: Money) -> String {
        format_amount(&self.config.currency, money)
    }
}

/// The message shown to the user for each ledger error
pub fn user_message(error: &LedgerError) -> &'static str {
    match error {
        LedgerError::InvalidName => "Invalid name. Please try again.",
        LedgerError::AccountExists { .. } => "This account already exists. Choose another name.",
        LedgerError::AccountNotFound { .. } => "This account does not exist.",
        LedgerError::InvalidAmount { .. } => "Invalid amount.",
        LedgerError::InsufficientFunds { .. } => "Insufficient balance.",
        LedgerError::BalanceOverflow { .. } => "This deposit would exceed the maximum balance.",
        LedgerError::CorruptRecord { .. } => "Error reading the account data.",
        LedgerError::InvalidStorageKey { .. } => "This name cannot be used for an account.",
        LedgerError::Io { .. } => "Could not save the account data.",
    }
}
