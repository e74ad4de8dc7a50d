//! Main menu actions

use std::fmt;

/// One entry of the main menu
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    CreateAccount,
    CheckBalance,
    Deposit,
    Withdraw,
    Exit,
}

impl MenuAction {
    /// Every action, in menu order
    pub const ALL: [MenuAction; 5] = [
        MenuAction::CreateAccount,
        MenuAction::CheckBalance,
        MenuAction::Deposit,
        MenuAction::Withdraw,
        MenuAction::Exit,
    ];

    /// Text shown in the menu
    pub fn label(self) -> &'static str {
        match self {
            MenuAction::CreateAccount => "Create Account",
            MenuAction::CheckBalance => "Check Balance",
            MenuAction::Deposit => "Deposit",
            MenuAction::Withdraw => "Withdraw",
            MenuAction::Exit => "EXIT",
        }
    }

    /// Resolve a typed answer against the listed choices
    ///
    /// The answer may be the 1-based position of a choice or its label,
    /// compared case-insensitively after trimming.
    pub fn from_choice(answer: &str, choices: &[MenuAction]) -> Option<MenuAction> {
        let answer = answer.trim();

        if let Ok(position) = answer.parse::<usize>() {
            return position
                .checked_sub(1)
                .and_then(|index| choices.get(index))
                .copied();
        }

        choices
            .iter()
            .copied()
            .find(|choice| choice.label().eq_ignore_ascii_case(answer))
    }
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
