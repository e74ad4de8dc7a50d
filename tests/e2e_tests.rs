//! End-to-end integration tests
//!
//! These tests drive complete interactive sessions against a real accounts
//! directory. Each test:
//! 1. Creates a temporary accounts directory
//! 2. Feeds a scripted sequence of answers to the menu
//! 3. Checks both what was printed and what was left on disk
//!
//! The last tests run the compiled binary with piped stdin.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use rust_bank_ledger::cli::{Session, SessionConfig, Terminal};
    use rust_bank_ledger::{FileStore, Ledger, Money, RecordStore};
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use std::process::{Command, Stdio};
    use tempfile::tempdir;

    /// Run a scripted session against `root` and return everything printed
    fn run_session(root: &Path, script: &[&str]) -> String {
        let store = FileStore::new(root);
        store.ensure_root().expect("Failed to create accounts directory");

        let input = script.join("\n");
        let mut output = Vec::new();
        let terminal = Terminal::new(input.as_bytes(), &mut output, false);
        let mut session = Session::new(Ledger::new(store), terminal, SessionConfig::default());

        session
            .run()
            .unwrap_or_else(|e| panic!("Session failed: {}", e));
        drop(session);

        String::from_utf8(output).expect("Output is not UTF-8")
    }

    fn balances_shown(output: &str) -> Vec<String> {
        output
            .lines()
            .filter_map(|line| line.split("Current balance: ").nth(1))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_alice_scenario_persists_to_disk() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("accounts");

        let output = run_session(
            &root,
            &[
                "1", "alice", "2", "alice", "3", "alice", "100", "2", "alice", "4", "alice",
                "30,00", "2", "alice", "4", "alice", "1000", "2", "alice", "5",
            ],
        );

        assert_eq!(
            balances_shown(&output),
            ["$0.00", "$100.00", "$70.00", "$70.00"]
        );
        assert!(output.contains("Insufficient balance."));

        let record = fs::read_to_string(root.join("alice.json")).unwrap();
        assert_eq!(record, r#"{"balance":70}"#);
    }

    #[test]
    fn test_balances_survive_across_sessions() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("accounts");

        run_session(&root, &["1", "bob", "3", "bob", "12,34", "5"]);
        let output = run_session(&root, &["3", "bob", "0.66", "2", "bob", "5"]);

        assert_eq!(balances_shown(&output), ["$13.00"]);
    }

    #[rstest]
    #[case::dot("10.50")]
    #[case::comma("10,50")]
    fn test_decimal_separators(#[case] amount: &str) {
        let dir = tempdir().unwrap();
        let root = dir.path().join("accounts");

        let output = run_session(&root, &["1", "carol", "3", "carol", amount, "2", "carol", "5"]);

        assert!(output.contains("Deposit of $10.50 completed successfully!"));
        assert_eq!(balances_shown(&output), ["$10.50"]);
    }

    #[rstest]
    #[case::past_f64_integers("90071992547409.93", "$90071992547409.93")]
    #[case::largest("184467440737095516.15", "$184467440737095516.15")]
    fn test_large_deposits_read_back_exactly(#[case] amount: &str, #[case] shown: &str) {
        let dir = tempdir().unwrap();
        let root = dir.path().join("accounts");

        run_session(&root, &["1", "frank", "3", "frank", amount, "5"]);
        let output = run_session(&root, &["2", "frank", "5"]);

        assert_eq!(balances_shown(&output), [shown]);
        let record = fs::read_to_string(root.join("frank.json")).unwrap();
        assert_eq!(record, format!(r#"{{"balance":{}}}"#, amount));
    }

    #[test]
    fn test_unknown_account_writes_nothing() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("accounts");

        let output = run_session(&root, &["2", "ghost", "5"]);

        assert!(output.contains("This account does not exist."));
        assert_eq!(fs::read_dir(&root).unwrap().count(), 0);
    }

    #[test]
    fn test_corrupt_record_is_reported_and_preserved() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("accounts");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("dave.json"), "{\"balance\": ").unwrap();

        let output = run_session(&root, &["2", "dave", "3", "dave", "5", "5"]);

        assert_eq!(output.matches("Error reading the account data.").count(), 2);
        assert!(balances_shown(&output).is_empty());
        assert_eq!(
            fs::read_to_string(root.join("dave.json")).unwrap(),
            "{\"balance\": "
        );
    }

    #[test]
    fn test_legacy_records_are_read() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("accounts");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("erin.json"), r#"{"balance": 0.30000000000000004}"#).unwrap();

        let output = run_session(&root, &["2", "erin", "5"]);

        assert_eq!(balances_shown(&output), ["$0.30"]);
        let store = FileStore::new(&root);
        assert!(store.exists("erin"));
        assert_eq!(
            Ledger::new(store).balance("erin"),
            Ok(Money::from_cents(30))
        );
    }

    /// Run the compiled binary with `stdin` piped in
    fn run_binary(args: &[&str], stdin: &str) -> std::process::Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_rust-bank-ledger"))
            .args(args)
            .env_remove("RUST_LOG")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to start binary");

        // The binary may exit before reading everything (start-up failure)
        let _ = child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(stdin.as_bytes());

        child.wait_with_output().expect("Failed to wait for binary")
    }

    #[test]
    fn test_binary_session() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("bank");
        let root_arg = root.to_str().unwrap();

        let output = run_binary(
            &["--accounts-dir", root_arg, "--no-color", "--currency", "R$"],
            "1\nalice\n3\nalice\n25,5\n2\nalice\n5\n",
        );

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Current balance: R$25.50"));
        assert!(stdout.contains("Thank you for using our bank!"));
        assert!(!stdout.contains('\x1b'));
        assert!(root.join("alice.json").exists());
    }

    #[test]
    fn test_binary_fails_when_accounts_dir_cannot_be_created() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("accounts");
        fs::write(&blocker, "a file, not a directory").unwrap();

        let output = run_binary(&["--accounts-dir", blocker.to_str().unwrap()], "5\n");

        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("cannot create accounts directory"));
    }
}
