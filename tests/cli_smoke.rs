use std::io::Cursor;

use clap::Parser;
use tally::cli::{run, Cli};

fn tally(store: &str, args: &[&str], input: &str) -> (tally::error::Result<()>, String) {
    let cli = Cli::parse_from(["tally", "--store", store].iter().chain(args));
    let mut out = Vec::new();
    let result = run(cli, Cursor::new(input.to_owned()), &mut out);
    (result, String::from_utf8(out).expect("utf-8 output"))
}

#[test]
fn one_shot_commands_share_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let store = dir.path().join("accounts.csv");
    let store = store.to_str().expect("utf-8 path");

    let (result, _) = tally(store, &["signup", "alice", "-p", "pw", "-b", "100"], "");
    result.expect("signup");

    let (result, out) = tally(store, &["deposit", "-u", "alice", "-p", "pw", "50"], "");
    result.expect("deposit");
    assert_eq!(out, "Deposited $50.00\nBalance: $150.00\n");

    let (result, _) = tally(store, &["withdraw", "-u", "alice", "-p", "pw", "-5"], "");
    assert!(result.is_err());

    let (result, out) = tally(store, &["balance", "-u", "alice", "-p", "pw"], "");
    result.expect("balance");
    assert_eq!(out, "Account: alice, Balance: $150.00\n");
}

#[test]
fn duplicate_signup_leaves_file_untouched() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("accounts.csv");
    std::fs::write(&path, "alice,pw,Account,3\n").expect("write");
    let store = path.to_str().expect("utf-8 path");

    let (result, _) = tally(store, &["signup", "alice", "-p", "new", "--savings"], "");
    assert!(result.is_err());
    assert_eq!(
        std::fs::read_to_string(&path).expect("read"),
        "alice,pw,Account,3\n"
    );
}

#[test]
fn shell_reports_load_errors_and_keeps_going() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("accounts.csv");
    std::fs::write(&path, "alice,pw,Account,3\nbroken,row\n").expect("write");
    let store = path.to_str().expect("utf-8 path");

    let (result, out) = tally(store, &[], "login alice pw\nbalance\nquit\n");
    result.expect("shell");
    assert!(out.starts_with("Error loading users data:"));
    assert!(out.contains("Account: alice, Balance: $3.00"));
}

#[test]
fn signup_rejects_names_the_shell_cannot_type() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("accounts.csv");
    let store = path.to_str().expect("utf-8 path");

    let (result, _) = tally(store, &["signup", "ann lee", "-p", "a b"], "");
    assert!(result.is_err());
    assert!(!path.exists());
}
