use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::{
    bank::Bank,
    domain::{category::Category, to_cents},
    error::{Error, Result},
    store::{FileStore, UserStore},
};

mod shell;

pub use shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Manage simple bank accounts kept in a CSV file")]
pub struct Cli {
    /// Accounts file
    #[arg(long, env = "TALLY_STORE", default_value = "accounts.csv", global = true)]
    pub store: PathBuf,

    /// Runs the interactive shell when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new user
    Signup {
        username: String,
        #[arg(short, long)]
        password: String,
        /// Initial balance
        #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
        balance: String,
        /// Open a savings account instead of a checking one
        #[arg(long)]
        savings: bool,
    },
    /// Show the account summary
    Balance(Credentials),
    /// Deposit into an account
    Deposit {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
    /// Withdraw from an account
    Withdraw {
        #[command(flatten)]
        credentials: Credentials,
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
    /// Interactive login, signup and account screens
    Shell,
}

#[derive(Args, Debug)]
pub struct Credentials {
    #[arg(short, long)]
    pub username: String,
    #[arg(short, long)]
    pub password: String,
}

/// Parse free text typed by the user as an amount.
pub fn parse_amount(field: &'static str, input: &str) -> Result<Decimal> {
    input
        .trim()
        .parse::<Decimal>()
        .map_err(|_| Error::InvalidNumber {
            field,
            input: input.to_owned(),
        })
}

/// Formats an amount the way balances are shown to users.
pub fn money(amount: Decimal) -> String {
    format!("${:.2}", to_cents(amount))
}

/// Run `cli` against the accounts file it names.
///
/// A failed load is reported on `out` and the command goes on with whatever
/// was read.
pub fn run(cli: Cli, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut bank = Bank::new(FileStore::new(cli.store));
    if let Err(err) = bank.load() {
        writeln!(out, "Error loading users data: {err}")?;
    }

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => return Shell::new(&mut bank, input, out).run(),
        Command::Signup {
            username,
            password,
            balance,
            savings,
        } => {
            let balance = parse_amount("Initial balance", &balance)?;
            let category = if savings {
                Category::Savings
            } else {
                Category::Checking
            };
            bank.signup(&username, &password, category, balance)?;
            writeln!(out, "Account created successfully for {username}.")?;
        }
        Command::Balance(credentials) => {
            let session = bank.login(&credentials.username, &credentials.password)?;
            writeln!(out, "{}", session.account())?;
        }
        Command::Deposit {
            credentials,
            amount,
        } => {
            let amount = parse_amount("Deposit amount", &amount)?;
            bank.login(&credentials.username, &credentials.password)?;
            bank.deposit(amount)?;
            writeln!(out, "Deposited {}", money(amount))?;
            print_balance(&bank, &mut out)?;
        }
        Command::Withdraw {
            credentials,
            amount,
        } => {
            let amount = parse_amount("Withdrawal amount", &amount)?;
            bank.login(&credentials.username, &credentials.password)?;
            bank.withdraw(amount)?;
            writeln!(out, "Withdrew {}", money(amount))?;
            print_balance(&bank, &mut out)?;
        }
    }

    Ok(())
}

fn print_balance<S: UserStore>(bank: &Bank<S>, mut out: impl Write) -> Result<()> {
    if let Some(session) = bank.session() {
        writeln!(out, "Balance: {}", money(session.account().balance()))?;
    }
    Ok(())
}
