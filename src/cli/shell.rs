use std::io::{BufRead, Write};

use log::debug;

use super::{money, parse_amount};
use crate::{
    bank::Bank,
    domain::{
        category::Category,
        transaction::TransactionKind,
    },
    error::Result,
    store::UserStore,
};

const LOGIN_HELP: &str = "\
Commands:
  login <username> <password>
  signup <username> <password> <initial balance> [savings]
  help
  quit";

const ACCOUNT_HELP: &str = "\
Commands:
  deposit [amount]
  withdraw [amount]
  balance
  log
  logout
  help
  quit";

enum Flow {
    Continue,
    Quit,
}

/// Line oriented front end with a login screen and an account screen.
///
/// Failures are printed and the shell keeps reading; only a broken input or
/// output stream ends it early.
pub struct Shell<'a, S, R, W> {
    bank: &'a mut Bank<S>,
    input: R,
    out: W,
}

impl<'a, S: UserStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(bank: &'a mut Bank<S>, input: R, out: W) -> Self {
        Self { bank, input, out }
    }

    pub fn run(mut self) -> Result<()> {
        self.help()?;

        loop {
            let prompt = match self.bank.session() {
                Some(session) => format!("{}> ", session.account().name()),
                None => "login> ".to_owned(),
            };
            let Some(line) = self.read_line(&prompt)? else {
                break;
            };

            let words: Vec<&str> = line.split_whitespace().collect();
            match self.dispatch(&words) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => writeln!(self.out, "Error: {err}")?,
            }
        }

        debug!("shell closed");
        Ok(())
    }

    fn dispatch(&mut self, words: &[&str]) -> Result<Flow> {
        let logged_in = self.bank.session().is_some();

        match (logged_in, words) {
            (_, []) => {}
            (_, ["help"]) => self.help()?,
            (_, ["quit" | "exit"]) => return Ok(Flow::Quit),
            (false, ["login", username, password]) => {
                let session = self.bank.login(username, password)?;
                let balance = session.account().balance();
                writeln!(self.out, "Balance: {}", money(balance))?;
            }
            (false, ["signup", username, password, balance]) => {
                self.signup(username, password, balance, Category::Checking)?
            }
            (false, ["signup", username, password, balance, "savings"]) => {
                self.signup(username, password, balance, Category::Savings)?
            }
            (true, ["deposit", rest @ ..]) if rest.len() <= 1 => {
                self.transact(TransactionKind::Deposit, rest.first().copied())?
            }
            (true, ["withdraw", rest @ ..]) if rest.len() <= 1 => {
                self.transact(TransactionKind::Withdrawal, rest.first().copied())?
            }
            (true, ["balance"]) => {
                if let Some(session) = self.bank.session() {
                    writeln!(self.out, "{}", session.account())?;
                }
            }
            (true, ["log"]) => self.print_log()?,
            (true, ["logout"]) => {
                self.bank.logout();
                writeln!(self.out, "Logged out.")?;
            }
            _ => writeln!(self.out, "Unknown command, type `help` for the list.")?,
        }

        Ok(Flow::Continue)
    }

    fn signup(
        &mut self,
        username: &str,
        password: &str,
        balance: &str,
        category: Category,
    ) -> Result<()> {
        let balance = parse_amount("Initial balance", balance)?;
        self.bank.signup(username, password, category, balance)?;
        writeln!(self.out, "Account created successfully! Please log in.")?;
        Ok(())
    }

    /// Applies a deposit or withdrawal, asking for the amount when it was not
    /// given. An empty answer cancels.
    fn transact(&mut self, kind: TransactionKind, amount: Option<&str>) -> Result<()> {
        let (field, question) = match kind {
            TransactionKind::Deposit => ("Deposit amount", "Enter deposit amount: "),
            TransactionKind::Withdrawal => ("Withdrawal amount", "Enter withdrawal amount: "),
        };

        let text = match amount {
            Some(text) => text.to_owned(),
            None => match self.read_line(question)? {
                Some(text) if !text.is_empty() => text,
                _ => return Ok(()),
            },
        };
        let amount = parse_amount(field, &text)?;

        match kind {
            TransactionKind::Deposit => self.bank.deposit(amount)?,
            TransactionKind::Withdrawal => self.bank.withdraw(amount)?,
        }

        if let Some(session) = self.bank.session() {
            if let Some(transaction) = session.log().last() {
                writeln!(self.out, "{transaction}")?;
            }
            writeln!(self.out, "Balance: {}", money(session.account().balance()))?;
        }
        Ok(())
    }

    fn print_log(&mut self) -> Result<()> {
        let Some(session) = self.bank.session() else {
            return Ok(());
        };

        if session.log().is_empty() {
            writeln!(self.out, "No transactions yet.")?;
        }
        for transaction in session.log() {
            writeln!(self.out, "{transaction}")?;
        }
        Ok(())
    }

    fn help(&mut self) -> Result<()> {
        let text = if self.bank.session().is_some() {
            ACCOUNT_HELP
        } else {
            LOGIN_HELP
        };
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    /// `None` once the input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}
