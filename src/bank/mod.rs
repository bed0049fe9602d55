use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::{
    domain::{
        account::Account,
        category::Category,
        transaction::{Transaction, TransactionKind},
    },
    error::{Error, Result},
    store::{UserRecord, UserStore, Users},
};

/// The logged in user's account together with what they did so far.
#[derive(Debug, Clone)]
pub struct Session {
    account: Account,
    log: Vec<Transaction>,
}

impl Session {
    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Transactions applied since login, oldest first.
    pub fn log(&self) -> &[Transaction] {
        &self.log
    }
}

/// Users in memory plus at most one active session.
///
/// Every successful mutation is followed by a save of the whole mapping
/// through the injected store.
#[derive(Debug)]
pub struct Bank<S> {
    store: S,
    users: Users,
    session: Option<Session>,
}

impl<S: UserStore> Bank<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            users: Users::new(),
            session: None,
        }
    }

    /// Hydrate users from the store.
    ///
    /// A failure is returned but does not undo the rows already loaded, the
    /// bank stays usable with that partial state.
    pub fn load(&mut self) -> Result<()> {
        let loaded = self.store.load(&mut self.users);
        if let Err(err) = &loaded {
            warn!("loaded {} users before failing: {err}", self.users.len());
        }
        loaded
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn users(&self) -> &Users {
        &self.users
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn signup(
        &mut self,
        username: &str,
        password: &str,
        category: Category,
        initial_balance: Decimal,
    ) -> Result<()> {
        if username.is_empty() || password.is_empty() {
            return Err(Error::EmptyCredentials);
        }

        // Shell input is split on whitespace.
        if username.chars().chain(password.chars()).any(char::is_whitespace) {
            return Err(Error::WhitespaceInCredentials);
        }

        if self.users.contains_key(username) {
            warn!("signup rejected, {username} already exists");
            return Err(Error::UsernameTaken {
                username: username.to_owned(),
            });
        }

        self.users.insert(
            username.to_owned(),
            UserRecord {
                password: password.to_owned(),
                category,
                balance: initial_balance,
            },
        );
        info!("created {category} for {username}");

        self.save()
    }

    pub fn login(&mut self, username: &str, password: &str) -> Result<&Session> {
        let record = self
            .users
            .get(username)
            .filter(|record| record.password == password)
            .ok_or_else(|| {
                warn!("failed login for {username}");
                Error::InvalidCredentials
            })?;

        let mut account = Account::new(username, record.category);
        account.set_balance(record.balance);
        info!("{username} logged in");

        Ok(self.session.insert(Session {
            account,
            log: Vec::new(),
        }))
    }

    /// Ends the active session, returning it if there was one.
    pub fn logout(&mut self) -> Option<Session> {
        let session = self.session.take();
        if let Some(session) = &session {
            info!("{} logged out", session.account.name());
        }
        session
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        self.apply(TransactionKind::Deposit, amount)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        self.apply(TransactionKind::Withdrawal, amount)
    }

    /// Applies a transaction to the session and persists the new balance.
    ///
    /// When the save fails the in-memory balance is kept; the next successful
    /// save writes it out.
    fn apply(&mut self, kind: TransactionKind, amount: Decimal) -> Result<()> {
        let session = self.session.as_mut().ok_or(Error::NotLoggedIn)?;
        let account = &mut session.account;

        let applied = match kind {
            TransactionKind::Deposit => account
                .deposit(amount)
                .map(|()| Transaction::deposit(amount)),
            TransactionKind::Withdrawal => account
                .withdraw(amount)
                .map(|()| Transaction::withdrawal(amount)),
        };
        let transaction = applied.inspect_err(|err| warn!("{kind:?} rejected: {err}"))?;

        session.log.push(transaction);
        if let Some(record) = self.users.get_mut(session.account.name()) {
            record.balance = session.account.balance();
        }
        debug!("{kind:?} applied for {}", session.account.name());

        self.save()
    }

    fn save(&self) -> Result<()> {
        self.store.save(&self.users).inspect_err(|err| {
            warn!("could not save users: {err}");
        })
    }
}
