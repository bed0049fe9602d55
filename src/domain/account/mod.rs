use std::fmt;

use rust_decimal::Decimal;

use super::{
    category::Category,
    error::{Error, Result},
    to_cents,
};

/// In-memory view over one user's balance while they are logged in.
///
/// The balance moves only through [`Account::deposit`] and
/// [`Account::withdraw`]; both either apply fully or leave it untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    username: String,
    category: Category,
    balance: Decimal,
}

impl Account {
    pub fn new(username: impl Into<String>, category: Category) -> Self {
        Self {
            username: username.into(),
            category,
            balance: Decimal::ZERO,
        }
    }

    pub fn name(&self) -> &str {
        &self.username
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Overwrites the balance without validation.
    ///
    /// Only meant for hydrating an account from a stored record: a persisted
    /// value is trusted as is, it is not a transaction.
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<()> {
        Self::ensure_positive(amount)?;

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or_else(|| Error::Overflow {
                username: self.username.clone(),
                amount,
            })?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<()> {
        Self::ensure_positive(amount)?;

        if self.balance < amount {
            return Err(Error::InsufficientFunds {
                username: self.username.clone(),
                balance: self.balance,
                amount,
            });
        }

        self.balance -= amount;
        Ok(())
    }

    fn ensure_positive(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::NonPositiveAmount { amount });
        }
        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}, Balance: ${:.2}",
            self.category,
            self.username,
            to_cents(self.balance)
        )
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn account_with(balance: Decimal) -> Account {
        let mut account = Account::new("alice", Category::Checking);
        account.set_balance(balance);
        account
    }

    #[test]
    fn new_account_starts_empty() {
        let account = Account::new("alice", Category::Savings);
        assert_eq!(account.name(), "alice");
        assert_eq!(account.category(), Category::Savings);
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn non_positive_amounts_are_rejected() {
        for amount in [dec!(0), dec!(-0.01), dec!(-100)] {
            let mut account = account_with(dec!(100));

            assert_eq!(
                account.deposit(amount),
                Err(Error::NonPositiveAmount { amount })
            );
            assert_eq!(
                account.withdraw(amount),
                Err(Error::NonPositiveAmount { amount })
            );
            assert_eq!(account.balance(), dec!(100));
        }
    }

    #[test]
    fn deposit_adds_amount() {
        let mut account = account_with(dec!(10.50));
        account.deposit(dec!(0.25)).unwrap();
        assert_eq!(account.balance(), dec!(10.75));
    }

    #[test]
    fn withdraw_within_balance_subtracts_amount() {
        let mut account = account_with(dec!(10));
        account.withdraw(dec!(3.3)).unwrap();
        assert_eq!(account.balance(), dec!(6.7));
    }

    #[test]
    fn withdraw_above_balance_fails() {
        let mut account = account_with(dec!(10));
        let err = account.withdraw(dec!(10.01)).unwrap_err();

        assert_eq!(
            err,
            Error::InsufficientFunds {
                username: "alice".into(),
                balance: dec!(10),
                amount: dec!(10.01),
            }
        );
        assert_eq!(account.balance(), dec!(10));
    }

    #[test]
    fn overflowing_deposit_leaves_balance() {
        let mut account = account_with(Decimal::MAX);
        assert!(matches!(
            account.deposit(dec!(1)),
            Err(Error::Overflow { .. })
        ));
        assert_eq!(account.balance(), Decimal::MAX);
    }

    #[test]
    fn withdraw_deposit_withdraw_scenario() {
        let mut account = account_with(dec!(100.00));

        assert!(account.withdraw(dec!(150)).is_err());
        assert_eq!(account.balance(), dec!(100.00));

        account.deposit(dec!(50)).unwrap();
        assert_eq!(account.balance(), dec!(150.00));

        account.withdraw(dec!(150)).unwrap();
        assert_eq!(account.balance(), dec!(0.00));
    }

    #[test]
    fn savings_follow_the_same_rules() {
        let mut account = Account::new("bob", Category::Savings);
        account.set_balance(dec!(5));

        assert!(account.withdraw(dec!(6)).is_err());
        account.withdraw(dec!(5)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn display_rounds_to_cents() {
        let mut account = account_with(dec!(12.345));
        assert_eq!(account.to_string(), "Account: alice, Balance: $12.35");

        account = Account::new("bob", Category::Savings);
        assert_eq!(account.to_string(), "Savings Account: bob, Balance: $0.00");
    }
}
