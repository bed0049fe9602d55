use std::fmt;

use rust_decimal::Decimal;

use super::to_cents;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// A successful balance change recorded during a session.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub amount: Decimal,
}

impl Transaction {
    pub fn deposit(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Deposit,
            amount,
        }
    }

    pub fn withdrawal(amount: Decimal) -> Self {
        Self {
            kind: TransactionKind::Withdrawal,
            amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self.kind {
            TransactionKind::Deposit => "Deposited",
            TransactionKind::Withdrawal => "Withdrew",
        };
        write!(f, "{verb}: ${:.2}", to_cents(self.amount))
    }
}
