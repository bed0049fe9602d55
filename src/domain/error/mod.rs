use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("amount must be greater than zero, got {amount}")]
    NonPositiveAmount { amount: Decimal },
    #[error("withdrawn amount {amount} exceeds balance {balance} for {username}")]
    InsufficientFunds {
        username: String,
        balance: Decimal,
        amount: Decimal,
    },
    #[error("balance of {username} cannot hold another {amount}")]
    Overflow { username: String, amount: Decimal },
}

pub type Result<T> = std::result::Result<T, Error>;
