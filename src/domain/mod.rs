use rust_decimal::{Decimal, RoundingStrategy};

pub mod account;
pub mod category;
pub mod error;
pub mod transaction;

/// Rounds `amount` to whole cents for display. Stored values keep their full
/// precision.
pub fn to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
