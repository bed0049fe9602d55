//! Single-user bank accounts kept in a flat CSV file.
//!
//! [`bank::Bank`] owns the users loaded from a [`store::UserStore`] and the
//! session of whoever is logged in. Balances change only through deposits
//! and withdrawals on [`domain::account::Account`], and every change is
//! written back to the store right away.

pub mod bank;
pub mod cli;
pub mod csv;
pub mod domain;
pub mod error;
pub mod store;
