use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::{domain::category::Category, error::Result};

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// What is persisted for each user between sessions.
///
/// Passwords are kept in plaintext, matching the store files this crate reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub password: String,
    pub category: Category,
    pub balance: Decimal,
}

/// Users keyed by username.
pub type Users = HashMap<String, UserRecord>;

/// Load/save capability the bank talks to.
///
/// Implementations always persist the complete mapping; there is no
/// incremental write.
pub trait UserStore {
    /// Load persisted users into `users`.
    ///
    /// On error, whatever was read before the failure stays in `users`.
    fn load(&self, users: &mut Users) -> Result<()>;

    /// Replace the persisted users with `users`.
    fn save(&self, users: &Users) -> Result<()>;
}
