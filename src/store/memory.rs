use std::{
    cell::{Cell, RefCell},
    io,
};

use super::{UserStore, Users};
use crate::error::Result;

/// Store keeping the serialized rows in memory.
///
/// Rows go through the same CSV codec as [`super::FileStore`]. Saves can be
/// made to fail to exercise the bank's error paths.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: RefCell<Vec<u8>>,
    saves: Cell<usize>,
    fail_saves: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<Vec<u8>>) -> Self {
        Self {
            contents: RefCell::new(contents.into()),
            ..Self::default()
        }
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.contents.borrow()).into_owned()
    }

    /// Number of successful saves so far.
    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    pub fn fail_saves(&self, fail: bool) {
        self.fail_saves.set(fail);
    }
}

impl UserStore for MemoryStore {
    fn load(&self, users: &mut Users) -> Result<()> {
        crate::csv::read(self.contents.borrow().as_slice(), users)?;
        Ok(())
    }

    fn save(&self, users: &Users) -> Result<()> {
        if self.fail_saves.get() {
            let err = io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only");
            return Err(err.into());
        }

        let mut buf = Vec::new();
        crate::csv::write(users, &mut buf)?;
        *self.contents.borrow_mut() = buf;
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
