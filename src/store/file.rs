use std::{
    fs::File,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::debug;
use tempfile::NamedTempFile;

use super::{UserStore, Users};
use crate::error::Result;

/// Users persisted as CSV rows in a single file.
///
/// A missing file reads as an empty store. Saves go through a temporary file
/// in the same directory which is then renamed over the target, so readers
/// never observe a half written file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl UserStore for FileStore {
    fn load(&self, users: &mut Users) -> Result<()> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet, starting empty", self.path.display());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        crate::csv::read(file, users)?;
        debug!("loaded {} users from {}", users.len(), self.path.display());
        Ok(())
    }

    fn save(&self, users: &Users) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(self.dir())?;
        crate::csv::write(users, &mut tmp)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|err| err.error)?;

        debug!("saved {} users to {}", users.len(), self.path.display());
        Ok(())
    }
}
