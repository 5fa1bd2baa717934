use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::debug;

/// A directory of files addressed by name. Presence of a file is the only
/// hit signal; nothing ever expires.
#[derive(Debug)]
pub struct Cache {
    root: PathBuf,
}

impl Cache {
    /// Opens the cache at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.path(name).is_file()
    }

    /// Contents of `name`, or `None` when it has not been cached yet.
    pub fn get(&self, name: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path(name)) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Stores `contents` under `name` unless an entry already exists.
    ///
    /// The bytes go to a temporary file next to the target first and are
    /// linked into place only when complete, so readers never see a partial
    /// entry. Returns `false` when another writer got there first.
    pub fn insert(&self, name: &str, contents: &[u8]) -> io::Result<bool> {
        let mut file = NamedTempFile::new_in(&self.root)?;
        file.write_all(contents)?;
        file.as_file().sync_all()?;

        match file.persist_noclobber(self.path(name)) {
            Ok(_) => {
                debug!(name, bytes = contents.len(), "cached");
                Ok(true)
            }
            Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
                debug!(name, "already cached");
                Ok(false)
            }
            Err(err) => Err(err.error),
        }
    }
}
