//! File-backed record store
//!
//! One JSON file per account under a root directory:
//!
//! ```text
//! accounts/
//!   alice.json   {"balance":70}
//!   bob.json     {"balance":0}
//! ```
//!
//! # Crash Safety
//!
//! Records are written to a temporary file in the root directory and then
//! renamed over the target, so a reader never sees a half-written record.
//! The temporary file is created with mode `0o666` filtered by the process
//! umask, the same as a plainly created file.
//!
//! # Concurrency
//!
//! There is no locking. Two processes working on the same directory can lose
//! each other's updates; only single-process use is supported.

use crate::core::traits::{Lookup, RecordStore};
use crate::io::record_format::{decode_record, encode_record};
use crate::types::{Account, LedgerError};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, warn};

/// Default directory holding account records
pub const DEFAULT_ROOT: &str = "accounts";

/// Extension of every record file
const RECORD_EXTENSION: &str = "json";

/// Mode requested for record files, before the umask is applied
#[cfg(unix)]
const RECORD_MODE: u32 = 0o666;

/// Record store writing one JSON file per account
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Directory holding the record files
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`
    ///
    /// Nothing is touched on disk until [`RecordStore::ensure_root`] or
    /// [`RecordStore::save`] is called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    /// The directory holding the record files
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the record file for `name`
    ///
    /// # Errors
    ///
    /// Returns `InvalidStorageKey` if the name cannot be a plain file name
    /// inside the root: empty, `.` or `..`, or containing a path separator
    /// or a NUL byte.
    pub fn record_path(&self, name: &str) -> Result<PathBuf, LedgerError> {
        let unusable = name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0']);

        if unusable {
            return Err(LedgerError::invalid_storage_key(name));
        }

        Ok(self
            .root
            .join(format!("{}.{}", name, RECORD_EXTENSION)))
    }

    fn staging_file(&self) -> std::io::Result<NamedTempFile> {
        let mut builder = Builder::new();
        builder.prefix(".staging-");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(RECORD_MODE));
        }

        builder.tempfile_in(&self.root)
    }
}

impl RecordStore for FileStore {
    fn ensure_root(&self) -> Result<(), LedgerError> {
        fs::create_dir_all(&self.root)?;
        debug!(root = %self.root.display(), "storage root ready");
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.record_path(name)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    fn load(&self, name: &str) -> Lookup {
        let Ok(path) = self.record_path(name) else {
            return Lookup::NotFound;
        };

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Lookup::NotFound,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "account record unreadable");
                return Lookup::Corrupt {
                    reason: e.to_string(),
                };
            }
        };

        match decode_record(name, &text) {
            Ok(account) => {
                debug!(path = %path.display(), balance = %account.balance, "account record loaded");
                Lookup::Found(account)
            }
            Err(reason) => {
                warn!(path = %path.display(), %reason, "account record corrupt");
                Lookup::Corrupt { reason }
            }
        }
    }

    fn save(&mut self, account: &Account) -> Result<(), LedgerError> {
        let path = self.record_path(&account.name)?;
        let text = encode_record(account)?;

        let mut staging = self.staging_file()?;
        staging.write_all(text.as_bytes())?;
        staging.as_file().sync_all()?;
        staging.persist(&path).map_err(|e| LedgerError::from(e.error))?;

        debug!(path = %path.display(), balance = %account.balance, "account record written");
        Ok(())
    }
}
