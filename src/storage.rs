//! Durable slot for the auth token.
//!
//! Read at startup for silent re-authentication, written on login and
//! cleared on logout.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use thiserror::Error;

use crate::config::SecureString;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access token file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A single string key-value slot that survives restarts.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Result<Option<SecureString>, StorageError>;
    fn save(&self, token: &SecureString) -> Result<(), StorageError>;
    fn clear(&self) -> Result<(), StorageError>;
}

/// Token kept in a file, readable only by the owner on Unix.
pub struct FileTokenStorage {
    path: PathBuf,
}

impl FileTokenStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self) -> Result<Option<SecureString>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let token = content.trim();
                Ok((!token.is_empty()).then(|| SecureString::new(token.to_string())))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error(e)),
        }
    }

    fn save(&self, token: &SecureString) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(&self.path).map_err(|e| self.io_error(e))?;

        // `mode` only applies on creation; narrow a file left by an older run.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))
                .map_err(|e| self.io_error(e))?;
        }

        file.write_all(token.expose().as_bytes())
            .map_err(|e| self.io_error(e))?;

        tracing::debug!(path = %self.path.display(), "Token saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

/// In-process slot, for tests and for runs that should not persist.
#[derive(Default)]
pub struct MemoryTokenStorage {
    slot: Mutex<Option<SecureString>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        Self {
            slot: Mutex::new(Some(SecureString::new(token.to_string()))),
        }
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self) -> Result<Option<SecureString>, StorageError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, token: &SecureString) -> Result<(), StorageError> {
        *self.slot.lock() = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        *self.slot.lock() = None;
        Ok(())
    }
}
