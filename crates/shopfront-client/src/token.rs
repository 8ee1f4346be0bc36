//! # Token Store
//!
//! File-backed persistence for the bearer token: a single string under a
//! fixed file name, read by an explicit initialization step, written on
//! every token change, removed on logout.
//!
//! ## Platform Paths
//! With no explicit path configured, the token lives in the platform
//! data directory:
//! - **macOS**: `~/Library/Application Support/com.shopfront.client/token`
//! - **Windows**: `%APPDATA%\shopfront\client\data\token`
//! - **Linux**: `~/.local/share/shopfront-client/token`

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Fixed file name for the persisted token.
pub const TOKEN_FILE_NAME: &str = "token";

/// Persisted bearer token storage.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Creates a store at an explicit file path.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        TokenStore { path: path.into() }
    }

    /// Creates a store in the platform data directory.
    ///
    /// ## Errors
    /// Returns an error if the data directory cannot be determined or
    /// created.
    pub fn in_data_dir() -> ClientResult<Self> {
        let proj_dirs = ProjectDirs::from("com", "shopfront", "client").ok_or_else(|| {
            ClientError::InvalidConfig("could not determine app data directory".to_string())
        })?;

        let data_dir = proj_dirs.data_dir();
        fs::create_dir_all(data_dir)?;

        Ok(TokenStore {
            path: data_dir.join(TOKEN_FILE_NAME),
        })
    }

    /// Reads the persisted token.
    ///
    /// Returns `None` when no token has been persisted. A missing file is
    /// the normal anonymous case, not an error.
    pub fn load(&self) -> ClientResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim().to_string();
                if token.is_empty() {
                    Ok(None)
                } else {
                    debug!(path = %self.path.display(), "Loaded persisted token");
                    Ok(Some(token))
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Writes the token, replacing any previous value.
    pub fn save(&self, token: &str) -> ClientResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        debug!(path = %self.path.display(), "Persisted token");
        Ok(())
    }

    /// Removes the persisted token. A missing file is not an error.
    pub fn clear(&self) -> ClientResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Removed persisted token");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}
