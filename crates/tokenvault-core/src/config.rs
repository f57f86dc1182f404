//! Fixed locations and constants
//!
//! TokenVault reads no config files or environment variables. Everything it
//! needs to know about where it lives is defined here.

use crate::error::{Result, VaultError};
use std::path::{Path, PathBuf};

/// Port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 9999;

/// Hidden directory under the user's home holding the database.
pub const DATA_DIR_NAME: &str = ".tokenvault";

/// SQLite database file name.
pub const DB_FILE_NAME: &str = "token.db";

/// File written by `setup-postman` into the working directory.
pub const SCRIPT_FILE_NAME: &str = "tokenvault_script.js";

/// Address the server binds to. Local only.
pub fn bind_address() -> String {
    format!("127.0.0.1:{}", DEFAULT_PORT)
}

/// URL prefix clients use to fetch a project's token.
pub fn fetch_url_prefix() -> String {
    format!("http://localhost:{}/fetch/", DEFAULT_PORT)
}

/// Resolved storage locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultPaths {
    data_dir: PathBuf,
}

impl VaultPaths {
    /// Per-user location (`~/.tokenvault`)
    pub fn from_home() -> Result<Self> {
        let home = dirs::home_dir().ok_or(VaultError::HomeDirNotFound)?;
        Ok(Self::with_root(home))
    }

    /// Locations rooted under an explicit directory instead of `$HOME`.
    pub fn with_root(root: impl AsRef<Path>) -> Self {
        Self {
            data_dir: root.as_ref().join(DATA_DIR_NAME),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_under_root() {
        let temp_dir = tempfile::tempdir().unwrap();
        let paths = VaultPaths::with_root(temp_dir.path());

        assert_eq!(paths.data_dir(), temp_dir.path().join(".tokenvault"));
        assert_eq!(
            paths.database_path(),
            temp_dir.path().join(".tokenvault").join("token.db")
        );
    }

    #[test]
    fn test_fixed_addresses() {
        assert_eq!(bind_address(), "127.0.0.1:9999");
        assert_eq!(fetch_url_prefix(), "http://localhost:9999/fetch/");
    }
}
