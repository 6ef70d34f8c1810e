//! Token store file I/O

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::tokens as token_config;
use crate::error::{ReportError, Result};

use super::models::TokenRecord;

/// Handles reading and writing the token record file
pub struct TokenStore {
    path: PathBuf,
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore {
    /// Store at `./tokens.json` when present, else `~/.webex-calling-report/tokens.json`
    pub fn new() -> Self {
        let local = PathBuf::from(token_config::FILE_NAME);
        if local.exists() {
            return Self { path: local };
        }
        Self {
            path: Self::default_path(),
        }
    }

    /// Create a store with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(token_config::DIR_NAME)
            .join(token_config::FILE_NAME)
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the token record; `None` when the file does not exist
    pub fn load(&self) -> Result<Option<TokenRecord>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            ReportError::Config(format!(
                "Failed to read token file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&content).map(Some).map_err(|e| {
            ReportError::Config(format!(
                "Failed to parse token file {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Save the token record (tmp file + rename, 0600 on Unix)
    pub fn save(&self, record: &TokenRecord) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    ReportError::Config(format!(
                        "Failed to create token directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let json = serde_json::to_string_pretty(record)
            .map_err(|e| ReportError::Config(format!("Failed to serialize tokens: {}", e)))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, &json).map_err(|e| {
            ReportError::Config(format!(
                "Failed to write temp token file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = fs::Permissions::from_mode(0o600);
            fs::set_permissions(&tmp_path, permissions).map_err(|e| {
                ReportError::Config(format!("Failed to set permissions on token file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &self.path).map_err(|e| {
            ReportError::Config(format!(
                "Failed to rename temp token file to {}: {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_record() -> TokenRecord {
        TokenRecord {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            expires_at: 1_700_000_000.0,
            expires_in: 1_209_599,
            refresh_token_expires_in: 7_775_999,
        }
    }

    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::with_path(dir.path().join("tokens.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_load_corrupt_json_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tokens.json");
        fs::write(&path, "{not json").unwrap();
        let store = TokenStore::with_path(path);
        let err = store.load().unwrap_err().to_string();
        assert!(err.contains("Failed to parse token file"));
    }

    #[test]
    fn test_save_creates_parent_dir_and_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("tokens.json");
        let store = TokenStore::with_path(path.clone());

        store.save(&sample_record()).unwrap();
        assert!(path.exists());
        assert_eq!(store.load().unwrap(), Some(sample_record()));
    }

    #[cfg(unix)]
    #[test]
    fn test_save_sets_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let store = TokenStore::with_path(dir.path().join("tokens.json"));
        store.save(&sample_record()).unwrap();

        let mode = fs::metadata(store.path()).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o600);
    }

    #[test]
    fn test_default_path() {
        let path = TokenStore::default_path();
        assert!(path.to_string_lossy().contains(token_config::DIR_NAME));
        assert!(path.to_string_lossy().ends_with(token_config::FILE_NAME));
    }
}
