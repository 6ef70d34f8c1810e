//! Per-run log file
//!
//! Every run writes `<log-dir>/<stamp>.log`. When the run finishes the file
//! is renamed `clean_<stamp>.log` or `error_<stamp>.log`.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::warn;

use crate::error::{ReportError, Result};

/// Run log file handle
pub struct RunLog {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl RunLog {
    /// Create (or truncate) `<dir>/<stamp>.log`, creating `dir` if missing
    pub fn create(dir: &Path, stamp: &str) -> Result<Self> {
        fs::create_dir_all(dir).map_err(|e| {
            ReportError::Output(format!(
                "Failed to create log directory {}: {}",
                dir.display(),
                e
            ))
        })?;
        let path = dir.join(format!("{}.log", stamp));
        let file = File::create(&path).map_err(|e| {
            ReportError::Output(format!(
                "Failed to create log file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    /// Current path of the log file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line; write failures are logged and otherwise ignored
    pub fn write_line(&self, line: &str) {
        let mut guard = match self.file.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(file) = guard.as_mut() {
            if let Err(e) = writeln!(file, "{}", line) {
                warn!("Failed to write run log {}: {}", self.path.display(), e);
            }
        }
    }

    /// Close the file and rename it with a `clean_` / `error_` prefix
    pub fn finish(&self, had_errors: bool) -> Result<PathBuf> {
        let file = match self.file.lock() {
            Ok(mut guard) => guard.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };
        if let Some(mut file) = file {
            file.flush()?;
        }

        let prefix = if had_errors { "error_" } else { "clean_" };
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let target = self.path.with_file_name(format!("{}{}", prefix, file_name));

        fs::rename(&self.path, &target).map_err(|e| {
            ReportError::Output(format!(
                "Failed to rename log file to {}: {}",
                target.display(),
                e
            ))
        })?;
        Ok(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_makes_directory() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");
        let log = RunLog::create(&log_dir, "01-02-2026_10-00-00").unwrap();
        assert!(log.path().exists());
        assert!(log.path().ends_with("01-02-2026_10-00-00.log"));
    }

    #[test]
    fn test_finish_clean_prefix() {
        let dir = TempDir::new().unwrap();
        let log = RunLog::create(dir.path(), "stamp").unwrap();
        log.write_line("Processing Org: Acme");

        let final_path = log.finish(false).unwrap();
        assert!(final_path.ends_with("clean_stamp.log"));
        let content = fs::read_to_string(&final_path).unwrap();
        assert!(content.contains("Processing Org: Acme"));
        assert!(!dir.path().join("stamp.log").exists());
    }

    #[test]
    fn test_finish_error_prefix() {
        let dir = TempDir::new().unwrap();
        let log = RunLog::create(dir.path(), "stamp").unwrap();
        let final_path = log.finish(true).unwrap();
        assert!(final_path.ends_with("error_stamp.log"));
    }

    #[test]
    fn test_write_after_finish_is_ignored() {
        let dir = TempDir::new().unwrap();
        let log = RunLog::create(dir.path(), "stamp").unwrap();
        let final_path = log.finish(false).unwrap();
        log.write_line("late line");
        let content = fs::read_to_string(final_path).unwrap();
        assert!(!content.contains("late line"));
    }
}
