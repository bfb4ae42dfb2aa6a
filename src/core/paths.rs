// src/core/paths.rs

use crate::constants::{APP_DIR, COUNTER_FILENAME, RECORDS_FILENAME};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not create config directory at '{path}': {source}")]
    ConfigDirCreation {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Filesystem locations of the persisted store.
///
/// Built once at startup and passed explicitly into every component that
/// touches disk, so there is no ambient global path state anywhere.
#[derive(Debug, Clone)]
pub struct StorePaths {
    base_dir: PathBuf,
}

impl StorePaths {
    /// Resolves the per-user state directory (`<config_dir>/cmdstash`),
    /// creating it if it does not exist yet.
    ///
    /// # Errors
    /// Fails if the system config directory cannot be determined or the
    /// directory cannot be created. This is the only unrecoverable setup
    /// failure in the whole tool.
    pub fn discover() -> Result<Self, PathError> {
        let base_dir = dirs::config_dir()
            .ok_or(PathError::ConfigDirNotFound)?
            .join(APP_DIR);
        Self::at(base_dir)
    }

    /// Builds the paths rooted at an explicit directory, creating it on
    /// demand. Used by `discover` and by tests working in a temp dir.
    pub fn at(base_dir: PathBuf) -> Result<Self, PathError> {
        if !base_dir.exists() {
            fs::create_dir_all(&base_dir).map_err(|e| PathError::ConfigDirCreation {
                path: base_dir.display().to_string(),
                source: e,
            })?;
        }
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// The JSON array of command records.
    pub fn records_file(&self) -> PathBuf {
        self.base_dir.join(RECORDS_FILENAME)
    }

    /// The `{ "nextId": n }` counter document.
    pub fn counter_file(&self) -> PathBuf {
        self.base_dir.join(COUNTER_FILENAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn at_creates_the_directory_on_demand() {
        let root = tempfile::tempdir().unwrap();
        let target = root.path().join("nested").join("state");
        assert!(!target.exists());

        let paths = StorePaths::at(target.clone()).unwrap();

        assert!(target.is_dir());
        assert_eq!(paths.records_file(), target.join(RECORDS_FILENAME));
        assert_eq!(paths.counter_file(), target.join(COUNTER_FILENAME));
    }
}
