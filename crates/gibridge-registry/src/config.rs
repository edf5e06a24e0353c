//! Repository configuration.

use std::env;
use std::ffi::OsStr;
use std::path::PathBuf;

/// Environment variable holding extra typelib search directories, separated
/// like `PATH`.
pub const TYPELIB_PATH_ENV: &str = "GIBRIDGE_TYPELIB_PATH";

/// Directories searched when loading a namespace without a private directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryConfig {
    pub search_path: Vec<PathBuf>,
}

impl RepositoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration read from [`TYPELIB_PATH_ENV`].
    pub fn from_env() -> Self {
        match env::var_os(TYPELIB_PATH_ENV) {
            Some(value) => Self::from_path_list(&value),
            None => Self::default(),
        }
    }

    /// Parse a platform path list. Empty components are skipped.
    pub fn from_path_list(value: &OsStr) -> Self {
        Self {
            search_path: env::split_paths(value)
                .filter(|path| !path.as_os_str().is_empty())
                .collect(),
        }
    }

    /// Append a search directory.
    pub fn with_search_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.search_path.push(dir.into());
        self
    }
}
