use std::path::{Path, PathBuf};

use crate::{LedgerError, ResultLedger};

/// File name of the ledger inside the data directory.
pub const FILE_NAME: &str = "bud.msg";

/// Environment variable overriding the data directory.
pub const DATA_HOME_ENV: &str = "XDG_DATA_HOME";

/// Where the ledger lives on disk. Resolved once and handed to the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageLocation {
    dir: PathBuf,
}

impl StorageLocation {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Picks the data directory.
    ///
    /// An explicit directory wins, then `$XDG_DATA_HOME`, then the platform
    /// per-user config directory.
    pub fn resolve(explicit: Option<PathBuf>) -> ResultLedger<Self> {
        let data_home = std::env::var_os(DATA_HOME_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve_with(explicit, data_home, dirs::config_dir())
    }

    fn resolve_with(
        explicit: Option<PathBuf>,
        data_home: Option<PathBuf>,
        platform: Option<PathBuf>,
    ) -> ResultLedger<Self> {
        explicit
            .or(data_home)
            .or(platform)
            .map(Self::new)
            .ok_or(LedgerError::NoDataDir)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(FILE_NAME)
    }
}
