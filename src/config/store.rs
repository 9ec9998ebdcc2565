use crate::config::configuration::Configuration;
use crate::config::defaults::{CONFIG_FILE_ENV, DEFAULTS, DEFAULT_CONFIG_FILE};
use crate::config::settings::SettingsFile;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Owner of the application's single [`Configuration`].
///
/// Created once at startup from the compiled-in defaults and handed to the
/// components that need it. Every [`ConfigStore::get`] re-reads the settings
/// file and merges it on top of the current state.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    config: Configuration,
    path: PathBuf,
}

impl ConfigStore {
    /// Store built from the compiled-in defaults, reading overrides from
    /// `$HAYRACK_CONFIG` or [`DEFAULT_CONFIG_FILE`]
    #[must_use]
    pub fn new() -> Self {
        let path = std::env::var_os(CONFIG_FILE_ENV)
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from);
        Self::with_path(path)
    }

    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config: Configuration::from_defaults(DEFAULTS),
            path: path.into(),
        }
    }

    /// Settings file used by [`ConfigStore::get`]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge the settings at `path` into the current configuration.
    ///
    /// A missing file leaves the configuration as it is. A malformed file
    /// fails before any section is replaced.
    pub fn load(&mut self, path: &Path) -> Result<&Configuration> {
        let settings = SettingsFile::read(path)?;
        if !settings.is_empty() {
            tracing::debug!("Applying overrides from {}", path.display());
        }
        self.config.load_overrides(&settings)?;
        Ok(&self.config)
    }

    /// Reload the configured settings file and return the configuration
    pub fn get(&mut self) -> Result<&Configuration> {
        let path = self.path.clone();
        self.load(&path)
    }

    /// Current configuration, without reloading
    #[must_use]
    pub const fn configuration(&self) -> &Configuration {
        &self.config
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}
