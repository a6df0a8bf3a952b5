use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::Config;

impl Config {
    /// Location of the configuration file below `home`.
    #[must_use]
    pub fn path_in(home: &Path) -> PathBuf {
        home.join(".config").join("ue-difftool").join("config.toml")
    }

    /// Load the configuration from its default location.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_in(dirs::home_dir().as_deref())
    }

    /// Load the configuration below `home`. Without a home directory there is
    /// no config file, so the defaults apply.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load_in(home: Option<&Path>) -> Result<Self> {
        let Some(home) = home else {
            tracing::debug!("no home directory, using default config");
            return Ok(Self::default());
        };
        Self::load_from(&Self::path_in(home))
    }

    /// Load the configuration from `path`, falling back to defaults when the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        Ok(config)
    }

    /// Editor path configured for `engine`, if any.
    #[must_use]
    pub fn editor_path(&self, engine: &str) -> Option<&Path> {
        self.editor.paths.get(engine).map(PathBuf::as_path)
    }
}
