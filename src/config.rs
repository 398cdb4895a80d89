//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/recognizers/config.toml` (XDG) or platform config dir
//! 2. Project config: `.recognizers.toml`
//! 3. Environment variables: `RECOGNIZERS_*`
//!
//! Every field has a default, so a missing file is not an error.
//!
//! ```toml
//! [registry]
//! retag = "warn"
//! ```
//!
//! The same setting from the environment: `RECOGNIZERS_REGISTRY_RETAG=warn`.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Project config file name, looked up in the current directory.
pub const PROJECT_CONFIG_FILE: &str = ".recognizers.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "RECOGNIZERS_";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Registry behavior.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct RegistryConfig {
    /// What to do when an already tagged target is tagged again.
    #[serde(default)]
    pub retag: RetagPolicy,
}

/// Handling of re-tagging. The latest name always wins; the policy only
/// controls how loudly that is reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RetagPolicy {
    /// Overwrite and log at debug level.
    #[default]
    Overwrite,
    /// Overwrite and log a warning.
    Warn,
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment(Self::user_config_path(), Path::new(PROJECT_CONFIG_FILE))
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load config from an explicit file, still honoring env overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("_"))
            .extract()
            .map_err(ConfigError::from)
    }

    fn figment(user_config: PathBuf, project_config: &Path) -> Figment {
        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(project_config))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed(ENV_PREFIX).split("_"))
    }

    /// User config path: ~/.config/recognizers/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("recognizers").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        dirs::config_dir()
            .map(|p| p.join("recognizers").join("config.toml"))
            .unwrap_or_default()
    }
}
