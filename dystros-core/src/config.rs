//! User configuration.
//!
//! Settings are read from `~/.config/dystros/config.toml` (optional) and
//! `DYSTROS_*` environment variables, in that order of precedence (lowest
//! first). Nothing is ever written back.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::error::{DystrosError, DystrosResult};

/// Collections root, relative to the home directory
pub const DEFAULT_COLLECTIONS_PATH: &str = ".config/calypso/collections/jelmer";

pub const DEFAULT_KIND: &str = "calendar";

fn default_inputdir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_COLLECTIONS_PATH))
}

fn default_kind() -> String {
    DEFAULT_KIND.to_string()
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DystrosConfig {
    /// Root directory holding one subdirectory per kind
    #[serde(default = "default_inputdir")]
    pub inputdir: Option<PathBuf>,

    /// Comma-separated list of kinds
    #[serde(default = "default_kind")]
    pub kind: String,
}

impl Default for DystrosConfig {
    fn default() -> Self {
        DystrosConfig {
            inputdir: default_inputdir(),
            kind: default_kind(),
        }
    }
}

impl DystrosConfig {
    pub fn config_path() -> DystrosResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DystrosError::Config("Could not determine config directory".into()))?
            .join("dystros");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user's config file. Without a config directory only the
    /// defaults and environment apply.
    pub fn load() -> DystrosResult<Self> {
        match Self::config_path() {
            Ok(path) => Self::load_with(Some(&path)),
            Err(e) => {
                debug!("{e}; using defaults");
                Self::load_with(None)
            }
        }
    }

    /// Load from an explicit file; a missing file just yields the defaults.
    pub fn load_from(path: &Path) -> DystrosResult<Self> {
        Self::load_with(Some(path))
    }

    fn load_with(path: Option<&Path>) -> DystrosResult<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix("DYSTROS"))
            .build()
            .map_err(|e| DystrosError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| DystrosError::Config(e.to_string()))
    }

    /// The configured root as a string, for [`CollectionConfig::from_options`](crate::collection::CollectionConfig::from_options).
    pub fn inputdir_str(&self) -> Option<String> {
        self.inputdir
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
    }
}
