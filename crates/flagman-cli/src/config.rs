//! Optional `flagman.toml` configuration.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::cli::OutputFormat;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "flagman.toml";

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct FlagmanConfig {
    pub compare: CompareConfig,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct CompareConfig {
    /// Ignore patterns applied to every comparison.
    pub ignore: Vec<String>,
    pub output: Option<OutputFormat>,
}

impl FlagmanConfig {
    /// Load the explicit config file, or `flagman.toml` if present, or
    /// defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ignore = config.compare.ignore.len(), "loaded config");
        Ok(config)
    }
}
