use super::{LoggingConfig, NetworkMode};
use bwstat_types::{BwstatError, BwstatResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NodeConfig {
    pub mode: NetworkMode,
    pub logging: LoggingConfig,
}

impl NodeConfig {
    /// Reads the config from `path`, falling back to defaults when the file
    /// does not exist. A file that exists but does not parse is an error.
    pub fn load(path: &Path) -> BwstatResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| BwstatError::Config(format!("read {}: {}", path.display(), e)))?;
        let config: Self = toml::from_str(&raw)
            .map_err(|e| BwstatError::Config(format!("parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> BwstatResult<()> {
        if let Some(ref file) = self.logging.file {
            if file.is_dir() {
                return Err(BwstatError::Config(format!(
                    "log file {} is a directory",
                    file.display()
                )));
            }
        }
        Ok(())
    }

    pub fn is_online(&self) -> bool {
        self.mode == NetworkMode::Online
    }

    pub fn default_path(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }
}
