use crate::error::{FlatbedError, Result};
use flatbed_log_common::MoneyFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where job data is stored (default: platform data dir)
    pub data_dir: Option<PathBuf>,
    pub money: MoneyFormat,
    /// Excel sheet / default export file name
    pub export_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            money: MoneyFormat::default(),
            export_title: "Serviços".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FlatbedError::Config("diretório home não encontrado".into()))?;
        Ok(home.join(".config").join("flatbed-log").join("config.json"))
    }

    /// `--data-dir` wins over the configured directory, which wins over
    /// the platform data dir.
    pub fn resolve_data_dir(&self, overridden: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = overridden {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| FlatbedError::Config("diretório de dados não encontrado".into()))?;
        Ok(base.join("flatbed-log"))
    }
}
