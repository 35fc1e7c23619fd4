use crate::error::{PortalError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use welfare_portal_common::PortalSettings;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// ストアファイルの置き場所（未指定ならユーザーのデータディレクトリ）
    pub data_dir: Option<PathBuf>,
    pub submit_delay_ms: u64,
    pub redirect_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        let settings = PortalSettings::default();
        Self {
            data_dir: None,
            submit_delay_ms: settings.submit_delay.as_millis() as u64,
            redirect_delay_ms: settings.redirect_delay.as_millis() as u64,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .ok_or_else(|| PortalError::Config("設定ディレクトリが見つかりません".into()))?;
        Ok(dir.join("welfare-portal").join("config.json"))
    }

    /// ストアを置くディレクトリ（コマンドライン指定 > 設定ファイル > 既定）
    pub fn resolve_data_dir(&self, override_dir: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir.to_path_buf());
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let base = dirs::data_dir()
            .ok_or_else(|| PortalError::Config("データディレクトリが見つかりません".into()))?;
        Ok(base.join("welfare-portal"))
    }

    pub fn settings(&self) -> PortalSettings {
        PortalSettings {
            submit_delay: Duration::from_millis(self.submit_delay_ms),
            redirect_delay: Duration::from_millis(self.redirect_delay_ms),
        }
    }
}
