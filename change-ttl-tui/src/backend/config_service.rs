//! 配置服务

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use change_ttl_core::services::DEFAULT_SYSCTL_ROOT;
use change_ttl_core::InputMode;
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// 应用目录名（配置与日志共用）
pub const APP_DIR: &str = "change-ttl";

/// 应用配置
///
/// 配置文件中缺省的字段使用默认值。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 输入方式：slider / text
    pub input_mode: InputMode,
    pub theme: Theme,
    pub language: String,
    /// sysctl 根目录
    pub sysctl_root: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            input_mode: InputMode::default(),
            theme: Theme::Dark,
            language: "en-US".to_string(),
            sysctl_root: PathBuf::from(DEFAULT_SYSCTL_ROOT),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService: Send + Sync {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;
}

/// 本地配置服务（JSON 文件）
///
/// 存储位置：~/.config/change-ttl/config.json
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// 使用平台默认配置路径
    pub fn new() -> Self {
        Self {
            path: default_config_path(),
        }
    }

    /// 使用指定的配置文件
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let Some(path) = self.path.as_deref() else {
            log::warn!("No config directory available, using defaults");
            return Ok(AppConfig::default());
        };

        if !path.exists() {
            log::debug!("Config file {} not found, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.json"))
}

/// 默认日志文件路径
pub fn default_log_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("change-ttl.log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let svc = LocalConfigService::with_path(dir.path().join("config.json"));

        assert_eq!(svc.load().unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"input_mode": "text", "theme": "light"}"#).unwrap();

        let config = LocalConfigService::with_path(&path).load().unwrap();

        assert_eq!(config.input_mode, InputMode::Text);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.language, "en-US");
        assert_eq!(config.sysctl_root, PathBuf::from("/proc/sys"));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"input_mode": "knob"}"#).unwrap();

        let err = LocalConfigService::with_path(&path).load().unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse config file"));
    }
}
