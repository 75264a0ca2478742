//! 配置模块
//!
//! 从 ~/.config/rmbconvert/config.toml 加载

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RmbError, RmbResult};
use crate::tables::AlphabetTables;

/// 编码输出使用的写法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputScript {
    /// 大写（壹贰叁）
    #[default]
    Formal,
    /// 小写（一二三）
    Simplified,
}

/// 输出配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// 默认输出写法
    #[serde(default)]
    pub script: OutputScript,

    /// 整数金额是否追加 "整"
    #[serde(default = "default_whole_marker")]
    pub whole_marker: bool,
}

fn default_whole_marker() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            script: OutputScript::default(),
            whole_marker: default_whole_marker(),
        }
    }
}

/// rmbconvert 完整配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RmbConfig {
    /// 自定义字符表文件（TOML），未设置时使用内置表
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tables: Option<PathBuf>,

    /// 输出配置
    #[serde(default)]
    pub output: OutputConfig,
}

impl RmbConfig {
    /// 加载默认路径的配置文件，不存在时使用默认配置
    pub fn load() -> RmbResult<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(path) => {
                tracing::info!("配置文件不存在，使用默认配置: {:?}", path);
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// 加载指定路径的配置文件
    pub fn load_from(path: &Path) -> RmbResult<Self> {
        if !path.exists() {
            return Err(RmbError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| RmbError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("📋 加载配置成功: {:?}", path);
        tracing::debug!(
            "输出配置: script={:?}, whole_marker={}",
            config.output.script,
            config.output.whole_marker
        );
        Ok(config)
    }

    /// 保存到默认路径
    pub fn save(&self) -> RmbResult<()> {
        let path = Self::config_path()
            .ok_or_else(|| RmbError::ConfigNotFound("config directory".to_string()))?;
        self.save_to(&path)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> RmbResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| RmbError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 配置文件路径
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rmbconvert").join("config.toml"))
    }

    /// 配置中指定的字符表，未指定时为内置表
    pub fn resolve_tables(&self) -> RmbResult<AlphabetTables> {
        match &self.tables {
            Some(path) => AlphabetTables::load(path),
            None => Ok(AlphabetTables::builtin().clone()),
        }
    }
}
