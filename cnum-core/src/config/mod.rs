//! 配置模块
//!
//! 统一的配置管理，从 ~/.config/cnum/config.toml 加载
//! （可用 CNUM_CONFIG 环境变量指定其他路径）

use crate::error::{CnumError, CnumResult};
use crate::itn::ITNMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 完整配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CnumConfig {
    /// ITN 配置
    pub itn: ItnConfig,
    /// 自然排序配置
    pub sort: SortConfig,
}

/// ITN 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItnConfig {
    /// 转换模式
    pub mode: ITNMode,
    /// 是否记录变更（用于回滚）
    pub record_changes: bool,
}

impl Default for ItnConfig {
    fn default() -> Self {
        Self {
            mode: ITNMode::Auto,
            record_changes: true,
        }
    }
}

/// 自然排序配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// 文字段比较时忽略大小写
    pub ignore_case: bool,
}

impl CnumConfig {
    /// 加载配置文件，文件不存在时使用默认配置
    pub fn load() -> CnumResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("配置文件不存在，使用默认配置: {:?}", config_path);
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// 从指定路径加载
    pub fn load_from(path: &Path) -> CnumResult<Self> {
        if !path.exists() {
            return Err(CnumError::ConfigNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| CnumError::ConfigParse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!("加载配置成功: {:?} (mode={:?})", path, config.itn.mode);
        Ok(config)
    }

    /// 保存配置文件
    pub fn save(&self) -> CnumResult<()> {
        self.save_to(&Self::config_path()?)
    }

    /// 保存到指定路径
    pub fn save_to(&self, path: &Path) -> CnumResult<()> {
        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| CnumError::ConfigSerialize(e.to_string()))?;
        std::fs::write(path, content)?;

        tracing::info!("保存配置成功: {:?}", path);
        Ok(())
    }

    /// 获取配置文件路径
    pub fn config_path() -> CnumResult<PathBuf> {
        if let Ok(path) = std::env::var("CNUM_CONFIG") {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .ok_or_else(|| CnumError::ConfigNotFound("无法获取配置目录".to_string()))?;

        Ok(config_dir.join("cnum").join("config.toml"))
    }
}
