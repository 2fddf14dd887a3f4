use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::models::errors::ConfigError;

pub const LOG_LEVEL_KEY: &str = "UNITY_VERSION_LOG_LEVEL";
pub const LOG_FORMAT_KEY: &str = "UNITY_VERSION_LOG_FORMAT";
pub const LOG_DIR_KEY: &str = "UNITY_VERSION_LOG_DIR";

/// 控制台日志格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// 人类可读格式,便于开发调试
    #[default]
    Pretty,
    /// JSON格式,便于机器解析
    Json,
}

/// 日志配置
///
/// 每个字段对应一个环境变量,未设置时取默认值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// 默认日志级别 (`RUST_LOG` 优先)
    ///
    /// 默认: "info"
    pub level: String,

    /// 控制台输出格式
    pub format: LogFormat,

    /// 日志文件目录 (可选)
    ///
    /// 设置后按天轮转写入JSON日志文件
    pub directory: Option<PathBuf>,
}

impl LogConfig {
    /// 从变量表构建配置
    ///
    /// 空字符串视为未设置
    ///
    /// # 示例
    /// ```
    /// use std::collections::HashMap;
    /// use unity_version::models::{LogConfig, LogFormat};
    ///
    /// let mut vars = HashMap::new();
    /// vars.insert("UNITY_VERSION_LOG_FORMAT".to_string(), "json".to_string());
    ///
    /// let config = LogConfig::from_vars(&vars).unwrap();
    /// assert_eq!(config.format, LogFormat::Json);
    /// assert_eq!(config.level, "info");
    /// ```
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let lookup = |key: &str| {
            vars.get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
        };

        let format = match lookup(LOG_FORMAT_KEY) {
            None => LogFormat::default(),
            Some(value) => match value.to_ascii_lowercase().as_str() {
                "pretty" | "text" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: LOG_FORMAT_KEY.to_string(),
                        value: value.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            level: lookup(LOG_LEVEL_KEY).unwrap_or("info").to_string(),
            format,
            directory: lookup(LOG_DIR_KEY).map(PathBuf::from),
        })
    }
}

impl Default for LogConfig {
    /// 默认配置: info级别, 人类可读格式, 不写文件
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
            directory: None,
        }
    }
}
