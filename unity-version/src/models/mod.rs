//! 数据模型模块
//!
//! 包含所有核心数据结构:
//! - errors: 错误类型定义 (解析、配置、日志、应用级错误)
//! - version_field: 版本号字段及长度上限
//! - release_channel: 发布渠道分类与成熟度排名
//! - log_config: 日志配置

pub mod errors;
pub mod log_config;
pub mod release_channel;
pub mod version_field;

// 重导出常用类型,简化外部引用
pub use errors::{AppError, ConfigError, LoggerError, VersionError};
pub use log_config::{LogConfig, LogFormat};
pub use release_channel::ReleaseChannel;
pub use version_field::VersionField;
