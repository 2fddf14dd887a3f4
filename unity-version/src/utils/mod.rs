//! 工具模块
//!
//! - version: 版本号解析、分类与比较
//! - logger: 日志系统初始化

pub mod logger;
pub mod version;

pub use version::{ComparisonKey, VersionIdentifier};
