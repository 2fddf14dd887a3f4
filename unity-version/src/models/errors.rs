use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::version_field::VersionField;

/// 版本号解析相关错误
///
/// 仅在解析阶段产生,每个变体都携带原始输入,便于调用方定位问题。
/// 分类与比较操作作用于已合法构造的值,不会失败。
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum VersionError {
    /// 语法无效
    ///
    /// 可能原因:
    /// - 缺少 `major.minor.patch` 中的分隔符或数字段
    /// - 渠道字母之后缺少构建号
    #[error("版本号语法无效: '{input}'")]
    InvalidSyntax { input: String },

    /// 字段长度超限
    ///
    /// 语法匹配成功,但某个字段的文本长度超过上限。
    /// 只报告检查顺序(major→minor→patch→channel→build)中第一个超限的字段。
    #[error("版本号 '{input}' 的字段 {field} 长度为 {actual},超过上限 {max}")]
    MismatchingLength {
        input: String,
        field: VersionField,
        max: usize,
        actual: usize,
    },

    /// 版本需求无效
    ///
    /// semver 需求表达式无法解析 (如 ">=abc")
    #[error("无效的版本需求 '{requirement}': {reason}")]
    InvalidRequirement { requirement: String, reason: String },

    /// 渠道名称无法识别
    ///
    /// 按名称选择渠道时 (如 `--min-channel nightly`) 不在已知渠道之列
    #[error("无法识别的发布渠道: '{name}' (可选: alpha, beta, stable, lts)")]
    UnknownChannel { name: String },
}

impl VersionError {
    /// 触发错误的原始输入
    pub fn input(&self) -> &str {
        match self {
            VersionError::InvalidSyntax { input } => input,
            VersionError::MismatchingLength { input, .. } => input,
            VersionError::InvalidRequirement { requirement, .. } => requirement,
            VersionError::UnknownChannel { name } => name,
        }
    }
}

/// 配置加载相关错误
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ConfigError {
    /// 环境变量取值无效
    #[error("配置项 {key} 的取值无效: '{value}'")]
    InvalidValue { key: String, value: String },

    /// .env 文件读取失败
    #[error(".env 文件加载失败: {0}")]
    EnvFileFailed(String),
}

impl From<dotenvy::Error> for ConfigError {
    fn from(err: dotenvy::Error) -> Self {
        ConfigError::EnvFileFailed(err.to_string())
    }
}

/// 日志系统初始化错误
#[derive(Debug, Error)]
pub enum LoggerError {
    /// 日志目录无法创建
    #[error("无法创建日志目录: {0}")]
    Io(#[from] std::io::Error),

    /// 全局订阅器已被设置或构建失败
    #[error("日志订阅器初始化失败: {0}")]
    Subscriber(String),

    /// 日志级别表达式无效
    #[error("无效的日志级别: {0}")]
    InvalidFilter(String),
}

/// 应用级错误
///
/// 命令行入口汇总所有下层错误,统一记录并转换为退出码
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Version(#[from] VersionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Logger(#[from] LoggerError),

    /// 输出序列化失败
    #[error("JSON序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 没有满足条件的版本
    #[error("没有满足条件的版本")]
    NoMatchingVersion,
}
