use std::io;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::models::errors::LoggerError;
use crate::models::log_config::{LogConfig, LogFormat};

/// 日志文件名前缀
///
/// 文件命名格式: unity-version.2025-10-05
const LOG_FILE_PREFIX: &str = "unity-version";

/// 初始化日志系统
///
/// 配置结构化日志输出:
/// - 控制台: 输出到stderr,stdout 留给命令结果
/// - 格式: 由 `LogConfig::format` 决定 (人类可读 / JSON)
/// - 文件: 配置了目录时按天轮转写入JSON,经 non_blocking 写入器
/// - 环境变量控制: RUST_LOG=debug 覆盖配置中的级别
///
/// # 返回
///
/// 写入日志文件时返回 guard,调用者必须保存直到退出,
/// guard 被drop后文件写入器随之关闭。
///
/// # 错误
///
/// 全局订阅器只能设置一次,重复初始化返回 `LoggerError::Subscriber`。
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>, LoggerError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)
            .map_err(|err| LoggerError::InvalidFilter(err.to_string()))?,
    };

    let (json_console, pretty_console) = match config.format {
        LogFormat::Json => (
            Some(
                fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_target(true),
            ),
            None,
        ),
        LogFormat::Pretty => (
            None,
            Some(
                fmt::layer()
                    .with_writer(io::stderr)
                    .with_target(true)
                    .with_level(true)
                    .with_ansi(true),
            ),
        ),
    };

    let (file_layer, guard) = match &config.directory {
        Some(log_dir) => {
            std::fs::create_dir_all(log_dir)?;

            let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let layer = fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .with_file(false)
                .with_line_number(false);

            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_console)
        .with(pretty_console)
        .with(file_layer)
        .try_init()
        .map_err(|err| LoggerError::Subscriber(err.to_string()))?;

    Ok(guard)
}

/// 日志宏辅助模块
///
/// 提供结构化日志的便捷宏
pub mod macros {
    /// 记录业务事件 (debug级别)
    ///
    /// 使用示例:
    /// ```no_run
    /// use unity_version::log_event;
    /// log_event!(
    ///     "VersionsRanked",
    ///     accepted = 3,
    ///     rejected = 1
    /// );
    /// ```
    #[macro_export]
    macro_rules! log_event {
        ($event_type:expr, $($field:tt = $value:expr),* $(,)?) => {
            tracing::debug!(
                event_type = $event_type,
                $($field = $value),*
            );
        };
    }

    /// 记录拒绝事件
    ///
    /// 使用示例:
    /// ```no_run
    /// use unity_version::log_rejection;
    /// log_rejection!(
    ///     "VersionRejected",
    ///     input = "2022",
    ///     error = "版本号语法无效"
    /// );
    /// ```
    #[macro_export]
    macro_rules! log_rejection {
        ($event_type:expr, $($field:tt = $value:expr),* $(,)?) => {
            tracing::warn!(
                event_type = $event_type,
                $($field = $value),*
            );
        };
    }
}
