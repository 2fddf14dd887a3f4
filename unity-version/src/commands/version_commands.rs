//! 版本命令
//!
//! 命令行子命令背后的处理函数,只返回结构化结果,输出由入口负责:
//! - parse_versions: 解析并生成版本报告
//! - sort_versions: 过滤并排序
//! - latest_version: 取最新版本
//! - compare_versions: 三路比较
//! - check_satisfies: semver 需求匹配
//! - execute / exit_status: 子命令分发与退出状态
//! - init_logging: 按加载结果初始化日志系统

use clap::Subcommand;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::{debug, warn};
use tracing_appender::non_blocking::WorkerGuard;

use crate::models::errors::{AppError, ConfigError, VersionError};
use crate::models::log_config::LogConfig;
use crate::models::release_channel::ReleaseChannel;
use crate::services::{RankingReport, VersionRanker};
use crate::utils::version::VersionIdentifier;

/// 单个版本的解析报告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionReport {
    /// 规范形式
    pub version: VersionIdentifier,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build: Option<u32>,
    pub release_channel: ReleaseChannel,
    /// semver 形式
    pub semver: String,
}

impl From<&VersionIdentifier> for VersionReport {
    fn from(version: &VersionIdentifier) -> Self {
        Self {
            version: version.clone(),
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            channel: version.channel(),
            build: version.build(),
            release_channel: version.release_channel(),
            semver: version.to_semver().to_string(),
        }
    }
}

/// 解析结果: 成功为报告,失败为结构化错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ParseOutcome {
    Parsed {
        input: String,
        report: VersionReport,
    },
    Rejected {
        input: String,
        error: VersionError,
    },
}

impl ParseOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed { .. })
    }
}

/// 逐个解析输入,保持输入顺序
pub fn parse_versions<S: AsRef<str>>(inputs: &[S]) -> Vec<ParseOutcome> {
    inputs
        .iter()
        .map(|input| {
            let input = input.as_ref().to_string();
            match VersionIdentifier::parse(&input) {
                Ok(version) => ParseOutcome::Parsed {
                    report: VersionReport::from(&version),
                    input,
                },
                Err(error) => ParseOutcome::Rejected { input, error },
            }
        })
        .collect()
}

/// 过滤并排序,`ascending` 为真时从旧到新
pub fn sort_versions<S: AsRef<str>>(
    inputs: &[S],
    min_channel: Option<ReleaseChannel>,
    ascending: bool,
) -> RankingReport {
    let mut report = ranker_for(min_channel).rank(inputs);
    if ascending {
        report.accepted.reverse();
    }
    report
}

/// 最新版本,没有可接受的版本时返回 `AppError::NoMatchingVersion`
pub fn latest_version<S: AsRef<str>>(
    inputs: &[S],
    min_channel: Option<ReleaseChannel>,
) -> Result<VersionIdentifier, AppError> {
    let latest = ranker_for(min_channel)
        .latest(inputs)
        .ok_or(AppError::NoMatchingVersion)?;

    debug!(version = %latest, "已确定最新版本");
    Ok(latest)
}

/// 三路比较两个版本
pub fn compare_versions(left: &str, right: &str) -> Result<Ordering, VersionError> {
    let left = VersionIdentifier::parse(left)?;
    let right = VersionIdentifier::parse(right)?;
    let ordering = left.compare(&right);

    debug!(left = %left, right = %right, ?ordering, "版本比较完成");
    Ok(ordering)
}

/// 版本是否满足 semver 需求
pub fn check_satisfies(version: &str, requirement: &str) -> Result<bool, VersionError> {
    VersionIdentifier::parse(version)?.matches_requirement(requirement)
}

/// 比较结果的符号形式
pub fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

/// 子命令
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum VersionCommand {
    /// 解析版本号并输出JSON报告
    Parse {
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// 从新到旧排序
    Sort {
        /// 最低渠道成熟度 (alpha, beta, stable, lts)
        #[arg(long)]
        min_channel: Option<ReleaseChannel>,
        /// 从旧到新输出
        #[arg(long)]
        ascending: bool,
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// 输出最新版本
    Latest {
        /// 最低渠道成熟度 (alpha, beta, stable, lts)
        #[arg(long)]
        min_channel: Option<ReleaseChannel>,
        #[arg(required = true)]
        versions: Vec<String>,
    },
    /// 比较两个版本,输出 <、= 或 >
    Compare { left: String, right: String },
    /// 检查版本是否满足 semver 需求
    Satisfies { version: String, requirement: String },
}

/// 子命令的输出
///
/// `success` 为假时以失败状态退出,但输出仍然打印
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// 写入stdout的行
    pub stdout: Vec<String>,
    /// 写入stderr的行
    pub stderr: Vec<String>,
    pub success: bool,
}

impl CommandOutput {
    fn succeeded(stdout: Vec<String>) -> Self {
        Self {
            stdout,
            stderr: Vec::new(),
            success: true,
        }
    }
}

/// 执行子命令
///
/// 退出约定:
/// - parse / sort: 任一输入被拒绝即失败
/// - latest: 没有可接受的版本时返回 `AppError::NoMatchingVersion`
/// - compare / satisfies: 任一侧无法解析时返回错误,satisfies 结果为假时失败
pub fn execute(command: VersionCommand) -> Result<CommandOutput, AppError> {
    match command {
        VersionCommand::Parse { versions } => {
            let outcomes = parse_versions(&versions);
            Ok(CommandOutput {
                stdout: vec![serde_json::to_string_pretty(&outcomes)?],
                stderr: Vec::new(),
                success: outcomes.iter().all(ParseOutcome::is_parsed),
            })
        }
        VersionCommand::Sort {
            min_channel,
            ascending,
            versions,
        } => {
            let report = sort_versions(&versions, min_channel, ascending);
            let stderr = report
                .rejected
                .iter()
                .map(|rejected| {
                    warn!(input = %rejected.input, "已跳过无效版本");
                    rejected.error.to_string()
                })
                .collect();

            Ok(CommandOutput {
                stdout: report.accepted.iter().map(ToString::to_string).collect(),
                stderr,
                success: !report.has_rejections(),
            })
        }
        VersionCommand::Latest {
            min_channel,
            versions,
        } => {
            let latest = latest_version(&versions, min_channel)?;
            Ok(CommandOutput::succeeded(vec![latest.to_string()]))
        }
        VersionCommand::Compare { left, right } => {
            let ordering = compare_versions(&left, &right)?;
            Ok(CommandOutput::succeeded(vec![ordering_symbol(ordering).to_string()]))
        }
        VersionCommand::Satisfies {
            version,
            requirement,
        } => {
            let matches = check_satisfies(&version, &requirement)?;
            Ok(CommandOutput {
                stdout: vec![matches.to_string()],
                stderr: Vec::new(),
                success: matches,
            })
        }
    }
}

/// 进程退出状态: 成功为 0,其余为 1
pub fn exit_status(result: &Result<CommandOutput, AppError>) -> u8 {
    match result {
        Ok(output) if output.success => 0,
        Ok(_) | Err(_) => 1,
    }
}

/// 按配置加载结果初始化日志系统
///
/// 配置无效或订阅器初始化失败都作为 `AppError` 返回,由入口以失败状态退出
pub fn init_logging(
    config: Result<LogConfig, ConfigError>,
) -> Result<Option<WorkerGuard>, AppError> {
    let config = config?;
    let guard = crate::utils::logger::init(&config)?;

    debug!(
        level = %config.level,
        format = ?config.format,
        directory = ?config.directory,
        "日志系统已初始化"
    );
    Ok(guard)
}

fn ranker_for(min_channel: Option<ReleaseChannel>) -> VersionRanker {
    match min_channel {
        Some(channel) => VersionRanker::new().with_min_channel(channel),
        None => VersionRanker::new(),
    }
}
