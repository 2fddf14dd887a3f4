//! 版本排序服务
//!
//! 批量解析版本字符串,按渠道成熟度过滤,并从新到旧排序。
//! 单个输入解析失败不会中断整批处理,失败项收集到报告中。

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::errors::VersionError;
use crate::models::release_channel::ReleaseChannel;
use crate::utils::version::VersionIdentifier;
use crate::{log_event, log_rejection};

/// 被拒绝的输入
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedVersion {
    /// 原始输入
    pub input: String,
    /// 解析错误
    pub error: VersionError,
}

/// 排序结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingReport {
    /// 通过过滤的版本,从新到旧,已去重
    pub accepted: Vec<VersionIdentifier>,
    /// 因渠道成熟度不足被过滤的版本数
    pub filtered: usize,
    /// 解析失败的输入,保持输入顺序
    pub rejected: Vec<RejectedVersion>,
}

impl RankingReport {
    /// 最新的版本
    pub fn latest(&self) -> Option<&VersionIdentifier> {
        self.accepted.first()
    }

    pub fn has_rejections(&self) -> bool {
        !self.rejected.is_empty()
    }
}

/// 版本排序器
#[derive(Debug, Clone)]
pub struct VersionRanker {
    min_channel: Option<ReleaseChannel>,
}

impl VersionRanker {
    /// 创建接受所有渠道的排序器
    pub fn new() -> Self {
        Self { min_channel: None }
    }

    /// 只接受成熟度不低于 `min_channel` 的版本
    ///
    /// # 示例
    /// ```
    /// use unity_version::models::ReleaseChannel;
    /// use unity_version::services::VersionRanker;
    ///
    /// let ranker = VersionRanker::new().with_min_channel(ReleaseChannel::Stable);
    /// let report = ranker.rank(&["2022.1.0b3", "2021.3.0f1", "2021.3.1"]);
    ///
    /// assert_eq!(report.latest().unwrap().to_string(), "2021.3.1");
    /// assert_eq!(report.filtered, 1);
    /// ```
    pub fn with_min_channel(mut self, min_channel: ReleaseChannel) -> Self {
        self.min_channel = Some(min_channel);
        self
    }

    pub fn min_channel(&self) -> Option<ReleaseChannel> {
        self.min_channel
    }

    /// 渠道是否通过过滤
    pub fn accepts(&self, version: &VersionIdentifier) -> bool {
        self.min_channel
            .map_or(true, |threshold| version.release_channel().is_at_least(threshold))
    }

    /// 解析、过滤并从新到旧排序
    pub fn rank<S: AsRef<str>>(&self, inputs: &[S]) -> RankingReport {
        let mut report = RankingReport::default();

        for input in inputs {
            let input = input.as_ref();
            match VersionIdentifier::parse(input) {
                Ok(version) if self.accepts(&version) => {
                    debug!(input, version = %version, "版本已接受");
                    report.accepted.push(version);
                }
                Ok(version) => {
                    debug!(
                        input,
                        channel = %version.release_channel(),
                        min_channel = ?self.min_channel,
                        "渠道成熟度不足,已过滤"
                    );
                    report.filtered += 1;
                }
                Err(error) => {
                    let message = error.to_string();
                    log_rejection!("VersionRejected", input = input, error = message.as_str());
                    report.rejected.push(RejectedVersion {
                        input: input.to_string(),
                        error,
                    });
                }
            }
        }

        report.accepted.sort_by(|a, b| b.cmp(a));
        report.accepted.dedup();

        log_event!(
            "VersionsRanked",
            accepted = report.accepted.len(),
            filtered = report.filtered,
            rejected = report.rejected.len()
        );

        report
    }

    /// 最新的版本,没有可接受的版本时返回 `None`
    pub fn latest<S: AsRef<str>>(&self, inputs: &[S]) -> Option<VersionIdentifier> {
        self.rank(inputs).accepted.into_iter().next()
    }

    /// 验证版本是否满足 semver 需求
    ///
    /// 任一侧无法解析时记录警告并返回 `false`
    pub fn check_requirement(current: &str, requirement: &str) -> bool {
        debug!("验证版本要求: {} vs {}", current, requirement);

        let version = match VersionIdentifier::parse(current) {
            Ok(version) => version,
            Err(err) => {
                warn!("无法解析当前版本 '{}': {}", current, err);
                return false;
            }
        };

        match version.matches_requirement(requirement) {
            Ok(matches) => {
                debug!(
                    "版本比较结果: {} {} {} -> {}",
                    current,
                    if matches { "✓" } else { "✗" },
                    requirement,
                    matches
                );
                matches
            }
            Err(err) => {
                warn!("{}", err);
                false
            }
        }
    }
}

impl Default for VersionRanker {
    fn default() -> Self {
        Self::new()
    }
}
