//! 发布渠道分类
//!
//! 渠道字母到发布渠道的映射,以及渠道之间的成熟度排序:
//! 未知 < alpha < beta < stable < LTS

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::errors::VersionError;

/// 发布渠道
///
/// 同一补丁级别下,越成熟的渠道越新
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "letter", rename_all = "snake_case")]
pub enum ReleaseChannel {
    /// 长期支持/最终版 (`f`)
    Lts,
    /// 稳定版 (无渠道后缀)
    Stable,
    /// 测试版 (`b`)
    Beta,
    /// 预览版 (`a`)
    Alpha,
    /// 无法识别的渠道字母,成熟度最低
    Unknown(char),
}

impl ReleaseChannel {
    /// 由可选的渠道字母推导渠道
    pub fn from_letter(letter: Option<char>) -> Self {
        match letter {
            None => ReleaseChannel::Stable,
            Some('f') => ReleaseChannel::Lts,
            Some('b') => ReleaseChannel::Beta,
            Some('a') => ReleaseChannel::Alpha,
            Some(other) => ReleaseChannel::Unknown(other),
        }
    }

    /// 渠道对应的字母,稳定版没有字母
    pub fn letter(self) -> Option<char> {
        match self {
            ReleaseChannel::Lts => Some('f'),
            ReleaseChannel::Stable => None,
            ReleaseChannel::Beta => Some('b'),
            ReleaseChannel::Alpha => Some('a'),
            ReleaseChannel::Unknown(letter) => Some(letter),
        }
    }

    /// 成熟度排名,数值越大越成熟
    pub fn rank(self) -> u8 {
        match self {
            ReleaseChannel::Unknown(_) => 0,
            ReleaseChannel::Alpha => 1,
            ReleaseChannel::Beta => 2,
            ReleaseChannel::Stable => 3,
            ReleaseChannel::Lts => 4,
        }
    }

    /// 是否至少与 `threshold` 一样成熟
    pub fn is_at_least(self, threshold: ReleaseChannel) -> bool {
        self.rank() >= threshold.rank()
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseChannel::Lts => write!(f, "lts"),
            ReleaseChannel::Stable => write!(f, "stable"),
            ReleaseChannel::Beta => write!(f, "beta"),
            ReleaseChannel::Alpha => write!(f, "alpha"),
            ReleaseChannel::Unknown(letter) => write!(f, "unknown({})", letter),
        }
    }
}

/// 按名称解析渠道,用于命令行参数
///
/// 接受 `lts`/`f`、`stable`、`beta`/`b`、`alpha`/`a`,大小写不敏感
impl FromStr for ReleaseChannel {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lts" | "f" | "final" => Ok(ReleaseChannel::Lts),
            "stable" => Ok(ReleaseChannel::Stable),
            "beta" | "b" => Ok(ReleaseChannel::Beta),
            "alpha" | "a" => Ok(ReleaseChannel::Alpha),
            _ => Err(VersionError::UnknownChannel {
                name: s.to_string(),
            }),
        }
    }
}
