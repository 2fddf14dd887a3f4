//! 版本比较工具
//!
//! 提供编辑器版本号的完整处理:
//! - 版本字符串解析 (`MAJOR.MINOR.PATCH[渠道字母 构建号]`,如 `2022.1.0f1`)
//! - 发布渠道分类
//! - 版本新旧比较
//! - semver 需求匹配

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::errors::VersionError;
use crate::models::release_channel::ReleaseChannel;
use crate::models::version_field::VersionField;

/// 版本号语法
///
/// 只锚定开头,匹配之后的剩余字符被忽略。
/// 渠道字母与构建号组成一个整体可选组。
static VERSION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)(?:(?P<channel>[A-Za-z])(?P<build>[0-9]+))?",
    )
    .expect("版本号正则表达式无效")
});

/// 版本号
///
/// 解析后不可变。相等性基于数值,`2022.01.0` 与 `2022.1.0` 相等。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionIdentifier {
    major: u32,
    minor: u32,
    patch: u32,
    channel: Option<char>,
    build: Option<u32>,
}

/// 比较键
///
/// 字段声明顺序即比较优先级,派生的 `Ord` 按字典序比较。
/// 最后的 `channel` 只在两个不同的未知渠道字母之间起作用。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComparisonKey {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub channel_rank: u8,
    pub build: Option<u32>,
    pub channel: Option<char>,
}

impl VersionIdentifier {
    /// 从字符串解析版本号 (如 "2022.1.0f1")
    ///
    /// # 错误
    /// - `InvalidSyntax`: 不符合 `major.minor.patch[channel build]` 语法
    /// - `MismatchingLength`: 第一个超过长度上限的字段
    pub fn parse(version_str: &str) -> Result<Self, VersionError> {
        let invalid_syntax = || VersionError::InvalidSyntax {
            input: version_str.to_string(),
        };

        let captures = VERSION_PATTERN
            .captures(version_str)
            .ok_or_else(invalid_syntax)?;

        // 渠道字母后必须紧跟构建号
        if captures.name(VersionField::Channel.name()).is_none() {
            let matched_len = captures.get(0).map_or(0, |m| m.end());
            let dangling_letter = version_str[matched_len..]
                .chars()
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic());
            if dangling_letter {
                return Err(invalid_syntax());
            }
        }

        check_field_lengths(version_str, &captures)?;

        let number = |field: VersionField| -> Result<Option<u32>, VersionError> {
            captures
                .name(field.name())
                .map(|m| m.as_str().parse::<u32>().map_err(|_| invalid_syntax()))
                .transpose()
        };

        let major = number(VersionField::Major)?.ok_or_else(invalid_syntax)?;
        let minor = number(VersionField::Minor)?.ok_or_else(invalid_syntax)?;
        let patch = number(VersionField::Patch)?.ok_or_else(invalid_syntax)?;
        let build = number(VersionField::Build)?;
        let channel = captures
            .name(VersionField::Channel.name())
            .and_then(|m| m.as_str().chars().next());

        Ok(Self {
            major,
            minor,
            patch,
            channel,
            build,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// 渠道字母,稳定版为 `None`
    pub fn channel(&self) -> Option<char> {
        self.channel
    }

    /// 构建号,与渠道字母同时存在
    pub fn build(&self) -> Option<u32> {
        self.build
    }

    /// 发布渠道分类
    pub fn release_channel(&self) -> ReleaseChannel {
        ReleaseChannel::from_letter(self.channel)
    }

    /// 长期支持/最终版 (`f`)
    pub fn is_lts(&self) -> bool {
        self.channel == Some('f')
    }

    /// 稳定版 (无渠道后缀)
    pub fn is_stable(&self) -> bool {
        self.channel.is_none()
    }

    /// 测试版 (`b`)
    pub fn is_beta(&self) -> bool {
        self.channel == Some('b')
    }

    /// 预览版 (`a`)
    pub fn is_alpha(&self) -> bool {
        self.channel == Some('a')
    }

    /// 生成比较键,键越大版本越新
    pub fn comparison_key(&self) -> ComparisonKey {
        ComparisonKey {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            channel_rank: self.release_channel().rank(),
            build: self.build,
            channel: self.channel,
        }
    }

    /// 比较版本大小
    pub fn compare(&self, other: &VersionIdentifier) -> Ordering {
        self.comparison_key().cmp(&other.comparison_key())
    }

    /// 是否满足最低版本要求
    pub fn satisfies(&self, required: &VersionIdentifier) -> bool {
        self.compare(required) != Ordering::Less
    }

    /// 转换为 semver 版本
    ///
    /// alpha/beta 映射为预发布标识 (`a.N`/`b.N`),
    /// LTS 与未知渠道映射为构建元数据 (`f.N`),不影响 semver 优先级。
    pub fn to_semver(&self) -> semver::Version {
        let mut version = semver::Version::new(
            u64::from(self.major),
            u64::from(self.minor),
            u64::from(self.patch),
        );

        if let (Some(letter), Some(build)) = (self.channel, self.build) {
            // 字母加数字总是合法的标识符
            let identifier = format!("{}.{}", letter, build);
            if self.is_alpha() || self.is_beta() {
                version.pre = semver::Prerelease::new(&identifier).unwrap_or_default();
            } else {
                version.build = semver::BuildMetadata::new(&identifier).unwrap_or_default();
            }
        }

        version
    }

    /// 是否满足 semver 需求表达式 (如 ">=2021.3.0")
    ///
    /// 遵循 semver 规则: 预发布版本(alpha/beta)只匹配在同一
    /// `major.minor.patch` 上显式写出预发布标识的需求
    pub fn matches_requirement(&self, requirement: &str) -> Result<bool, VersionError> {
        let version_req = semver::VersionReq::parse(requirement).map_err(|err| {
            VersionError::InvalidRequirement {
                requirement: requirement.to_string(),
                reason: err.to_string(),
            }
        })?;

        Ok(version_req.matches(&self.to_semver()))
    }
}

/// 按固定顺序检查每个参与匹配的字段长度,遇到第一个超限字段即返回
fn check_field_lengths(input: &str, captures: &Captures<'_>) -> Result<(), VersionError> {
    for field in VersionField::CHECK_ORDER {
        let Some(span) = captures.name(field.name()) else {
            // 仅渠道与构建号可以缺席
            debug_assert!(field.is_optional());
            continue;
        };

        let actual = span.as_str().len();
        if actual > field.max_len() {
            return Err(VersionError::MismatchingLength {
                input: input.to_string(),
                field,
                max: field.max_len(),
                actual,
            });
        }
    }

    Ok(())
}

impl PartialOrd for VersionIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// 规范形式,数字不带前导零
impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let (Some(letter), Some(build)) = (self.channel, self.build) {
            write!(f, "{}{}", letter, build)?;
        }
        Ok(())
    }
}

impl FromStr for VersionIdentifier {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for VersionIdentifier {
    type Error = VersionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for VersionIdentifier {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<VersionIdentifier> for String {
    fn from(version: VersionIdentifier) -> Self {
        version.to_string()
    }
}
