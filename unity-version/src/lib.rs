//! 编辑器版本号处理库
//!
//! 解析 `MAJOR.MINOR.PATCH[渠道字母 构建号]` 形式的版本号 (如 `2022.1.0f1`),
//! 将其归入发布渠道 (LTS / stable / beta / alpha),并定义全序用于比较新旧。
//!
//! # 使用示例
//!
//! ```
//! use unity_version::VersionIdentifier;
//!
//! let lts = VersionIdentifier::parse("2022.2.1f1").unwrap();
//! let beta = VersionIdentifier::parse("2022.2.1b1").unwrap();
//!
//! assert!(lts.is_lts());
//! assert!(lts > beta);
//! ```

pub mod commands;
pub mod models;
pub mod services;
pub mod utils;

pub use models::{ReleaseChannel, VersionError, VersionField};
pub use utils::version::{ComparisonKey, VersionIdentifier};
