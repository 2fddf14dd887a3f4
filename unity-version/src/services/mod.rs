//! 服务层模块
//!
//! - `config_service`: 从 .env 与进程环境加载日志配置
//! - `version_ranker`: 批量解析、渠道过滤与新旧排序

pub mod config_service;
pub mod version_ranker;

pub use config_service::ConfigService;
pub use version_ranker::{RankingReport, RejectedVersion, VersionRanker};
