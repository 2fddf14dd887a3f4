use std::collections::HashMap;
use std::env;
use std::path::Path;

use crate::models::errors::ConfigError;
use crate::models::log_config::{LogConfig, LOG_DIR_KEY, LOG_FORMAT_KEY, LOG_LEVEL_KEY};

/// 配置服务
///
/// 职责单一: 从 .env 文件与进程环境加载日志配置。
/// 进程环境中已存在的变量优先于 .env 文件。
pub struct ConfigService;

impl ConfigService {
    /// 加载配置
    ///
    /// 查找顺序:
    /// 1. 当前工作目录及其上层目录中的 .env (不存在则跳过)
    /// 2. 进程环境变量
    pub fn load() -> Result<LogConfig, ConfigError> {
        // 此时日志系统尚未初始化,不记录日志
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        LogConfig::from_vars(&Self::collect_vars())
    }

    /// 从指定的 .env 文件加载配置 (命令行 `--env-file`)
    ///
    /// 文件中的值只补充进程环境中缺失的变量,文件不存在时报错
    pub fn load_from_file(path: &Path) -> Result<LogConfig, ConfigError> {
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            vars.insert(key, value);
        }

        // 进程环境优先
        vars.extend(Self::collect_vars());

        LogConfig::from_vars(&vars)
    }

    /// 收集与日志相关的环境变量
    fn collect_vars() -> HashMap<String, String> {
        [LOG_LEVEL_KEY, LOG_FORMAT_KEY, LOG_DIR_KEY]
            .into_iter()
            .filter_map(|key| env::var(key).ok().map(|value| (key.to_string(), value)))
            .collect()
    }
}
