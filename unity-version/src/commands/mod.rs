/// 命令模块
///
/// 包含所有命令行可调用的处理函数:
/// - version_commands: 版本解析、排序、比较与需求匹配

pub mod version_commands;

pub use version_commands::*;
