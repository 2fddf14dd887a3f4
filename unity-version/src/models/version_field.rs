//! 版本号字段定义
//!
//! 五个逻辑字段及其文本长度上限。固定的位宽让各字段可以无歧义地比较。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 版本号的逻辑字段
///
/// 声明顺序即长度校验顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionField {
    Major,
    Minor,
    Patch,
    Channel,
    Build,
}

impl VersionField {
    /// 按校验顺序排列的全部字段
    pub const CHECK_ORDER: [VersionField; 5] = [
        VersionField::Major,
        VersionField::Minor,
        VersionField::Patch,
        VersionField::Channel,
        VersionField::Build,
    ];

    /// 字段文本的最大长度
    pub fn max_len(self) -> usize {
        match self {
            VersionField::Major => 4,
            VersionField::Minor => 2,
            VersionField::Patch => 2,
            VersionField::Channel => 1,
            VersionField::Build => 3,
        }
    }

    /// 字段名,同时也是正则中的命名捕获组
    pub fn name(self) -> &'static str {
        match self {
            VersionField::Major => "major",
            VersionField::Minor => "minor",
            VersionField::Patch => "patch",
            VersionField::Channel => "channel",
            VersionField::Build => "build",
        }
    }

    /// 是否为可选字段 (渠道与构建号同时出现或同时缺失)
    pub fn is_optional(self) -> bool {
        matches!(self, VersionField::Channel | VersionField::Build)
    }
}

impl fmt::Display for VersionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
