//! 徽章展示相关枚举类型定义
//!
//! 所有枚举都支持 JSON（serde）序列化，取值与上游平台保持一致

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 徽章作用域
///
/// 决定徽章图片等资源从站点上下文还是课程上下文解析
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeScope {
    /// 站点级徽章
    #[default]
    Site,
    /// 课程级徽章
    Course,
}

/// 获取条件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriteriaType {
    /// 总体条件，只承载其余条件的聚合方式
    Overall,
    Activity,
    Manual,
    Social,
    Course,
    Courseset,
    Profile,
    Badge,
    Cohort,
    Competency,
}

impl CriteriaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overall => "overall",
            Self::Activity => "activity",
            Self::Manual => "manual",
            Self::Social => "social",
            Self::Course => "course",
            Self::Courseset => "courseset",
            Self::Profile => "profile",
            Self::Badge => "badge",
            Self::Cohort => "cohort",
            Self::Competency => "competency",
        }
    }

    pub fn is_overall(&self) -> bool {
        matches!(self, Self::Overall)
    }
}

impl fmt::Display for CriteriaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 条件聚合方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationMethod {
    /// 全部满足（AND）
    #[default]
    All,
    /// 任一满足（OR）
    Any,
}

impl AggregationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Any => "any",
        }
    }

    /// 展示用的大写名称，如 "ALL"
    pub fn display_name(&self) -> String {
        self.as_str().to_uppercase()
    }
}

/// Open Badges 背包 API 版本
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpenBadgesVersion {
    #[serde(rename = "v1")]
    V1,
    #[default]
    #[serde(rename = "v2")]
    V2,
    #[serde(rename = "v2p1")]
    V2p1,
}

impl FromStr for OpenBadgesVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" | "1.0" => Ok(Self::V1),
            "v2" | "2" | "2.0" => Ok(Self::V2),
            "v2p1" | "2.1" => Ok(Self::V2p1),
            other => Err(format!("unknown Open Badges API version: {other}")),
        }
    }
}

/// 背包配置
///
/// 由 BackpackProvider 提供，渲染期间只读
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackpackConfig {
    /// 是否允许关联外部背包
    pub allow_external: bool,
    /// 当前启用的 API 版本
    pub api_version: OpenBadgesVersion,
}
