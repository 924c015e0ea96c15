//! 徽章定义相关实体
//!
//! 这些实体由上游平台按请求组装后传入，渲染层只读不写

use serde::{Deserialize, Serialize};

use super::enums::{AggregationMethod, BadgeScope, CriteriaType};

/// 图片作者信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAuthor {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

/// 徽章获取条件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeCriterion {
    pub id: i64,
    pub criteria_type: CriteriaType,
    /// 该类型下多个参数之间的聚合方式
    #[serde(default)]
    pub aggregation: AggregationMethod,
    /// 参数个数，决定使用单参数还是聚合措辞
    #[serde(default)]
    pub param_count: usize,
    /// 条件明细（上游已格式化的 HTML 片段）
    #[serde(default)]
    pub details: String,
    /// 条件说明（上游已格式化的 HTML 片段）
    #[serde(default)]
    pub description: Option<String>,
}

impl BadgeCriterion {
    pub fn is_single_param(&self) -> bool {
        self.param_count == 1
    }
}

/// 背书信息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endorsement {
    pub issuer_name: String,
    #[serde(default)]
    pub issuer_url: Option<String>,
    #[serde(default)]
    pub issuer_email: Option<String>,
    /// 背书日期（epoch 秒）
    #[serde(default)]
    pub date_issued: Option<i64>,
    #[serde(default)]
    pub claim_id: Option<String>,
    #[serde(default)]
    pub claim_comment: Option<String>,
}

/// 相关徽章
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedBadge {
    pub id: i64,
    pub name: String,
}

/// 能力框架对齐项
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alignment {
    pub id: i64,
    pub target_name: String,
    #[serde(default)]
    pub target_url: Option<String>,
}

/// 徽章定义
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: Option<String>,
    /// 徽章语言代码，如 "en"
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub image_author: ImageAuthor,
    #[serde(default)]
    pub image_caption: Option<String>,
    #[serde(default)]
    pub issuer_name: String,
    #[serde(default)]
    pub issuer_contact: Option<String>,
    #[serde(default)]
    pub scope: BadgeScope,
    #[serde(default)]
    pub course_id: Option<i64>,
    /// 徽章文件所在的上下文 ID，由仓储提供
    #[serde(default)]
    pub context_id: Option<i64>,
    #[serde(default)]
    pub criteria: Vec<BadgeCriterion>,
    #[serde(default)]
    pub endorsement: Option<Endorsement>,
    #[serde(default)]
    pub related: Vec<RelatedBadge>,
    #[serde(default)]
    pub alignments: Vec<Alignment>,
}

impl Badge {
    /// 创建只有名称的徽章，其余属性取空值
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            version: None,
            language: None,
            image_author: ImageAuthor::default(),
            image_caption: None,
            issuer_name: String::new(),
            issuer_contact: None,
            scope: BadgeScope::Site,
            course_id: None,
            context_id: None,
            criteria: Vec::new(),
            endorsement: None,
            related: Vec::new(),
            alignments: Vec::new(),
        }
    }

    pub fn overall_criterion(&self) -> Option<&BadgeCriterion> {
        self.criteria
            .iter()
            .find(|c| c.criteria_type.is_overall())
    }

    /// 除总体条件以外的条件，保持上游顺序
    pub fn specific_criteria(&self) -> impl Iterator<Item = &BadgeCriterion> {
        self.criteria
            .iter()
            .filter(|c| !c.criteria_type.is_overall())
    }

    /// 徽章整体的聚合方式，取自总体条件
    pub fn aggregation_method(&self) -> AggregationMethod {
        self.overall_criterion()
            .map(|c| c.aggregation)
            .unwrap_or_default()
    }

    /// 课程级徽章返回所属课程
    pub fn course_scope(&self) -> Option<i64> {
        match self.scope {
            BadgeScope::Course => self.course_id,
            BadgeScope::Site => None,
        }
    }
}

/// 空字符串与缺失等价
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}
