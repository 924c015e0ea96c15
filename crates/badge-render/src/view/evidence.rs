//! 条件措辞与获得证据

use crate::collaborators::{LocaleArgs, Localizer};
use crate::models::{BadgeCriterion, IssuedBadge};

/// 证据列表中的一项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvidenceItem {
    /// 条件措辞（纯文本）
    pub phrase: String,
    /// 条件明细（上游 HTML 片段）
    pub details_markup: String,
}

/// 条件的引导措辞
///
/// 单参数条件使用 `criteria_descr_single_<type>`，
/// 多参数条件使用 `criteria_descr_<type>` 并插入大写的聚合方式
pub fn criterion_phrase(criterion: &BadgeCriterion, strings: &dyn Localizer) -> String {
    let kind = criterion.criteria_type;
    if criterion.is_single_param() {
        strings.get_string(&format!("criteria_descr_single_{kind}"), &LocaleArgs::None)
    } else {
        strings.get_string(
            &format!("criteria_descr_{kind}"),
            &LocaleArgs::value(criterion.aggregation.display_name()),
        )
    }
}

/// 获得者已完成的具体条件，保持徽章定义中的顺序
pub fn evidence_items(issued: &IssuedBadge, strings: &dyn Localizer) -> Vec<EvidenceItem> {
    issued
        .badge
        .specific_criteria()
        .filter(|c| issued.has_completed(c.id))
        .map(|c| EvidenceItem {
            phrase: criterion_phrase(c, strings),
            details_markup: c.details.clone(),
        })
        .collect()
}
