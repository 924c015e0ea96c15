//! 默认的条件与背书格式化

use std::sync::Arc;

use maud::{Markup, PreEscaped, html};

use super::{BadgeFormatter, DateFormatter, LocaleArgs, Localizer};
use crate::models::{Badge, BadgeCriterion, Endorsement, non_empty};
use crate::view::evidence::criterion_phrase;

/// 按平台的惯例输出条件列表与背书信息
#[derive(Clone)]
pub struct StandardBadgeFormatter {
    strings: Arc<dyn Localizer>,
    dates: Arc<dyn DateFormatter>,
}

impl StandardBadgeFormatter {
    pub fn new(strings: Arc<dyn Localizer>, dates: Arc<dyn DateFormatter>) -> Self {
        Self { strings, dates }
    }

    fn text(&self, key: &str) -> String {
        self.strings.get_string(key, &LocaleArgs::None)
    }

    fn description_box(criterion: &BadgeCriterion) -> Option<Markup> {
        non_empty(&criterion.description).map(|descr| {
            html! {
                div class="box py-3 criteria-description" { (PreEscaped(descr)) }
            }
        })
    }

    fn criterion_item(&self, criterion: &BadgeCriterion, with_description: bool) -> Markup {
        let description = if with_description {
            Self::description_box(criterion)
        } else {
            None
        };
        html! {
            li {
                (criterion_phrase(criterion, self.strings.as_ref()))
                (PreEscaped(&criterion.details))
                @if let Some(description) = description { (description) }
            }
        }
    }
}

impl BadgeFormatter for StandardBadgeFormatter {
    fn criteria_markup(&self, badge: &Badge) -> String {
        if badge.criteria.is_empty() {
            return self.text("nocriteria");
        }

        // 只有一条具体条件时，条件说明提到列表上方
        let specific: Vec<&BadgeCriterion> = badge.specific_criteria().collect();
        let lone = match specific.as_slice() {
            [only] => Some(*only),
            _ => None,
        };
        let overall_box = lone
            .and_then(Self::description_box)
            .or_else(|| badge.overall_criterion().and_then(Self::description_box));

        let condition = if badge.criteria.len() == 2 {
            self.text("criteria_descr")
        } else {
            self.strings.get_string(
                "criteria_descr_overall",
                &LocaleArgs::value(badge.aggregation_method().display_name()),
            )
        };

        html! {
            @if let Some(overall_box) = overall_box { (overall_box) }
            (condition)
            ul {
                @for criterion in &specific {
                    (self.criterion_item(criterion, lone.is_none()))
                }
            }
        }
        .into_string()
    }

    fn endorsement_markup(&self, endorsement: &Endorsement) -> String {
        html! {
            h3 { (self.text("endorsement")) }
            dl {
                dt { (self.text("issuername")) }
                dd { (endorsement.issuer_name) }
                @if let Some(email) = non_empty(&endorsement.issuer_email) {
                    dt { (self.text("issueremail")) }
                    dd { a href={ "mailto:" (email) } { (email) } }
                }
                @if let Some(url) = non_empty(&endorsement.issuer_url) {
                    dt { (self.text("issuerurl")) }
                    dd { a href=(url) target="_blank" { (url) } }
                }
                @if let Some(date) = endorsement.date_issued {
                    dt { (self.text("dateawarded")) }
                    dd { (self.dates.format_date(date)) }
                }
                @if let Some(claim) = non_empty(&endorsement.claim_id) {
                    dt { (self.text("claimid")) }
                    dd { a href=(claim) target="_blank" { (claim) } }
                }
                @if let Some(comment) = non_empty(&endorsement.claim_comment) {
                    dt { (self.text("claimcomment")) }
                    dd { (comment) }
                }
            }
        }
        .into_string()
    }
}
