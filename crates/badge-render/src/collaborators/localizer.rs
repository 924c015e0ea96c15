//! 内存字符串表
//!
//! 以 key -> 模板的形式保存界面文案，支持 `{$a}` 与 `{$a->name}` 两种占位符。
//! 正式部署时由平台的语言包实现 [`Localizer`]，这里只提供默认文案。

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::warn;

use super::{LocaleArgs, Localizer};

// 匹配 {$a} 与 {$a->name}
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\$a(?:->(\w+))?\}").expect("valid placeholder pattern"));

const ENGLISH: &[(&str, &str)] = &[
    // 通用
    ("name", "Name"),
    ("course", "Course"),
    ("language", "Language"),
    ("download", "Download"),
    ("close", "Close"),
    // 颁发详情
    ("addtobackpack", "Add to backpack"),
    ("expireddate", "This badge expired on {$a}"),
    ("recipientdetails", "Recipient details"),
    ("error:userdeleted", "This user has been deleted from {$a->site}"),
    ("issuerdetails", "Issuer details"),
    ("issuername", "Issuer name"),
    ("contact", "Contact"),
    ("badgedetails", "Badge details"),
    ("version", "Version"),
    ("description", "Description"),
    ("imageauthorname", "Image author's name"),
    ("imageauthoremail", "Image author's email"),
    ("imageauthorurl", "Image author's URL"),
    ("imagecaption", "Image caption"),
    ("bcriteria", "Criteria"),
    ("issuancedetails", "Badge expiry"),
    ("dateawarded", "Date issued"),
    ("expirydate", "Expiry date"),
    ("warnexpired", " (This badge has expired!)"),
    ("evidence", "Evidence"),
    ("completioninfo", "This badge was issued for completing: "),
    ("relatedbages", "Related badges"),
    ("alignment", "Alignments"),
    // 背书
    ("endorsement", "Endorsement"),
    ("issueremail", "Email"),
    ("issuerurl", "Issuer URL"),
    ("claimid", "Claim URL"),
    ("claimcomment", "Endorsement comment"),
    // 获取条件
    ("nocriteria", "Criteria for this badge have not been set up yet."),
    ("criteria_descr", "Students are awarded this badge when they complete the following requirement:"),
    ("criteria_descr_overall", "Students are awarded this badge when they complete {$a} of the listed requirements:"),
    ("criteria_descr_single_activity", "The following activity has to be completed:"),
    ("criteria_descr_activity", "{$a} of the following activities are completed:"),
    ("criteria_descr_single_manual", "The following role has to award this badge:"),
    ("criteria_descr_manual", "This badge has to be awarded by the users with {$a} of the following roles:"),
    ("criteria_descr_single_social", "Social participation criteria:"),
    ("criteria_descr_social", "{$a} of the following social participation criteria are met:"),
    ("criteria_descr_single_course", "The following course has to be completed:"),
    ("criteria_descr_course", "The following course has to be completed:"),
    ("criteria_descr_single_courseset", "The following course has to be completed:"),
    ("criteria_descr_courseset", "{$a} of the following courses have to be completed:"),
    ("criteria_descr_single_profile", "The following user profile field has to be completed:"),
    ("criteria_descr_profile", "{$a} of the following user profile fields have to be completed:"),
    ("criteria_descr_single_badge", "The following badge has to be earned:"),
    ("criteria_descr_badge", "{$a} of the following badges have to be earned:"),
    ("criteria_descr_single_cohort", "Membership in the following cohort is required:"),
    ("criteria_descr_cohort", "Membership in {$a} of the following cohorts is required:"),
    ("criteria_descr_single_competency", "The following competency has to be completed:"),
    ("criteria_descr_competency", "{$a} of the following competencies have to be completed:"),
    // 我的成就
    ("myachievements", "My achievements"),
    ("awarded", "Awarded"),
    ("notawarded", "Not awarded"),
    ("criteria", "Criteria"),
    ("criteriatitle", "Criteria"),
];

// 主题原先硬编码的葡语文案，其余 key 回退到英文
const PORTUGUESE_BR: &[(&str, &str)] = &[
    ("myachievements", "Minhas Conquistas"),
    ("awarded", "Obtido"),
    ("notawarded", "Não obtido"),
    ("criteria", "Critério"),
    ("criteriatitle", "Critérios"),
    ("close", "Fechar"),
    ("download", "Baixar"),
    ("addtobackpack", "Adicionar à mochila"),
];

/// 内存字符串表
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    strings: HashMap<String, String>,
}

impl StringTable {
    /// 创建空的字符串表
    pub fn new() -> Self {
        Self::default()
    }

    /// 英文默认文案
    pub fn english() -> Self {
        let mut table = Self::new();
        table.extend(ENGLISH);
        table
    }

    /// 按语言代码创建，未知语言回退到英文
    pub fn for_language(language: &str) -> Self {
        let mut table = Self::english();
        match language.to_ascii_lowercase().replace('-', "_").as_str() {
            "pt_br" | "pt" => table.extend(PORTUGUESE_BR),
            "en" => {}
            other => warn!(language = other, "未知界面语言，使用英文文案"),
        }
        table
    }

    pub fn register(&mut self, key: impl Into<String>, template: impl Into<String>) {
        self.strings.insert(key.into(), template.into());
    }

    fn extend(&mut self, entries: &[(&str, &str)]) {
        for (key, template) in entries {
            self.register(*key, *template);
        }
    }

    /// 替换模板中的占位符，找不到的占位符保留原样
    pub fn interpolate(template: &str, args: &LocaleArgs) -> String {
        PLACEHOLDER
            .replace_all(template, |caps: &Captures| {
                let value = match (caps.get(1), args) {
                    (None, LocaleArgs::Value(v)) => Some(v.as_str()),
                    (Some(name), LocaleArgs::Named(map)) => {
                        map.get(name.as_str()).map(String::as_str)
                    }
                    _ => None,
                };
                value.map_or_else(|| caps[0].to_string(), str::to_string)
            })
            .into_owned()
    }
}

impl Localizer for StringTable {
    fn get_string(&self, key: &str, args: &LocaleArgs) -> String {
        match self.strings.get(key) {
            Some(template) => Self::interpolate(template, args),
            None => {
                warn!(key = key, "文案 key 未定义");
                format!("[[{key}]]")
            }
        }
    }
}
