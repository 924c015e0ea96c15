//! 颁发记录相关实体

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::badge::Badge;
use crate::error::{RenderError, Result};

/// 时间戳
///
/// 上游既可能给出 epoch 秒，也可能给出日期字符串，比较前统一转换为 epoch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Epoch(i64),
    Text(String),
}

impl Timestamp {
    /// 规范化为 epoch 秒
    ///
    /// 支持纯数字字符串、RFC 3339、`YYYY-MM-DD HH:MM:SS` 与 `YYYY-MM-DD`（按 UTC 零点）
    pub fn to_epoch(&self) -> Result<i64> {
        match self {
            Self::Epoch(secs) => Ok(*secs),
            Self::Text(raw) => parse_epoch(raw).ok_or_else(|| RenderError::InvalidTimestamp {
                value: raw.clone(),
            }),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self::Epoch(secs)
    }
}

fn parse_epoch(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(secs) = raw.parse::<i64>() {
        return Some(secs);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp());
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc().timestamp());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp())
}

/// 颁发时间信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuanceRecord {
    pub issued_on: Timestamp,
    /// 缺失表示永不过期
    #[serde(default)]
    pub expires: Option<Timestamp>,
}

/// 徽章获得者
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipient {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub deleted: bool,
}

/// 获得者的条件完成记录
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionCompletion {
    pub criterion_id: i64,
    #[serde(default)]
    pub date_completed: Option<Timestamp>,
}

/// 一次徽章颁发
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedBadge {
    /// 唯一校验哈希
    pub hash: String,
    /// 徽章类（badge class）中的图片地址
    pub image_url: String,
    pub issuance: IssuanceRecord,
    pub recipient: Recipient,
    pub badge: Badge,
    #[serde(default)]
    pub completions: Vec<CriterionCompletion>,
}

impl IssuedBadge {
    /// 获得者是否完成了指定条件
    pub fn has_completed(&self, criterion_id: i64) -> bool {
        self.completions
            .iter()
            .any(|c| c.criterion_id == criterion_id)
    }
}

/// 用户徽章列表中的一行
///
/// 包含用户有资格获得的全部徽章，未获得的徽章 date_issued 为空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBadge {
    #[serde(flatten)]
    pub badge: Badge,
    #[serde(default)]
    pub date_issued: Option<Timestamp>,
    #[serde(default)]
    pub unique_hash: Option<String>,
}

impl UserBadge {
    /// 颁发时间缺失、为 0 或为空串都视为未获得
    pub fn is_issued(&self) -> bool {
        match &self.date_issued {
            None | Some(Timestamp::Epoch(0)) => false,
            Some(Timestamp::Epoch(_)) => true,
            Some(Timestamp::Text(raw)) => !matches!(raw.trim(), "" | "0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_passthrough() {
        assert_eq!(Timestamp::Epoch(1_700_000_000).to_epoch().unwrap(), 1_700_000_000);
    }

    #[test]
    fn test_parse_text_formats() {
        let cases = [
            ("1700000000", 1_700_000_000),
            ("2024-01-02T03:04:05Z", 1_704_164_645),
            ("2024-01-02T05:04:05+02:00", 1_704_164_645),
            ("2024-01-02 03:04:05", 1_704_164_645),
            ("2024-01-02", 1_704_153_600),
        ];
        for (raw, expected) in cases {
            let ts = Timestamp::Text(raw.to_string());
            assert_eq!(ts.to_epoch().unwrap(), expected, "input {raw}");
        }
    }

    #[test]
    fn test_unparseable_text_is_error() {
        let err = Timestamp::Text("next tuesday".to_string())
            .to_epoch()
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_TIMESTAMP");
    }

    #[test]
    fn test_untagged_deserialize() {
        let record: IssuanceRecord = serde_json::from_value(serde_json::json!({
            "issuedOn": 1_700_000_000,
            "expires": "2030-01-01"
        }))
        .unwrap();
        assert_eq!(record.issued_on, Timestamp::Epoch(1_700_000_000));
        assert_eq!(record.expires, Some(Timestamp::Text("2030-01-01".to_string())));
    }

    #[test]
    fn test_user_badge_flatten() {
        let row: UserBadge = serde_json::from_value(serde_json::json!({
            "id": 4,
            "name": "Collaborator",
            "dateIssued": 1_700_000_000,
            "uniqueHash": "f00d"
        }))
        .unwrap();
        assert!(row.is_issued());
        assert_eq!(row.badge.name, "Collaborator");
        assert_eq!(row.unique_hash.as_deref(), Some("f00d"));
    }

    #[test]
    fn test_zero_issue_date_is_not_issued() {
        let mut row = UserBadge {
            badge: Badge::new(5, "Pioneer"),
            date_issued: Some(Timestamp::Epoch(0)),
            unique_hash: None,
        };
        assert!(!row.is_issued());

        row.date_issued = Some(Timestamp::Text("0".to_string()));
        assert!(!row.is_issued());

        row.date_issued = Some(Timestamp::Text(String::new()));
        assert!(!row.is_issued());

        row.date_issued = Some(Timestamp::Epoch(1_700_000_000));
        assert!(row.is_issued());
    }
}
