//! 基于 chrono 的日期格式化

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset};

use super::DateFormatter;
use crate::error::{RenderError, Result};

/// 按固定格式与固定时区偏移输出日期
#[derive(Debug, Clone)]
pub struct ChronoDateFormatter {
    format: String,
    offset: FixedOffset,
}

impl ChronoDateFormatter {
    /// 格式串在构造时校验，避免渲染时才发现格式错误
    pub fn new(format: &str, utc_offset_seconds: i32) -> Result<Self> {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            return Err(RenderError::InvalidConfig(format!(
                "invalid date format: {format}"
            )));
        }
        let offset = FixedOffset::east_opt(utc_offset_seconds).ok_or_else(|| {
            RenderError::InvalidConfig(format!("invalid utc offset: {utc_offset_seconds}"))
        })?;

        Ok(Self {
            format: format.to_string(),
            offset,
        })
    }
}

impl DateFormatter for ChronoDateFormatter {
    fn format_date(&self, epoch: i64) -> String {
        match DateTime::from_timestamp(epoch, 0) {
            Some(dt) => dt
                .with_timezone(&self.offset)
                .format(&self.format)
                .to_string(),
            // 超出 chrono 可表示范围时原样输出
            None => epoch.to_string(),
        }
    }
}
