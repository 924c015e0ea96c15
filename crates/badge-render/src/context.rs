//! 渲染上下文
//!
//! 观看者身份、站点信息与当前时间都作为显式参数传入，渲染函数不读取任何全局状态。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use badge_shared::config::SiteConfig;

/// 当前观看者
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerIdentity {
    pub user_id: i64,
}

impl ViewerIdentity {
    pub fn new(user_id: i64) -> Self {
        Self { user_id }
    }
}

/// 站点信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub full_name: String,
    /// 全局是否启用徽章
    pub badges_enabled: bool,
}

impl From<&SiteConfig> for SiteInfo {
    fn from(config: &SiteConfig) -> Self {
        Self {
            full_name: config.full_name.clone(),
            badges_enabled: config.badges_enabled,
        }
    }
}

/// 单次渲染的上下文
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    pub viewer: ViewerIdentity,
    pub site: SiteInfo,
    pub now: DateTime<Utc>,
}

impl RenderContext {
    pub fn new(viewer: ViewerIdentity, site: SiteInfo, now: DateTime<Utc>) -> Self {
        Self { viewer, site, now }
    }

    pub fn now_epoch(&self) -> i64 {
        self.now.timestamp()
    }

    pub fn viewer_is(&self, user_id: i64) -> bool {
        self.viewer.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_info_from_config() {
        let config = SiteConfig {
            full_name: "Escola Aberta".to_string(),
            badges_enabled: false,
            ..SiteConfig::default()
        };
        let site = SiteInfo::from(&config);
        assert_eq!(site.full_name, "Escola Aberta");
        assert!(!site.badges_enabled);
    }

    #[test]
    fn test_viewer_is() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let ctx = RenderContext::new(
            ViewerIdentity::new(5),
            SiteInfo::from(&SiteConfig::default()),
            now,
        );
        assert!(ctx.viewer_is(5));
        assert!(!ctx.viewer_is(6));
        assert_eq!(ctx.now_epoch(), 1_700_000_000);
    }
}
