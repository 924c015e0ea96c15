//! 站点地址生成

use badge_shared::config::SiteConfig;

use super::UrlResolver;
use crate::models::{Alignment, Badge, non_empty};

/// 系统上下文 ID，站点级徽章的文件都挂在这里
const SYSTEM_CONTEXT_ID: i64 = 1;

/// 以站点根地址为前缀生成各类页面与资源地址
#[derive(Debug, Clone)]
pub struct SiteUrlResolver {
    wwwroot: String,
    theme: String,
    placeholder_image: String,
}

impl SiteUrlResolver {
    pub fn new(site: &SiteConfig, placeholder_image: &str) -> Self {
        Self {
            wwwroot: site.wwwroot.trim_end_matches('/').to_string(),
            theme: site.theme.clone(),
            placeholder_image: placeholder_image.to_string(),
        }
    }

    fn page(&self, path: &str) -> String {
        format!("{}{}", self.wwwroot, path)
    }
}

impl UrlResolver for SiteUrlResolver {
    fn badge_url(&self, hash: &str) -> String {
        self.page(&format!("/badges/badge.php?hash={hash}"))
    }

    fn download_url(&self, hash: &str) -> String {
        self.page(&format!("/badges/badge.php?hash={hash}&bake=1"))
    }

    fn assertion_url(&self, hash: &str) -> String {
        self.page(&format!("/badges/assertion.php?b={hash}"))
    }

    fn backpack_add_url(&self, hash: &str) -> String {
        self.page(&format!("/badges/backpack-add.php?hash={hash}"))
    }

    /// 优先使用仓储给出的上下文 ID；站点级徽章默认挂在系统上下文下。
    /// 课程级徽章缺少上下文 ID 时退回 `course/{id}`，只在预览夹具中出现。
    fn badge_image_url(&self, badge: &Badge) -> String {
        let context = match (badge.context_id, badge.course_scope()) {
            (Some(context_id), _) => context_id.to_string(),
            (None, Some(course_id)) => format!("course/{course_id}"),
            (None, None) => SYSTEM_CONTEXT_ID.to_string(),
        };
        self.page(&format!(
            "/pluginfile.php/{context}/badges/badgeimage/{}/f1",
            badge.id
        ))
    }

    fn placeholder_image_url(&self) -> String {
        self.page(&format!(
            "/theme/image.php/{}/theme/-1/{}",
            self.theme, self.placeholder_image
        ))
    }

    fn related_badge_url(&self, badge_id: i64) -> String {
        self.page(&format!("/badges/overview.php?id={badge_id}"))
    }

    fn alignment_url(&self, alignment: &Alignment, hash: &str) -> String {
        match non_empty(&alignment.target_url) {
            Some(url) => url.to_string(),
            None => self.page(&format!(
                "/badges/alignment.php?id={}&b={hash}&action=view",
                alignment.id
            )),
        }
    }
}
