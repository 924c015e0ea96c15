//! 预览服务的共享状态

use std::sync::Arc;

use chrono::Utc;

use crate::collaborators::InMemoryBadgeStore;
use crate::context::{RenderContext, SiteInfo, ViewerIdentity};
use crate::renderer::BadgeRenderer;

/// Axum 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<dyn BadgeRenderer>,
    /// 按校验哈希查找颁发记录
    pub store: Arc<InMemoryBadgeStore>,
    pub site: SiteInfo,
}

impl AppState {
    pub fn new(
        renderer: Arc<dyn BadgeRenderer>,
        store: Arc<InMemoryBadgeStore>,
        site: SiteInfo,
    ) -> Self {
        Self {
            renderer,
            store,
            site,
        }
    }

    /// 以当前时间为观看者构建渲染上下文
    pub fn context_for(&self, user_id: i64) -> RenderContext {
        RenderContext::new(ViewerIdentity::new(user_id), self.site.clone(), Utc::now())
    }
}
