//! 徽章页面渲染入口
//!
//! [`BadgeRenderer`] 是主题覆盖平台默认徽章页面的扩展点，
//! [`ThemeBadgeRenderer`] 把视图模型与 maud 模板串起来，并记录渲染指标。

use std::time::Instant;

use tracing::{debug, instrument};

use badge_shared::observability::metrics::record_badge_render;

use crate::collaborators::Collaborators;
use crate::context::RenderContext;
use crate::error::Result;
use crate::html;
use crate::models::IssuedBadge;
use crate::view;

const VIEW_ISSUED: &str = "issued";
const VIEW_COLLECTION: &str = "collection";

/// 徽章页面渲染能力
#[cfg_attr(test, mockall::automock)]
pub trait BadgeRenderer: Send + Sync {
    /// 渲染一次徽章颁发的详情页
    fn render_issued_badge(&self, issued: &IssuedBadge, ctx: &RenderContext) -> Result<String>;

    /// 渲染观看者的"我的成就"卡片墙
    fn render_badge_collection(&self, ctx: &RenderContext) -> Result<String>;
}

/// 主题渲染器
#[derive(Clone)]
pub struct ThemeBadgeRenderer {
    deps: Collaborators,
}

impl ThemeBadgeRenderer {
    pub fn new(deps: Collaborators) -> Self {
        Self { deps }
    }
}

fn finish(view: &str, start: Instant, result: Result<String>) -> Result<String> {
    let status = if result.is_ok() { "ok" } else { "error" };
    record_badge_render(view, status, start.elapsed().as_secs_f64());
    result
}

impl BadgeRenderer for ThemeBadgeRenderer {
    #[instrument(skip(self, issued, ctx), fields(hash = %issued.hash, viewer = ctx.viewer.user_id))]
    fn render_issued_badge(&self, issued: &IssuedBadge, ctx: &RenderContext) -> Result<String> {
        let start = Instant::now();
        let result = view::build_issued_page(issued, ctx, &self.deps).map(|page| {
            debug!(
                actions = page.actions.len(),
                expired = page.is_expired(),
                "颁发详情页已组装"
            );
            html::issued_badge(&page).into_string()
        });
        finish(VIEW_ISSUED, start, result)
    }

    #[instrument(skip(self, ctx), fields(viewer = ctx.viewer.user_id))]
    fn render_badge_collection(&self, ctx: &RenderContext) -> Result<String> {
        let start = Instant::now();
        let page = view::build_collection_page(ctx, &self.deps);
        debug!(cards = page.cards.len(), "徽章卡片墙已组装");
        finish(
            VIEW_COLLECTION,
            start,
            Ok(html::badge_collection(&page).into_string()),
        )
    }
}
