//! HTTP 请求处理器

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::info;

use crate::{error::RenderError, state::AppState};

/// 未登录访客的用户 ID
pub const GUEST_USER_ID: i64 = 0;

#[derive(Debug, Deserialize)]
pub struct MyBadgesQuery {
    pub user: i64,
}

#[derive(Debug, Deserialize)]
pub struct IssuedBadgeQuery {
    pub hash: String,
    /// 观看者，缺省视为访客
    #[serde(default)]
    pub user: Option<i64>,
}

/// 观看者的"我的成就"页面
///
/// GET /badges/mine?user={id}
pub async fn my_badges(
    State(state): State<AppState>,
    Query(query): Query<MyBadgesQuery>,
) -> Result<Html<String>, RenderError> {
    let ctx = state.context_for(query.user);
    let html = state.renderer.render_badge_collection(&ctx)?;
    Ok(Html(html))
}

/// 颁发详情页
///
/// GET /badges/badge.php?hash={hash}&user={id}
pub async fn issued_badge(
    State(state): State<AppState>,
    Query(query): Query<IssuedBadgeQuery>,
) -> Result<Html<String>, RenderError> {
    let issued = state
        .store
        .find_issued(&query.hash)
        .ok_or_else(|| RenderError::IssuedBadgeNotFound(query.hash.clone()))?;

    let viewer = query.user.unwrap_or(GUEST_USER_ID);
    info!(hash = %query.hash, viewer, "渲染颁发详情页");

    let ctx = state.context_for(viewer);
    let html = state.renderer.render_issued_badge(&issued, &ctx)?;
    Ok(Html(html))
}

/// 存活探针
pub async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;
    use crate::collaborators::InMemoryBadgeStore;
    use crate::context::SiteInfo;
    use crate::models::{Badge, IssuanceRecord, IssuedBadge, Recipient, Timestamp};
    use crate::renderer::MockBadgeRenderer;
    use crate::routes::create_router;

    fn site() -> SiteInfo {
        SiteInfo {
            full_name: "Learning Site".to_string(),
            badges_enabled: true,
        }
    }

    fn issued(hash: &str) -> IssuedBadge {
        IssuedBadge {
            hash: hash.to_string(),
            image_url: "/image/1".to_string(),
            issuance: IssuanceRecord {
                issued_on: Timestamp::Epoch(1_700_000_000),
                expires: None,
            },
            recipient: Recipient {
                id: 2,
                full_name: "Ana Lima".to_string(),
                deleted: false,
            },
            badge: Badge::new(1, "Mentor"),
            completions: Vec::new(),
        }
    }

    async fn get(state: AppState, uri: &str) -> (StatusCode, String) {
        let response = create_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_my_badges_uses_query_viewer() {
        let mut renderer = MockBadgeRenderer::new();
        renderer
            .expect_render_badge_collection()
            .withf(|ctx| ctx.viewer.user_id == 7)
            .times(1)
            .returning(|_| Ok("<h2>cards</h2>".to_string()));

        let state = AppState::new(Arc::new(renderer), Arc::new(InMemoryBadgeStore::new()), site());
        let (status, body) = get(state, "/badges/mine?user=7").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<h2>cards</h2>");
    }

    #[tokio::test]
    async fn test_issued_badge_defaults_to_guest() {
        let mut renderer = MockBadgeRenderer::new();
        renderer
            .expect_render_issued_badge()
            .withf(|issued, ctx| issued.hash == "h1" && ctx.viewer.user_id == GUEST_USER_ID)
            .times(1)
            .returning(|_, _| Ok("<div id=\"badge\"></div>".to_string()));

        let store = Arc::new(InMemoryBadgeStore::new());
        store.insert_issued(issued("h1"));

        let state = AppState::new(Arc::new(renderer), store, site());
        let (status, body) = get(state, "/badges/badge.php?hash=h1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<div id=\"badge\"></div>");
    }

    #[tokio::test]
    async fn test_unknown_hash_is_not_found() {
        let mut renderer = MockBadgeRenderer::new();
        renderer.expect_render_issued_badge().never();

        let state = AppState::new(Arc::new(renderer), Arc::new(InMemoryBadgeStore::new()), site());
        let (status, _) = get(state, "/badges/badge.php?hash=nope&user=2").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_render_error_is_internal() {
        let mut renderer = MockBadgeRenderer::new();
        renderer.expect_render_issued_badge().returning(|_, _| {
            Err(RenderError::InvalidTimestamp {
                value: "soon".to_string(),
            })
        });

        let store = Arc::new(InMemoryBadgeStore::new());
        store.insert_issued(issued("h1"));

        let state = AppState::new(Arc::new(renderer), store, site());
        let (status, body) = get(state, "/badges/badge.php?hash=h1&user=2").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!body.contains("soon"));
    }

    #[tokio::test]
    async fn test_health() {
        let state = AppState::new(
            Arc::new(MockBadgeRenderer::new()),
            Arc::new(InMemoryBadgeStore::new()),
            site(),
        );
        let (status, body) = get(state, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }
}
