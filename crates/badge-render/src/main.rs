//! 徽章页面预览服务
//!
//! 从 JSON 夹具加载徽章数据，通过 HTTP 输出详情页与"我的成就"页面。

use std::sync::Arc;

use anyhow::Result;
use badge_shared::{config::AppConfig, observability};
use tokio::net::TcpListener;
use tracing::{info, warn};

use badge_render::{
    collaborators::{Collaborators, InMemoryBadgeStore},
    context::SiteInfo,
    renderer::ThemeBadgeRenderer,
    routes,
    state::AppState,
};

const SERVICE_NAME: &str = "badge-render";

#[tokio::main]
async fn main() -> Result<()> {
    // 1. 加载配置，失败时回退到默认值
    let config = AppConfig::load(SERVICE_NAME).unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {e}");
        AppConfig::default()
    });

    let obs_config = config.observability.clone().with_service_name(&config.service_name);
    let _guard = observability::init(&obs_config).await?;

    info!(
        environment = %config.environment,
        addr = %config.server_addr(),
        "Starting badge-render..."
    );

    // 2. 加载夹具；文件缺失时以空仓储启动
    let store = match InMemoryBadgeStore::load_json_file(&config.render.fixture_path) {
        Ok(store) => Arc::new(store),
        Err(e) => {
            warn!(
                path = %config.render.fixture_path,
                error = %e,
                "Failed to load badge fixture, starting with an empty store"
            );
            Arc::new(InMemoryBadgeStore::new())
        }
    };

    // 3. 组装协作方与渲染器
    let deps = Collaborators::from_config(&config, store.clone())?;
    let renderer = Arc::new(ThemeBadgeRenderer::new(deps));
    let state = AppState::new(renderer, store, SiteInfo::from(&config.site));

    let app = routes::create_router(state);

    let listener = TcpListener::bind(config.server_addr()).await?;
    info!("Listening on {}", config.server_addr());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// 监听关闭信号
///
/// 收到 SIGTERM 或 Ctrl+C 后返回，触发 axum 的优雅关闭流程。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown..."),
        _ = terminate => info!("Received SIGTERM, initiating graceful shutdown..."),
    }
}
