//! 徽章展示渲染
//!
//! 为学习平台主题提供两个徽章页面的 HTML 渲染：
//! 单次颁发的详情页，以及用户的"我的成就"卡片墙。
//!
//! ## 模块结构
//!
//! - `models`: 上游传入的徽章、颁发记录等只读实体
//! - `context`: 观看者、站点信息与当前时间
//! - `collaborators`: 仓储、本地化、地址、日期、背包等协作方接口及默认实现
//! - `view`: 视图模型，页面上的全部取舍都在这里决定
//! - `html`: maud 模板
//! - `renderer`: 渲染入口与指标记录
//! - `handlers` / `routes` / `state`: 预览服务
//!
//! ## 技术栈
//!
//! - 模板：maud
//! - Web 框架：Axum
//! - 日志与指标：tracing、metrics

pub mod collaborators;
pub mod context;
pub mod error;
pub mod handlers;
pub mod html;
pub mod models;
pub mod renderer;
pub mod routes;
pub mod state;
pub mod view;

// 重新导出核心类型
pub use collaborators::{
    BackpackProvider, BadgeFormatter, BadgeRepository, Collaborators, DateFormatter, LocaleArgs,
    Localizer, UrlResolver,
};
pub use context::{RenderContext, SiteInfo, ViewerIdentity};
pub use error::{RenderError, Result};
pub use models::{Badge, IssuedBadge, UserBadge};
pub use renderer::{BadgeRenderer, ThemeBadgeRenderer};
