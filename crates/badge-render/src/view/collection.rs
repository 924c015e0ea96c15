//! "我的成就"卡片墙的视图模型

use tracing::warn;

use badge_shared::observability::metrics::record_repository_failure;

use crate::collaborators::{Collaborators, LocaleArgs};
use crate::context::RenderContext;
use crate::models::UserBadge;

/// 未获得徽章的链接占位
pub const DISABLED_LINK: &str = "#";

/// 卡片图片上的链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeLink {
    /// 指向颁发详情页
    Enabled(String),
    Disabled,
}

impl BadgeLink {
    pub fn href(&self) -> &str {
        match self {
            Self::Enabled(url) => url,
            Self::Disabled => DISABLED_LINK,
        }
    }
}

/// 获得状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwardStatus {
    Awarded,
    NotAwarded,
}

impl AwardStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Awarded => "badge badge-success",
            Self::NotAwarded => "badge badge-dark",
        }
    }

    fn label_key(&self) -> &'static str {
        match self {
            Self::Awarded => "awarded",
            Self::NotAwarded => "notawarded",
        }
    }
}

/// 条件弹窗
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriteriaModal {
    pub id: String,
    pub title: String,
    pub criteria_markup: String,
    pub close_label: String,
}

/// 单个徽章卡片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeCard {
    pub badge_id: i64,
    pub name: String,
    /// 未获得时为空
    pub description: String,
    pub image_url: String,
    pub link: BadgeLink,
    pub status: AwardStatus,
    pub status_label: String,
    /// 弹窗触发按钮文案
    pub criteria_label: String,
    pub modal: CriteriaModal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionPage {
    pub heading: String,
    pub cards: Vec<BadgeCard>,
}

/// 弹窗元素 ID
pub fn modal_id(badge_id: i64) -> String {
    format!("modal{badge_id}")
}

/// 组装观看者的徽章卡片墙
///
/// 仓储失败时记录告警并返回空列表，页面仍然输出标题与容器
pub fn build_collection_page(ctx: &RenderContext, deps: &Collaborators) -> CollectionPage {
    let user_id = ctx.viewer.user_id;
    let badges = match deps.repository.badges_for_user(user_id) {
        Ok(badges) => badges,
        Err(e) => {
            warn!(user_id, error = %e, code = e.code(), "查询用户徽章失败，显示空列表");
            record_repository_failure("badges_for_user");
            Vec::new()
        }
    };

    CollectionPage {
        heading: text(deps, "myachievements"),
        cards: badges.iter().map(|row| build_card(row, deps)).collect(),
    }
}

fn text(deps: &Collaborators, key: &str) -> String {
    deps.strings.get_string(key, &LocaleArgs::None)
}

fn build_card(row: &UserBadge, deps: &Collaborators) -> BadgeCard {
    let badge = &row.badge;

    let (status, image_url, description, link) = match (row.is_issued(), &row.unique_hash) {
        (true, Some(hash)) => (
            AwardStatus::Awarded,
            deps.urls.badge_image_url(badge),
            badge.description.clone(),
            BadgeLink::Enabled(deps.urls.badge_url(hash)),
        ),
        // 已获得但缺少校验哈希时无法链接到详情页
        (true, None) => (
            AwardStatus::Awarded,
            deps.urls.badge_image_url(badge),
            badge.description.clone(),
            BadgeLink::Disabled,
        ),
        (false, _) => (
            AwardStatus::NotAwarded,
            deps.urls.placeholder_image_url(),
            String::new(),
            BadgeLink::Disabled,
        ),
    };

    BadgeCard {
        badge_id: badge.id,
        name: badge.name.clone(),
        description,
        image_url,
        link,
        status,
        status_label: text(deps, status.label_key()),
        criteria_label: text(deps, "criteria"),
        modal: CriteriaModal {
            id: modal_id(badge.id),
            title: format!("{} - {}", badge.name, text(deps, "criteriatitle")),
            criteria_markup: deps.formatter.criteria_markup(badge),
            close_label: text(deps, "close"),
        },
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use badge_shared::error::BadgeError;
    use chrono::DateTime;

    use super::*;
    use crate::collaborators::{
        MockBackpackProvider, MockBadgeFormatter, MockBadgeRepository, MockDateFormatter,
        MockUrlResolver, StringTable,
    };
    use crate::context::{SiteInfo, ViewerIdentity};
    use crate::models::{Badge, Timestamp};

    fn deps(repository: MockBadgeRepository) -> Collaborators {
        let mut formatter = MockBadgeFormatter::new();
        formatter
            .expect_criteria_markup()
            .returning(|b| format!("<p>criteria of {}</p>", b.name));

        let mut urls = MockUrlResolver::new();
        urls.expect_badge_url()
            .returning(|h| format!("/badge.php?hash={h}"));
        urls.expect_badge_image_url()
            .returning(|b| format!("/image/{}", b.id));
        urls.expect_placeholder_image_url()
            .returning(|| "/placeholder".to_string());

        Collaborators {
            repository: Arc::new(repository),
            formatter: Arc::new(formatter),
            urls: Arc::new(urls),
            strings: Arc::new(StringTable::english()),
            dates: Arc::new(MockDateFormatter::new()),
            backpack: Arc::new(MockBackpackProvider::new()),
        }
    }

    fn ctx() -> RenderContext {
        RenderContext::new(
            ViewerIdentity::new(7),
            SiteInfo {
                full_name: "Open School".to_string(),
                badges_enabled: true,
            },
            DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
        )
    }

    fn row(id: i64, name: &str, hash: Option<&str>) -> UserBadge {
        let mut badge = Badge::new(id, name);
        badge.description = format!("About {name}");
        UserBadge {
            badge,
            date_issued: hash.map(|_| Timestamp::Epoch(1_690_000_000)),
            unique_hash: hash.map(str::to_string),
        }
    }

    #[test]
    fn test_issued_and_unissued_cards() {
        let mut repository = MockBadgeRepository::new();
        repository
            .expect_badges_for_user()
            .withf(|id| *id == 7)
            .returning(|_| Ok(vec![row(1, "Mentor", Some("abc")), row(2, "Pioneer", None)]));

        let page = build_collection_page(&ctx(), &deps(repository));
        assert_eq!(page.heading, "My achievements");
        assert_eq!(page.cards.len(), 2);

        let issued = &page.cards[0];
        assert_eq!(issued.status, AwardStatus::Awarded);
        assert_eq!(issued.link.href(), "/badge.php?hash=abc");
        assert_eq!(issued.image_url, "/image/1");
        assert_eq!(issued.description, "About Mentor");
        assert_eq!(issued.status_label, "Awarded");

        let locked = &page.cards[1];
        assert_eq!(locked.status, AwardStatus::NotAwarded);
        assert_eq!(locked.link.href(), DISABLED_LINK);
        assert_eq!(locked.image_url, "/placeholder");
        assert!(locked.description.is_empty());
        assert_eq!(locked.status.css_class(), "badge badge-dark");
        assert_eq!(locked.modal.id, "modal2");
        assert_eq!(locked.modal.title, "Pioneer - Criteria");
        assert_eq!(locked.modal.criteria_markup, "<p>criteria of Pioneer</p>");
    }

    #[test]
    fn test_repository_failure_renders_empty_page() {
        let mut repository = MockBadgeRepository::new();
        repository.expect_badges_for_user().returning(|_| {
            Err(BadgeError::ExternalService {
                service: "badges".to_string(),
                message: "down".to_string(),
            })
        });

        let page = build_collection_page(&ctx(), &deps(repository));
        assert_eq!(page.heading, "My achievements");
        assert!(page.cards.is_empty());
    }

    #[test]
    fn test_order_follows_repository() {
        let mut repository = MockBadgeRepository::new();
        repository.expect_badges_for_user().returning(|_| {
            Ok(vec![
                row(9, "Zeta", None),
                row(1, "Alpha", Some("a1")),
                row(5, "Mu", None),
            ])
        });

        let page = build_collection_page(&ctx(), &deps(repository));
        let ids: Vec<i64> = page.cards.iter().map(|c| c.badge_id).collect();
        assert_eq!(ids, vec![9, 1, 5]);
    }
}
