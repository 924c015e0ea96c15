//! 颁发详情页的视图模型
//!
//! 页面上所有的取舍（是否过期、是否显示操作按钮、哪些字段出现）都在这里决定，
//! 模板只负责把结果转成 HTML。

use crate::collaborators::{Collaborators, LocaleArgs};
use crate::context::RenderContext;
use crate::error::Result;
use crate::models::{IssuedBadge, OpenBadgesVersion, non_empty};

use super::evidence::{EvidenceItem, evidence_items};

/// 没有明确过期时间时的宽限期（秒），以渲染时刻为起点
pub const EXPIRY_GRACE_SECS: i64 = 86_400;

/// 徽章图片区
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeImage {
    pub src: String,
    pub alt: String,
    /// 已过期时的提示文案
    pub expired_label: Option<String>,
}

/// 图片下方的操作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BadgeAction {
    /// 下载烘焙后的徽章（POST 表单）
    Download { url: String, label: String },
    /// v1 背包：由前端脚本读取断言地址完成添加
    BackpackButton { assertion_url: String, label: String },
    /// v2 及以后：跳转到服务端添加入口
    BackpackLink { url: String, label: String },
}

/// 定义列表中一项的值
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValue {
    Text(String),
    MailLink(String),
    /// 新窗口打开的外部链接
    ExternalLink(String),
    /// 协作方提供的 HTML 片段
    Markup(String),
    Evidence {
        intro: String,
        items: Vec<EvidenceItem>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub term: String,
    pub value: EntryValue,
}

impl Entry {
    fn new(term: String, value: EntryValue) -> Self {
        Self { term, value }
    }
}

/// 带标题的定义列表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: String,
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// 带标题的链接列表
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkList {
    pub heading: String,
    pub links: Vec<Link>,
}

/// 颁发详情页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedBadgePage {
    pub image: BadgeImage,
    pub actions: Vec<BadgeAction>,
    /// 依次为获得者、颁发者、徽章详情、颁发详情
    pub sections: Vec<Section>,
    pub endorsement: Option<String>,
    pub related: Option<LinkList>,
    pub alignments: Option<LinkList>,
}

impl IssuedBadgePage {
    pub fn is_expired(&self) -> bool {
        self.image.expired_label.is_some()
    }
}

/// 组装颁发详情页
pub fn build_issued_page(
    issued: &IssuedBadge,
    ctx: &RenderContext,
    deps: &Collaborators,
) -> Result<IssuedBadgePage> {
    let now = ctx.now_epoch();
    let issued_on = issued.issuance.issued_on.to_epoch()?;
    let explicit_expiry = issued
        .issuance
        .expires
        .as_ref()
        .map(|ts| ts.to_epoch())
        .transpose()?;
    let expiration = explicit_expiry.unwrap_or(now + EXPIRY_GRACE_SECS);
    let expired = expiration < now;

    let image = BadgeImage {
        src: issued.image_url.clone(),
        alt: issued.badge.image_caption.clone().unwrap_or_default(),
        expired_label: expired.then(|| {
            deps.strings.get_string(
                "expireddate",
                &LocaleArgs::value(deps.dates.format_date(expiration)),
            )
        }),
    };

    let actions = build_actions(issued, ctx, deps, expiration > now)?;

    let sections = vec![
        recipient_section(issued, ctx, deps),
        issuer_section(issued, deps),
        badge_section(issued, deps)?,
        issuance_section(issued, deps, issued_on, explicit_expiry, now),
    ];

    let endorsement = issued
        .badge
        .endorsement
        .as_ref()
        .map(|e| deps.formatter.endorsement_markup(e));

    let related = (!issued.badge.related.is_empty()).then(|| LinkList {
        heading: text(deps, "relatedbages"),
        links: issued
            .badge
            .related
            .iter()
            .map(|r| Link {
                label: r.name.clone(),
                href: deps.urls.related_badge_url(r.id),
            })
            .collect(),
    });

    let alignments = (!issued.badge.alignments.is_empty()).then(|| LinkList {
        heading: text(deps, "alignment"),
        links: issued
            .badge
            .alignments
            .iter()
            .map(|a| Link {
                label: a.target_name.clone(),
                href: deps.urls.alignment_url(a, &issued.hash),
            })
            .collect(),
    });

    Ok(IssuedBadgePage {
        image,
        actions,
        sections,
        endorsement,
        related,
        alignments,
    })
}

fn text(deps: &Collaborators, key: &str) -> String {
    deps.strings.get_string(key, &LocaleArgs::None)
}

/// 只有获得者本人且站点启用徽章时才显示操作；背包还要求未过期且已关联背包
fn build_actions(
    issued: &IssuedBadge,
    ctx: &RenderContext,
    deps: &Collaborators,
    unexpired: bool,
) -> Result<Vec<BadgeAction>> {
    if !ctx.viewer_is(issued.recipient.id) || !ctx.site.badges_enabled {
        return Ok(Vec::new());
    }

    let mut actions = vec![BadgeAction::Download {
        url: deps.urls.download_url(&issued.hash),
        label: text(deps, "download"),
    }];

    let backpack = deps.backpack.config();
    if backpack.allow_external
        && unexpired
        && deps.backpack.user_has_backpack(ctx.viewer.user_id)?
    {
        let label = text(deps, "addtobackpack");
        actions.push(match backpack.api_version {
            OpenBadgesVersion::V1 => BadgeAction::BackpackButton {
                assertion_url: deps.urls.assertion_url(&issued.hash),
                label,
            },
            OpenBadgesVersion::V2 | OpenBadgesVersion::V2p1 => BadgeAction::BackpackLink {
                url: deps.urls.backpack_add_url(&issued.hash),
                label,
            },
        });
    }

    Ok(actions)
}

fn recipient_section(issued: &IssuedBadge, ctx: &RenderContext, deps: &Collaborators) -> Section {
    let recipient = &issued.recipient;
    let name = if recipient.deleted {
        deps.strings.get_string(
            "error:userdeleted",
            &LocaleArgs::named([
                ("user", recipient.full_name.as_str()),
                ("site", ctx.site.full_name.as_str()),
            ]),
        )
    } else {
        recipient.full_name.clone()
    };

    Section {
        heading: text(deps, "recipientdetails"),
        entries: vec![Entry::new(text(deps, "name"), EntryValue::Text(name))],
    }
}

fn issuer_section(issued: &IssuedBadge, deps: &Collaborators) -> Section {
    let badge = &issued.badge;
    let mut entries = vec![Entry::new(
        text(deps, "issuername"),
        EntryValue::Text(badge.issuer_name.clone()),
    )];
    if let Some(contact) = non_empty(&badge.issuer_contact) {
        entries.push(Entry::new(
            text(deps, "contact"),
            EntryValue::MailLink(contact.to_string()),
        ));
    }

    Section {
        heading: text(deps, "issuerdetails"),
        entries,
    }
}

fn badge_section(issued: &IssuedBadge, deps: &Collaborators) -> Result<Section> {
    let badge = &issued.badge;
    let mut entries = vec![Entry::new(
        text(deps, "name"),
        EntryValue::Text(badge.name.clone()),
    )];

    if let Some(version) = non_empty(&badge.version) {
        entries.push(Entry::new(
            text(deps, "version"),
            EntryValue::Text(version.to_string()),
        ));
    }
    if let Some(language) = non_empty(&badge.language) {
        entries.push(Entry::new(
            text(deps, "language"),
            EntryValue::Text(language.to_string()),
        ));
    }
    entries.push(Entry::new(
        text(deps, "description"),
        EntryValue::Text(badge.description.clone()),
    ));

    let author = &badge.image_author;
    if let Some(name) = non_empty(&author.name) {
        entries.push(Entry::new(
            text(deps, "imageauthorname"),
            EntryValue::Text(name.to_string()),
        ));
    }
    if let Some(email) = non_empty(&author.email) {
        entries.push(Entry::new(
            text(deps, "imageauthoremail"),
            EntryValue::MailLink(email.to_string()),
        ));
    }
    if let Some(url) = non_empty(&author.url) {
        entries.push(Entry::new(
            text(deps, "imageauthorurl"),
            EntryValue::ExternalLink(url.to_string()),
        ));
    }
    if let Some(caption) = non_empty(&badge.image_caption) {
        entries.push(Entry::new(
            text(deps, "imagecaption"),
            EntryValue::Text(caption.to_string()),
        ));
    }

    if let Some(course_id) = badge.course_scope()
        && let Some(course) = deps.repository.course_full_name(course_id)?
    {
        entries.push(Entry::new(text(deps, "course"), EntryValue::Text(course)));
    }

    entries.push(Entry::new(
        text(deps, "bcriteria"),
        EntryValue::Markup(deps.formatter.criteria_markup(badge)),
    ));

    Ok(Section {
        heading: text(deps, "badgedetails"),
        entries,
    })
}

fn issuance_section(
    issued: &IssuedBadge,
    deps: &Collaborators,
    issued_on: i64,
    explicit_expiry: Option<i64>,
    now: i64,
) -> Section {
    let mut entries = vec![Entry::new(
        text(deps, "dateawarded"),
        EntryValue::Text(deps.dates.format_date(issued_on)),
    )];

    if let Some(expiry) = explicit_expiry {
        let mut value = deps.dates.format_date(expiry);
        if expiry < now {
            value.push_str(&text(deps, "warnexpired"));
        }
        entries.push(Entry::new(text(deps, "expirydate"), EntryValue::Text(value)));
    }

    let items = evidence_items(issued, deps.strings.as_ref());
    if !items.is_empty() {
        entries.push(Entry::new(
            text(deps, "evidence"),
            EntryValue::Evidence {
                intro: text(deps, "completioninfo"),
                items,
            },
        ));
    }

    Section {
        heading: text(deps, "issuancedetails"),
        entries,
    }
}
