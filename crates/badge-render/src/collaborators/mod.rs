//! 外部协作方接口
//!
//! 徽章查询、条件文案、地址生成、本地化、日期格式化与背包配置都由上游提供，
//! 渲染层只依赖这里定义的 trait，便于替换实现与 mock 测试。
//!
//! 模块内同时提供一套可配置的默认实现，供预览服务和测试使用。

mod backpack;
mod dates;
mod formatter;
mod localizer;
mod store;
mod urls;

use std::collections::BTreeMap;
use std::sync::Arc;

use badge_shared::config::AppConfig;
use badge_shared::error::Result;

use crate::error::RenderError;
use crate::models::{Alignment, BackpackConfig, Badge, Endorsement, UserBadge};

pub use backpack::StaticBackpackProvider;
pub use dates::ChronoDateFormatter;
pub use formatter::StandardBadgeFormatter;
pub use localizer::StringTable;
pub use store::{BadgeFixture, InMemoryBadgeStore};
pub use urls::SiteUrlResolver;

/// 徽章仓储接口
#[cfg_attr(test, mockall::automock)]
pub trait BadgeRepository: Send + Sync {
    /// 用户有资格获得的全部徽章（含已获得与未获得），保持仓储返回顺序
    fn badges_for_user(&self, user_id: i64) -> Result<Vec<UserBadge>>;

    /// 课程全称，课程不存在时返回 None
    fn course_full_name(&self, course_id: i64) -> Result<Option<String>>;
}

/// 条件与背书文案格式化接口
///
/// 返回值为 HTML 片段，渲染时原样嵌入
#[cfg_attr(test, mockall::automock)]
pub trait BadgeFormatter: Send + Sync {
    fn criteria_markup(&self, badge: &Badge) -> String;
    fn endorsement_markup(&self, endorsement: &Endorsement) -> String;
}

/// 地址生成接口
#[cfg_attr(test, mockall::automock)]
pub trait UrlResolver: Send + Sync {
    /// 颁发详情页（校验页）
    fn badge_url(&self, hash: &str) -> String;
    /// 下载烘焙后的徽章图片
    fn download_url(&self, hash: &str) -> String;
    /// Open Badges v1 断言地址
    fn assertion_url(&self, hash: &str) -> String;
    /// 服务端"加入背包"入口
    fn backpack_add_url(&self, hash: &str) -> String;
    /// 徽章图片，按站点或课程上下文解析
    fn badge_image_url(&self, badge: &Badge) -> String;
    /// 未获得徽章时的主题占位图
    fn placeholder_image_url(&self) -> String;
    fn related_badge_url(&self, badge_id: i64) -> String;
    fn alignment_url(&self, alignment: &Alignment, hash: &str) -> String;
}

/// 本地化参数
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LocaleArgs {
    #[default]
    None,
    /// 对应 `{$a}`
    Value(String),
    /// 对应 `{$a->name}`
    Named(BTreeMap<String, String>),
}

impl LocaleArgs {
    pub fn value(value: impl Into<String>) -> Self {
        Self::Value(value.into())
    }

    pub fn named<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Named(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// 本地化接口
#[cfg_attr(test, mockall::automock)]
pub trait Localizer: Send + Sync {
    fn get_string(&self, key: &str, args: &LocaleArgs) -> String;
}

/// 日期格式化接口，按观看者的语言与时区输出
#[cfg_attr(test, mockall::automock)]
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, epoch: i64) -> String;
}

/// 背包配置接口
#[cfg_attr(test, mockall::automock)]
pub trait BackpackProvider: Send + Sync {
    fn config(&self) -> BackpackConfig;
    fn user_has_backpack(&self, user_id: i64) -> Result<bool>;
}

/// 渲染所需的全部协作方
#[derive(Clone)]
pub struct Collaborators {
    pub repository: Arc<dyn BadgeRepository>,
    pub formatter: Arc<dyn BadgeFormatter>,
    pub urls: Arc<dyn UrlResolver>,
    pub strings: Arc<dyn Localizer>,
    pub dates: Arc<dyn DateFormatter>,
    pub backpack: Arc<dyn BackpackProvider>,
}

impl Collaborators {
    /// 按应用配置组装默认实现
    pub fn from_config(
        config: &AppConfig,
        repository: Arc<dyn BadgeRepository>,
    ) -> std::result::Result<Self, RenderError> {
        let strings: Arc<dyn Localizer> = Arc::new(StringTable::for_language(&config.render.language));
        let dates: Arc<dyn DateFormatter> = Arc::new(ChronoDateFormatter::new(
            &config.render.date_format,
            config.render.utc_offset_seconds,
        )?);
        let urls: Arc<dyn UrlResolver> =
            Arc::new(SiteUrlResolver::new(&config.site, &config.render.placeholder_image));
        let formatter: Arc<dyn BadgeFormatter> =
            Arc::new(StandardBadgeFormatter::new(strings.clone(), dates.clone()));
        let backpack: Arc<dyn BackpackProvider> =
            Arc::new(StaticBackpackProvider::from_settings(&config.backpack)?);

        Ok(Self {
            repository,
            formatter,
            urls,
            strings,
            dates,
            backpack,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_args_named() {
        let args = LocaleArgs::named([("site", "Escola"), ("user", "Ana")]);
        match args {
            LocaleArgs::Named(map) => {
                assert_eq!(map.get("site").map(String::as_str), Some("Escola"));
                assert_eq!(map.len(), 2);
            }
            other => panic!("unexpected args: {other:?}"),
        }
    }

    #[test]
    fn test_from_config_with_defaults() {
        let store = Arc::new(InMemoryBadgeStore::new());
        let deps = Collaborators::from_config(&AppConfig::default(), store).unwrap();
        assert_eq!(
            deps.strings.get_string("awarded", &LocaleArgs::None),
            "Awarded"
        );
        assert!(!deps.backpack.config().allow_external);
    }

    #[test]
    fn test_from_config_rejects_unknown_backpack_version() {
        let mut config = AppConfig::default();
        config.backpack.api_version = "v9".to_string();
        let store = Arc::new(InMemoryBadgeStore::new());
        assert!(Collaborators::from_config(&config, store).is_err());
    }
}
