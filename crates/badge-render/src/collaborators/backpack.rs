//! 静态背包配置

use std::collections::HashSet;

use badge_shared::config::BackpackSettings;
use badge_shared::error::Result;

use super::BackpackProvider;
use crate::error::RenderError;
use crate::models::{BackpackConfig, OpenBadgesVersion};

/// 从配置读取背包开关、API 版本与已关联背包的用户
#[derive(Debug, Clone, Default)]
pub struct StaticBackpackProvider {
    config: BackpackConfig,
    connected_users: HashSet<i64>,
}

impl StaticBackpackProvider {
    pub fn new(config: BackpackConfig, connected_users: impl IntoIterator<Item = i64>) -> Self {
        Self {
            config,
            connected_users: connected_users.into_iter().collect(),
        }
    }

    pub fn from_settings(settings: &BackpackSettings) -> std::result::Result<Self, RenderError> {
        let api_version: OpenBadgesVersion = settings
            .api_version
            .parse()
            .map_err(RenderError::InvalidConfig)?;

        Ok(Self::new(
            BackpackConfig {
                allow_external: settings.allow_external,
                api_version,
            },
            settings.connected_users.iter().copied(),
        ))
    }
}

impl BackpackProvider for StaticBackpackProvider {
    fn config(&self) -> BackpackConfig {
        self.config
    }

    fn user_has_backpack(&self, user_id: i64) -> Result<bool> {
        Ok(self.connected_users.contains(&user_id))
    }
}
