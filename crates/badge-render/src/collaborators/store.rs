//! 内存徽章仓储
//!
//! 预览服务从 JSON 夹具加载数据，测试中也可以直接逐条插入。

use std::collections::HashMap;
use std::path::Path;

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use badge_shared::error::Result;

use super::BadgeRepository;
use crate::models::{IssuedBadge, UserBadge};

/// 夹具文件结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BadgeFixture {
    /// 课程 ID -> 课程全称
    pub courses: HashMap<i64, String>,
    /// 用户 ID -> 徽章列表
    pub user_badges: HashMap<i64, Vec<UserBadge>>,
    pub issued: Vec<IssuedBadge>,
}

/// 基于 DashMap 的内存仓储
#[derive(Debug, Default)]
pub struct InMemoryBadgeStore {
    courses: DashMap<i64, String>,
    user_badges: DashMap<i64, Vec<UserBadge>>,
    issued: DashMap<String, IssuedBadge>,
}

impl InMemoryBadgeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fixture(fixture: BadgeFixture) -> Self {
        let store = Self::new();
        for (id, name) in fixture.courses {
            store.insert_course(id, name);
        }
        for (user_id, badges) in fixture.user_badges {
            store.user_badges.insert(user_id, badges);
        }
        for issued in fixture.issued {
            store.insert_issued(issued);
        }
        store
    }

    /// 从 JSON 夹具文件加载
    pub fn load_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let fixture: BadgeFixture = serde_json::from_str(&raw)?;

        info!(
            path = %path.display(),
            users = fixture.user_badges.len(),
            issued = fixture.issued.len(),
            "徽章夹具已加载"
        );
        Ok(Self::from_fixture(fixture))
    }

    pub fn insert_course(&self, course_id: i64, full_name: impl Into<String>) {
        self.courses.insert(course_id, full_name.into());
    }

    /// 追加一行用户徽章，保持插入顺序
    pub fn push_user_badge(&self, user_id: i64, badge: UserBadge) {
        self.user_badges.entry(user_id).or_default().push(badge);
    }

    pub fn insert_issued(&self, issued: IssuedBadge) {
        self.issued.insert(issued.hash.clone(), issued);
    }

    /// 按校验哈希查找颁发记录
    pub fn find_issued(&self, hash: &str) -> Option<IssuedBadge> {
        self.issued.get(hash).map(|entry| entry.value().clone())
    }
}

impl BadgeRepository for InMemoryBadgeStore {
    fn badges_for_user(&self, user_id: i64) -> Result<Vec<UserBadge>> {
        let badges = self
            .user_badges
            .get(&user_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default();
        debug!(user_id, count = badges.len(), "查询用户徽章");
        Ok(badges)
    }

    fn course_full_name(&self, course_id: i64) -> Result<Option<String>> {
        Ok(self
            .courses
            .get(&course_id)
            .map(|entry| entry.value().clone()))
    }
}
