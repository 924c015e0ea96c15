//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// 可观测性配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// 服务名称，用于标识日志和指标的来源
    pub service_name: String,
    pub log_level: String,
    /// 是否启用 JSON 格式日志（否则为人类可读格式）
    pub json_logs: bool,
    pub metrics_enabled: bool,
    /// Prometheus 指标导出端口
    pub metrics_port: u16,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            service_name: "unknown-service".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            metrics_enabled: true,
            metrics_port: 9090,
        }
    }
}

impl ObservabilityConfig {
    /// 注入服务名，未单独配置时与 AppConfig 保持一致
    pub fn with_service_name(mut self, service_name: &str) -> Self {
        self.service_name = service_name.to_string();
        self
    }
}

/// 站点配置
///
/// 渲染时作为显式参数传入，不通过全局状态读取
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// 站点全称，用于"用户已删除"等提示文案
    pub full_name: String,
    /// 站点根地址，所有链接和图片地址以此为前缀
    pub wwwroot: String,
    /// 当前主题名称，用于主题相对的占位图地址
    pub theme: String,
    /// 全局是否启用徽章
    pub badges_enabled: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            full_name: "Learning Site".to_string(),
            wwwroot: "http://localhost:8080".to_string(),
            theme: "fordson".to_string(),
            badges_enabled: true,
        }
    }
}

/// 外部背包（Backpack）配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackpackSettings {
    /// 是否允许关联外部背包
    pub allow_external: bool,
    /// 当前启用的 Open Badges API 版本：v1 / v2 / v2p1
    pub api_version: String,
    /// 已关联背包的用户 ID（预览服务使用）
    pub connected_users: Vec<i64>,
}

impl Default for BackpackSettings {
    fn default() -> Self {
        Self {
            allow_external: false,
            api_version: "v2".to_string(),
            connected_users: Vec::new(),
        }
    }
}

/// 渲染配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// 未获得徽章时展示的主题图片名
    pub placeholder_image: String,
    /// 界面语言：en / pt_br
    pub language: String,
    /// 日期格式（strftime 语法）
    pub date_format: String,
    /// 观看者时区相对 UTC 的偏移（秒）
    pub utc_offset_seconds: i32,
    /// 徽章数据样例文件，预览服务使用
    pub fixture_path: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            placeholder_image: "badge_oculto".to_string(),
            language: "en".to_string(),
            date_format: "%A, %d %B %Y, %I:%M %p".to_string(),
            utc_offset_seconds: 0,
            fixture_path: "config/fixtures/badges.json".to_string(),
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub server: ServerConfig,
    pub site: SiteConfig,
    pub backpack: BackpackSettings,
    pub render: RenderConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. config/{service_name}.toml（服务特定配置）
    /// 4. 环境变量（BADGE_ 前缀，如 BADGE_SITE__FULL_NAME -> site.full_name）
    /// 5. 服务特定端口环境变量（如 BADGE_RENDER_PORT）
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        // .env 文件可选，不存在时忽略
        let _ = dotenvy::dotenv();

        let env = std::env::var("BADGE_ENV").unwrap_or_else(|_| "development".to_string());

        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            .add_source(File::from(Path::new(&config_dir).join("default.toml")).required(false))
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", env))).required(false),
            )
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", service_name)))
                    .required(false),
            )
            // 双下划线分隔层级，单下划线保留在字段名中
            .add_source(
                Environment::with_prefix("BADGE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        if let Some(port) = Self::get_service_port_from_env(service_name) {
            config.server.port = port;
        }

        Ok(config)
    }

    /// 从环境变量获取服务特定端口
    ///
    /// 将 "badge-render" 转换为 "BADGE_RENDER_PORT"
    fn get_service_port_from_env(service_name: &str) -> Option<u16> {
        let env_var_name = Self::port_env_var_name(service_name);
        std::env::var(&env_var_name)
            .ok()
            .and_then(|v| v.parse().ok())
    }

    fn port_env_var_name(service_name: &str) -> String {
        format!("{}_PORT", service_name.to_uppercase().replace('-', "_"))
    }

    /// 获取服务地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
