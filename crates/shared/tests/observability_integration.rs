//! 可观测性模块集成测试
//!
//! 测试 metrics、config 模块在 crate 外部的使用方式。

// ============================================================================
// 指标记录测试
// ============================================================================

mod metrics_tests {
    use badge_shared::observability::metrics::{
        record_badge_render, record_http_request, record_repository_failure,
    };

    #[test]
    fn test_record_http_request() {
        record_http_request("GET", "/badges/mine", 200, 0.05);
        record_http_request("GET", "/badges/badge.php", 404, 0.01);
        record_http_request("GET", "/badges/badge.php", 500, 0.25);
    }

    #[test]
    fn test_record_badge_render() {
        record_badge_render("issued", "ok", 0.003);
        record_badge_render("collection", "ok", 0.010);
        record_badge_render("issued", "error", 0.001);
    }

    #[test]
    fn test_record_repository_failure() {
        record_repository_failure("badges_for_user");
        record_repository_failure("course_full_name");
    }
}

// ============================================================================
// 配置测试
// ============================================================================

mod config_tests {
    use badge_shared::config::AppConfig;
    use badge_shared::error::BadgeError;

    #[test]
    fn test_load_without_files_uses_defaults() {
        // SAFETY: 集成测试二进制内只有该测试修改 CONFIG_DIR
        unsafe {
            std::env::set_var("CONFIG_DIR", "/nonexistent-config-dir");
        }
        let config = AppConfig::load("badge-render").expect("defaults should load");
        assert_eq!(config.service_name, "badge-render");
        assert_eq!(config.server.port, 8080);
        assert!(config.site.badges_enabled);
        unsafe {
            std::env::remove_var("CONFIG_DIR");
        }
    }

    #[test]
    fn test_config_error_maps_to_badge_error() {
        let err: BadgeError = config::ConfigError::NotFound("site".to_string()).into();
        assert_eq!(err.code(), "CONFIG_ERROR");
    }
}

// ============================================================================
// 初始化测试
// ============================================================================

mod init_tests {
    use badge_shared::config::ObservabilityConfig;
    use badge_shared::observability;

    #[test]
    fn test_init_without_metrics_exporter() {
        let config = ObservabilityConfig {
            metrics_enabled: false,
            ..ObservabilityConfig::default()
        }
        .with_service_name("observability-test");

        let guard = tokio_test::block_on(observability::init(&config));
        assert!(guard.is_ok());
    }
}
