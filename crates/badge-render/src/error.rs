//! 渲染层错误类型
//!
//! 渲染本身不产生业务错误，这里只覆盖时间戳规范化失败、
//! 预览服务的查找失败，以及透传的上游协作方错误。

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use badge_shared::error::BadgeError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("无法解析的时间戳: {value}")]
    InvalidTimestamp { value: String },

    #[error("已颁发徽章不存在: hash={0}")]
    IssuedBadgeNotFound(String),

    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Upstream(#[from] BadgeError),
}

pub type Result<T> = std::result::Result<T, RenderError>;

impl RenderError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidTimestamp { .. } => "INVALID_TIMESTAMP",
            Self::IssuedBadgeNotFound(_) => "ISSUED_BADGE_NOT_FOUND",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::Upstream(e) => e.code(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::IssuedBadgeNotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(BadgeError::NotFound { .. }) => StatusCode::NOT_FOUND,
            Self::Upstream(BadgeError::ExternalServiceTimeout { .. }) => {
                StatusCode::GATEWAY_TIMEOUT
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RenderError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 服务端错误只返回通用提示，详细信息仅记录日志
        let message = if status.is_server_error() {
            tracing::error!(error = %self, code = self.code(), "徽章页面渲染失败");
            "服务内部错误，请稍后重试".to_string()
        } else {
            self.to_string()
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = RenderError::InvalidTimestamp {
            value: "yesterday-ish".to_string(),
        };
        assert_eq!(err.code(), "INVALID_TIMESTAMP");
        assert_eq!(err.to_string(), "无法解析的时间戳: yesterday-ish");

        let upstream = RenderError::from(BadgeError::ExternalService {
            service: "badge-repository".to_string(),
            message: "boom".to_string(),
        });
        assert_eq!(upstream.code(), "EXTERNAL_SERVICE_ERROR");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            RenderError::IssuedBadgeNotFound("abc".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RenderError::InvalidTimestamp {
                value: "x".to_string()
            }
            .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RenderError::from(BadgeError::ExternalServiceTimeout {
                service: "badge-repository".to_string()
            })
            .status_code(),
            StatusCode::GATEWAY_TIMEOUT
        );
    }

    #[test]
    fn test_not_found_response_keeps_message() {
        let response = RenderError::IssuedBadgeNotFound("deadbeef".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
