//! # Application Error Handling System
//!
//! 병원 조회 백엔드의 통합 에러 처리 시스템입니다.
//! 서비스/리포지토리 계층의 모든 실패를 [`AppError`] 하나로 모으고,
//! Actix-Web의 `ResponseError`를 통해 일관된 JSON 응답으로 변환합니다.
//!
//! ## 에러 분류
//!
//! - **입력 오류**: 잘못된 페이지 번호, 알 수 없는 진료과목 코드 등
//! - **도메인 오류**: 병원/좋아요/사용자 없음, 좋아요 중복
//! - **업스트림 오류**: MongoDB 또는 카카오 로컬 API 호출 실패
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 입력값 검증 실패 |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `ConflictError` | 409 Conflict | 좋아요/사용자 중복 |
//! | `DatabaseError` | 503 Service Unavailable | 저장소 접근 실패 |
//! | `ExternalServiceError` | 503 Service Unavailable | 외부 API 실패 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! let hospital = self.hospital_repo
//!     .find_detail(hospital_id)
//!     .await?
//!     .ok_or_else(|| AppError::NotFound("병원을 찾을 수 없습니다".to_string()))?;
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict error: {0}")]
    ConflictError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 저장소나 외부 API에 닿지 못해 발생한 에러인지 확인합니다.
    pub fn is_upstream_unavailable(&self) -> bool {
        matches!(self, AppError::DatabaseError(_) | AppError::ExternalServiceError(_))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::ExternalServiceError(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("page must be >= 1".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Hospital not found".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Like already exists".to_string());
        assert_eq!(error.error_response().status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_upstream_errors_map_to_service_unavailable() {
        let db = AppError::DatabaseError("connection refused".to_string());
        let api = AppError::ExternalServiceError("timeout".to_string());

        assert!(db.is_upstream_unavailable());
        assert!(api.is_upstream_unavailable());
        assert_eq!(db.error_response().status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(api.error_response().status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(!AppError::NotFound("x".to_string()).is_upstream_unavailable());
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
