//! API 라우트 설정 모듈
//!
//! 병원, 좋아요, 사용자 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{web, HttpResponse};
use chrono;
use serde_json::json;
use crate::core::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 쿼리/경로/JSON 추출 실패도 `AppError::ValidationError`와 같은 JSON 형태의 400으로 응답합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(|err, _| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::JsonConfig::default().error_handler(|err, _| {
        AppError::ValidationError(err.to_string()).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _| {
        AppError::ValidationError(err.to_string()).into()
    }));

    // Health check endpoint
    cfg.service(health_check);

    configure_hospital_routes(cfg);
    configure_user_routes(cfg);
}

/// 병원 관련 라우트를 설정합니다
///
/// - `GET /api/v1/hospitals/ids` - 전체 병원 ID
/// - `GET /api/v1/hospitals?address1&address2&page` - 지역별 목록
/// - `GET /api/v1/hospitals/types/{type_code}?address1&address2&page` - 진료과목별 목록
/// - `GET /api/v1/hospitals/{hospital_id}` - 상세
/// - `GET /api/v1/hospitals/{hospital_id}/pharmacies` - 주변 약국
///
/// `/ids`는 `/{hospital_id}`보다 먼저 등록되어야 합니다.
fn configure_hospital_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/hospitals")
            .service(handlers::hospitals::list_hospital_ids)
            .service(handlers::hospitals::list_hospitals)
            .service(handlers::hospitals::list_hospitals_by_type)
            .service(handlers::hospitals::list_nearby_pharmacies)
            .service(handlers::hospitals::get_hospital)
    );
}

/// 사용자와 좋아요 라우트를 설정합니다
///
/// 둘 다 `/api/v1/users` 아래에 있으므로 하나의 scope로 묶습니다.
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users/kakao_1234/likes/A1100401
/// curl -X DELETE http://localhost:8080/api/v1/users/kakao_1234/likes/A1100401
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::likes::list_liked_hospitals)
            .service(handlers::likes::like_hospital)
            .service(handlers::likes::unlike_hospital)
            .service(handlers::users::get_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "socdoc_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "places": "Kakao Local"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "socdoc_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "places": "Kakao Local"
        }
    }))
}
