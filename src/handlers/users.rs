//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 사용자 등록 | 201 Created / 409 Conflict |
//! | `GET` | `/users/{user_id}` | 사용자 조회 | 200 OK / 404 Not Found |

use actix_web::{web, HttpResponse, get, post};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::CreateUserRequest;
use crate::services::users::UserService;

/// 사용자 등록 핸들러
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{
///     "userId": "kakao_1234",
///     "userName": "홍길동",
///     "userEmail": "hong@example.com",
///     "address1": "서울특별시",
///     "address2": "동작구"
///   }'
/// ```
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = UserService::instance()?;
    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("/{user_id}")]
pub async fn get_user(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance()?;
    let user = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}
