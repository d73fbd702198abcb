//! # Like HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/users/{user_id}/likes` | 좋아요한 병원 목록 | 200 OK |
//! | `POST` | `/users/{user_id}/likes/{hospital_id}` | 좋아요 | 201 Created / 409 Conflict |
//! | `DELETE` | `/users/{user_id}/likes/{hospital_id}` | 좋아요 취소 | 204 No Content / 404 Not Found |

use actix_web::{web, HttpResponse, get, post, delete};
use crate::core::errors::AppError;
use crate::services::hospitals::HospitalService;

#[get("/{user_id}/likes")]
pub async fn list_liked_hospitals(
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = HospitalService::instance()?;
    let hospitals = service.get_liked_by_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(hospitals))
}

#[post("/{user_id}/likes/{hospital_id}")]
pub async fn like_hospital(
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, hospital_id) = path.into_inner();

    let service = HospitalService::instance()?;
    let like = service.like(&user_id, &hospital_id).await?;

    Ok(HttpResponse::Created().json(like))
}

#[delete("/{user_id}/likes/{hospital_id}")]
pub async fn unlike_hospital(
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (user_id, hospital_id) = path.into_inner();

    let service = HospitalService::instance()?;
    service.unlike(&user_id, &hospital_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
