//! # Hospital HTTP Handlers
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/hospitals/ids` | 전체 병원 ID | 200 OK |
//! | `GET` | `/hospitals?address1&address2&page` | 지역별 병원 목록 | 200 OK |
//! | `GET` | `/hospitals/types/{type_code}?address1&address2&page` | 진료과목 + 지역별 목록 | 200 OK |
//! | `GET` | `/hospitals/{hospital_id}` | 병원 상세 | 200 OK |
//! | `GET` | `/hospitals/{hospital_id}/pharmacies` | 주변 약국 | 200 OK |

use actix_web::{web, HttpResponse, get};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::HospitalListQuery;
use crate::services::hospitals::HospitalService;

#[get("/ids")]
pub async fn list_hospital_ids() -> Result<HttpResponse, AppError> {
    let service = HospitalService::instance()?;
    let ids = service.get_all_hospital_ids().await?;

    Ok(HttpResponse::Ok().json(ids))
}

/// 지역별 병원 목록
///
/// ```bash
/// curl "http://localhost:8080/api/v1/hospitals?address1=서울특별시&address2=동작구&page=1"
/// ```
///
/// 응답은 이름 오름차순 요약 목록이며, 범위를 넘는 페이지는 빈 배열입니다.
///
/// ```json
/// [{ "hpid": "A1100401", "name": "가나내과의원", "address": "서울특별시 동작구 ...", "rating": 4.5 }]
/// ```
#[get("")]
pub async fn list_hospitals(
    query: web::Query<HospitalListQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = HospitalService::instance()?;
    let hospitals = service
        .get_by_address(&query.address1, &query.address2, query.page)
        .await?;

    Ok(HttpResponse::Ok().json(hospitals))
}

/// 진료과목 코드(`D001` 등) + 지역별 병원 목록. 알 수 없는 코드는 400입니다.
#[get("/types/{type_code}")]
pub async fn list_hospitals_by_type(
    type_code: web::Path<String>,
    query: web::Query<HospitalListQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = HospitalService::instance()?;
    let hospitals = service
        .get_by_type_and_address(&type_code, &query.address1, &query.address2, query.page)
        .await?;

    Ok(HttpResponse::Ok().json(hospitals))
}

/// 병원 상세
///
/// ```json
/// {
///   "hpid": "A1100401",
///   "name": "가나내과의원",
///   "phone": "02-000-0000",
///   "address": "서울특별시 동작구 ...",
///   "description": "흑석역 1번 출구 앞",
///   "likeCount": 3,
///   "time": ["09:00 - 18:00", "09:00 - 18:00", "09:00 - 18:00", "09:00 - 18:00", "09:00 - 18:00", "휴진"]
/// }
/// ```
#[get("/{hospital_id}")]
pub async fn get_hospital(
    hospital_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = HospitalService::instance()?;
    let detail = service.get_detail(&hospital_id).await?;

    Ok(HttpResponse::Ok().json(detail))
}

#[get("/{hospital_id}/pharmacies")]
pub async fn list_nearby_pharmacies(
    hospital_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = HospitalService::instance()?;
    let pharmacies = service.get_pharmacies_near(&hospital_id).await?;

    Ok(HttpResponse::Ok().json(pharmacies))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use actix_web::http::StatusCode;
    use serde_json::Value;
    use crate::handlers::test_support::{install_services, DONGJAK, GWANAK, SEOUL};
    use crate::routes::configure_all_routes;

    #[actix_web::test]
    async fn test_list_hospitals_by_address() {
        install_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/hospitals?address1={}&address2={}", SEOUL, DONGJAK))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["hpid"], "H1");
        assert_eq!(body[0]["rating"], 4.5);
        assert_eq!(body[1]["hpid"], "H2");
        assert_eq!(body[1]["rating"], 0.0);
    }

    #[actix_web::test]
    async fn test_page_zero_is_bad_request() {
        install_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/hospitals?address1={}&address2={}&page=0", SEOUL, DONGJAK))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_huge_page_is_bad_request() {
        install_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri(&format!(
                "/api/v1/hospitals?address1={}&address2={}&page={}",
                SEOUL, DONGJAK, i64::MAX
            ))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_list_hospitals_by_type() {
        install_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/hospitals/types/D001?address1={}&address2={}", SEOUL, GWANAK))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().map(Vec::len), Some(1));
        assert_eq!(body[0]["hpid"], "H3");

        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/hospitals/types/X999?address1={}&address2={}", SEOUL, GWANAK))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_ids_route_is_not_taken_as_hospital_id() {
        install_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/hospitals/ids").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.as_array().map(Vec::len), Some(3));
    }

    #[actix_web::test]
    async fn test_hospital_detail() {
        install_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/hospitals/H2").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["name"], "다라소아과");
        assert_eq!(body["likeCount"], 0);
        assert_eq!(body["time"][0], "09:00 - 18:00");

        let req = test::TestRequest::get().uri("/api/v1/hospitals/NOPE").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_nearby_pharmacies() {
        install_services();
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/api/v1/hospitals/H1/pharmacies").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body[0]["name"], "흑석온누리약국");
        assert_eq!(body[0]["address"], "서울 동작구 흑석동 224-1");
    }
}
