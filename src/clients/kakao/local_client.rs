//! 카카오 로컬 카테고리 검색 클라이언트
//!
//! `GET /v2/local/search/category.json?category_group_code=PM9&x={lon}&y={lat}&radius={m}&sort=distance`
//! 요청에 `Authorization: KakaoAK {REST_API_KEY}` 헤더를 붙입니다.

use std::time::Duration;
use async_trait::async_trait;
use log::debug;
use crate::clients::kakao::{KakaoPlace, KakaoSearchResponse, PlacesClient};
use crate::config::KakaoConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};

/// 카카오 카테고리 그룹 코드: 약국
const PHARMACY_CATEGORY: &str = "PM9";

pub struct KakaoLocalClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    radius: u32,
}

impl KakaoLocalClient {
    /// 환경 변수([`KakaoConfig`])로 클라이언트를 만듭니다.
    pub fn from_env() -> AppResult<Self> {
        Self::new(
            KakaoConfig::rest_api_key(),
            KakaoConfig::base_url(),
            KakaoConfig::search_radius(),
            KakaoConfig::timeout(),
        )
    }

    pub fn new(api_key: String, base_url: String, radius: u32, timeout: Duration) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("카카오 HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            radius: radius.min(KakaoConfig::MAX_RADIUS_METERS),
        })
    }

    fn category_url(&self) -> String {
        format!("{}/v2/local/search/category.json", self.base_url)
    }
}

#[async_trait]
impl PlacesClient for KakaoLocalClient {
    async fn find_pharmacies(&self, latitude: f64, longitude: f64) -> AppResult<Vec<KakaoPlace>> {
        if self.api_key.is_empty() {
            return Err(AppError::ExternalServiceError(
                "카카오 REST API 키가 설정되지 않았습니다".to_string(),
            ));
        }

        let query = [
            ("category_group_code", PHARMACY_CATEGORY.to_string()),
            ("x", longitude.to_string()),
            ("y", latitude.to_string()),
            ("radius", self.radius.to_string()),
            ("sort", "distance".to_string()),
        ];

        let response = self.http
            .get(self.category_url())
            .header("Authorization", format!("KakaoAK {}", self.api_key))
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::ExternalServiceError("카카오 약국 검색 시간 초과".to_string())
                } else {
                    AppError::ExternalServiceError(format!("카카오 약국 검색 요청 실패: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "카카오 약국 검색 실패 ({}): {}", status, error_text
            )));
        }

        let body = response
            .json::<KakaoSearchResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("카카오 응답 파싱 실패: {}", e)))?;

        debug!("카카오 약국 검색: ({}, {}) → {}건", latitude, longitude, body.documents.len());

        Ok(body.documents)
    }
}
