//! # Kakao Local API Configuration
//!
//! 병원 주변 약국 검색에 사용하는 카카오 로컬 API 설정입니다.
//!
//! ```bash
//! export REST_API_KEY="your-kakao-rest-api-key"
//! export KAKAO_BASE_URL="https://dapi.kakao.com"
//! export KAKAO_SEARCH_RADIUS="1000"   # 미터, 0-20000
//! export KAKAO_TIMEOUT_SECS="5"
//! ```

use std::env;
use std::time::Duration;

pub struct KakaoConfig;

impl KakaoConfig {
    /// 카테고리 검색 반경 상한 (카카오 API 제약)
    pub const MAX_RADIUS_METERS: u32 = 20_000;

    /// 카카오 REST API 키. 없으면 빈 문자열이며 요청 시점에 거부됩니다.
    pub fn rest_api_key() -> String {
        env::var("REST_API_KEY").unwrap_or_else(|_| {
            log::warn!("REST_API_KEY not set, pharmacy lookup will be unavailable");
            String::new()
        })
    }

    pub fn base_url() -> String {
        env::var("KAKAO_BASE_URL")
            .unwrap_or_else(|_| "https://dapi.kakao.com".to_string())
            .trim_end_matches('/')
            .to_string()
    }

    /// 병원 좌표 기준 약국 검색 반경(미터). 기본값: 1000
    pub fn search_radius() -> u32 {
        env::var("KAKAO_SEARCH_RADIUS")
            .ok()
            .and_then(|radius| radius.parse::<u32>().ok())
            .map(|radius| radius.min(Self::MAX_RADIUS_METERS))
            .unwrap_or(1000)
    }

    /// 요청 타임아웃. 기본값: 5초
    pub fn timeout() -> Duration {
        let secs = env::var("KAKAO_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(5);
        Duration::from_secs(secs)
    }
}
