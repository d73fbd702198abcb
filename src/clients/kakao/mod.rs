//! # 카카오 로컬 API 클라이언트
//!
//! 좌표를 받아 주변 장소를 검색하는 [`PlacesClient`] trait과
//! 카카오 로컬 카테고리 검색 구현체 [`KakaoLocalClient`]를 제공합니다.
//!
//! ```rust,ignore
//! let client = KakaoLocalClient::from_env()?;
//! let places = client.find_pharmacies(37.5070, 126.9608).await?;
//! ```

use async_trait::async_trait;
use crate::core::errors::AppResult;

pub mod local_client;
pub mod models;

#[cfg(test)]
pub mod memory;

pub use local_client::KakaoLocalClient;
pub use models::{KakaoPlace, KakaoSearchResponse};

#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// 위도/경도 주변 약국을 거리순으로 반환합니다. 결과가 없으면 빈 목록입니다.
    async fn find_pharmacies(&self, latitude: f64, longitude: f64) -> AppResult<Vec<KakaoPlace>>;
}
