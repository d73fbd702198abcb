//! 리뷰 리포지토리
//!
//! 리뷰 자체의 CRUD는 다른 서비스가 소유하며, 여기서는 평균 평점만 제공합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;

pub mod review_repo;

pub use review_repo::ReviewMongoRepository;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// 병원의 평균 평점. 리뷰가 없으면 0.0
    async fn average_rating(&self, hospital_id: &str) -> AppResult<f64>;
}
