//! 좋아요 관계 리포지토리
//!
//! (userId, hospitalId) 쌍의 존재 확인, 생성, 삭제, 병원별 개수 집계를 담당합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::likes::Like;

pub mod like_repo;

pub use like_repo::LikeMongoRepository;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn exists(&self, user_id: &str, hospital_id: &str) -> AppResult<bool>;

    /// 좋아요를 저장합니다.
    ///
    /// 같은 쌍이 이미 있으면 `AppError::ConflictError`를 반환합니다.
    /// 존재 확인과 저장 사이의 경합은 저장소의 유니크 제약이 막아야 합니다.
    async fn save(&self, like: &Like) -> AppResult<()>;

    /// 삭제된 문서가 있으면 `true`
    async fn delete(&self, user_id: &str, hospital_id: &str) -> AppResult<bool>;

    async fn count_by_hospital(&self, hospital_id: &str) -> AppResult<u64>;

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Like>>;
}
