//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserMongoRepository, UserRepository};
//!
//! let user = user_repo.find_by_id("kakao_1234").await?;
//! ```

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::users::User;

pub mod user_repo;

pub use user_repo::UserMongoRepository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>>;

    /// 같은 `userId`가 이미 있으면 `AppError::ConflictError`
    async fn create(&self, user: &User) -> AppResult<()>;
}
