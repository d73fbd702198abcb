use std::sync::Arc;
use log::info;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator};
use crate::domain::dto::users::{CreateUserRequest, UserResponse};
use crate::domain::entities::users::User;
use crate::repositories::users::UserRepository;

/// 사용자 프로필 등록/조회 서비스
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
}

impl Service for UserService {
    fn name(&self) -> &str {
        "user"
    }
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    pub fn instance() -> AppResult<Arc<Self>> {
        ServiceLocator::try_get::<Self>()
    }

    /// 새 사용자 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 비어 있는 필드
    /// * `AppError::ConflictError` - 같은 `userId`가 이미 등록됨
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let user = User::of(
            &request.user_id,
            &request.user_name,
            &request.user_email,
            &request.address1,
            &request.address2,
        )?;

        if self.user_repo.find_by_id(user.user_id()).await?.is_some() {
            return Err(AppError::ConflictError("이미 등록된 사용자입니다".to_string()));
        }

        self.user_repo.create(&user).await?;

        info!("사용자 등록: {}", user.user_id());

        Ok(UserResponse::from(user))
    }

    pub async fn get_user(&self, user_id: &str) -> AppResult<UserResponse> {
        self.user_repo
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}
