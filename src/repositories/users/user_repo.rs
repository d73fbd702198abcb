//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 구현입니다.
//! `userId`에 유니크 인덱스를 두어 중복 등록을 저장소 수준에서 막습니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::info;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};
use singleton_macro::repository;
use crate::{
    core::{errors::{AppError, AppResult}, registry::Repository},
    db::Database,
    domain::entities::users::User,
    repositories::{is_duplicate_key, users::UserRepository},
};

#[repository(name = "user_mongo", collection = "users")]
pub struct UserMongoRepository {
    db: Arc<Database>,
}

#[async_trait]
impl UserRepository for UserMongoRepository {
    async fn find_by_id(&self, user_id: &str) -> AppResult<Option<User>> {
        let user = self.collection::<User>()
            .find_one(doc! { "userId": user_id })
            .await?;
        Ok(user)
    }

    async fn create(&self, user: &User) -> AppResult<()> {
        match self.collection::<User>().insert_one(user).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AppError::ConflictError(
                "이미 등록된 사용자입니다".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }
}

impl UserMongoRepository {
    /// 조회 패턴에 맞는 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let user_id_index = IndexModel::builder()
            .keys(doc! { "userId": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_id_unique".to_string())
                .build())
            .build();

        self.collection::<User>().create_index(user_id_index).await?;
        info!("✅ {} 인덱스 준비 완료 ({})", self.name(), self.collection_name());
        Ok(())
    }
}
