//! # 좋아요 리포지토리 구현
//!
//! `likes` 컬렉션에 대한 MongoDB 구현입니다.
//! `(userId, hospitalId)` 유니크 복합 인덱스가 중복 좋아요를 저장소 수준에서 막습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::{IndexModel, bson::doc, options::IndexOptions};
use singleton_macro::repository;
use crate::{
    core::{errors::{AppError, AppResult}, registry::Repository},
    db::Database,
    domain::entities::likes::Like,
    repositories::{is_duplicate_key, likes::LikeRepository},
};

#[repository(name = "like_mongo", collection = "likes")]
pub struct LikeMongoRepository {
    db: Arc<Database>,
}

#[async_trait]
impl LikeRepository for LikeMongoRepository {
    async fn exists(&self, user_id: &str, hospital_id: &str) -> AppResult<bool> {
        let found = self.collection::<Like>()
            .find_one(doc! { "userId": user_id, "hospitalId": hospital_id })
            .await?;
        Ok(found.is_some())
    }

    async fn save(&self, like: &Like) -> AppResult<()> {
        match self.collection::<Like>().insert_one(like).await {
            Ok(_) => Ok(()),
            Err(e) if is_duplicate_key(&e) => Err(AppError::ConflictError(
                "이미 좋아요한 병원입니다".to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, user_id: &str, hospital_id: &str) -> AppResult<bool> {
        let result = self.collection::<Like>()
            .delete_one(doc! { "userId": user_id, "hospitalId": hospital_id })
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn count_by_hospital(&self, hospital_id: &str) -> AppResult<u64> {
        let count = self.collection::<Like>()
            .count_documents(doc! { "hospitalId": hospital_id })
            .await?;
        Ok(count)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Like>> {
        let likes = self.collection::<Like>()
            .find(doc! { "userId": user_id })
            .await?
            .try_collect::<Vec<Like>>()
            .await?;
        Ok(likes)
    }
}

impl LikeMongoRepository {
    /// 인덱스 생성
    ///
    /// 1. `(userId, hospitalId)` 유니크 - 중복 좋아요 방지
    /// 2. `hospitalId` - 병원별 좋아요 수 집계
    pub async fn create_indexes(&self) -> AppResult<()> {
        let pair_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "hospitalId": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("user_hospital_unique".to_string())
                .build())
            .build();

        let hospital_index = IndexModel::builder()
            .keys(doc! { "hospitalId": 1 })
            .options(IndexOptions::builder()
                .name("hospital_id".to_string())
                .build())
            .build();

        self.collection::<Like>()
            .create_indexes([pair_index, hospital_index])
            .await?;

        info!("✅ {} 인덱스 준비 완료 ({})", self.name(), self.collection_name());
        Ok(())
    }
}
