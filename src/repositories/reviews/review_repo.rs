use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::{IndexModel, bson::{Bson, doc}, options::IndexOptions};
use singleton_macro::repository;
use crate::{
    core::{errors::AppResult, registry::Repository},
    db::Database,
    domain::entities::reviews::Review,
    repositories::reviews::ReviewRepository,
};

#[repository(name = "review_mongo", collection = "reviews")]
pub struct ReviewMongoRepository {
    db: Arc<Database>,
}

#[async_trait]
impl ReviewRepository for ReviewMongoRepository {
    async fn average_rating(&self, hospital_id: &str) -> AppResult<f64> {
        let pipeline = vec![
            doc! { "$match": { "hospitalId": hospital_id } },
            doc! { "$group": { "_id": Bson::Null, "average": { "$avg": "$rating" } } },
        ];

        let mut cursor = self.collection::<Review>().aggregate(pipeline).await?;
        let average = cursor
            .try_next()
            .await?
            .and_then(|group| group.get_f64("average").ok())
            .unwrap_or(0.0);

        Ok(average)
    }
}

impl ReviewMongoRepository {
    /// 조회 패턴에 맞는 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let hospital_index = IndexModel::builder()
            .keys(doc! { "hospitalId": 1 })
            .options(IndexOptions::builder()
                .name("hospital_id".to_string())
                .build())
            .build();

        self.collection::<Review>().create_index(hospital_index).await?;
        info!("✅ {} 인덱스 준비 완료 ({})", self.name(), self.collection_name());
        Ok(())
    }
}
