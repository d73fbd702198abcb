//! # 병원 리포지토리 구현
//!
//! `hospitals` 컬렉션에 대한 MongoDB 구현입니다.
//!
//! ## 조회 정책
//!
//! - **필터**: `address1`, `address2` 정확히 일치, 진료과목은 `dutyType` 배열 원소 일치
//! - **정렬**: `dutyName` 오름차순
//! - **페이지**: `skip((page - 1) * size).limit(size)`, 범위를 벗어나면 빈 목록
//!
//! ## 인덱스
//!
//! - `hpid` (unique)
//! - `address1, address2, dutyName`
//! - `dutyType, address1, address2, dutyName` (multikey)

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{info, warn};
use mongodb::{
    IndexModel,
    bson::{Document, doc},
    options::{FindOptions, IndexOptions},
};
use singleton_macro::repository;
use crate::{
    core::{errors::AppResult, registry::Repository},
    db::Database,
    domain::{entities::hospitals::Hospital, models::Page},
    repositories::{
        hospitals::HospitalRepository,
        likes::{LikeMongoRepository, LikeRepository},
    },
};

/// 병원 데이터 액세스 리포지토리
///
/// 좋아요한 병원 조회는 `likes` 컬렉션에서 관계를 읽은 뒤
/// 병원 문서를 하나씩 조회합니다.
#[repository(name = "hospital_mongo", collection = "hospitals")]
pub struct HospitalMongoRepository {
    db: Arc<Database>,
    like_repo: Arc<LikeMongoRepository>,
}

impl HospitalMongoRepository {
    async fn find_page(&self, filter: Document, page: Page) -> AppResult<Vec<Hospital>> {
        let hospitals = self.collection::<Hospital>()
            .find(filter)
            .with_options(page_options(page))
            .await?
            .try_collect::<Vec<Hospital>>()
            .await?;
        Ok(hospitals)
    }

    /// 조회 패턴에 맞는 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let hpid_index = IndexModel::builder()
            .keys(doc! { "hpid": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("hpid_unique".to_string())
                .build())
            .build();

        let address_index = IndexModel::builder()
            .keys(doc! { "address1": 1, "address2": 1, "dutyName": 1 })
            .options(IndexOptions::builder()
                .name("address_name".to_string())
                .build())
            .build();

        let type_address_index = IndexModel::builder()
            .keys(doc! { "dutyType": 1, "address1": 1, "address2": 1, "dutyName": 1 })
            .options(IndexOptions::builder()
                .name("type_address_name".to_string())
                .build())
            .build();

        self.collection::<Hospital>()
            .create_indexes([hpid_index, address_index, type_address_index])
            .await?;

        info!("✅ {} 인덱스 준비 완료 ({})", self.name(), self.collection_name());
        Ok(())
    }
}

/// 지역(및 진료과목) 조회 필터
///
/// 배열 필드 `dutyType`에 대한 동등 조건은 원소 일치로 평가됩니다.
pub(crate) fn address_filter(type_label: Option<&str>, address1: &str, address2: &str) -> Document {
    let mut filter = Document::new();
    if let Some(label) = type_label {
        filter.insert("dutyType", label);
    }
    filter.insert("address1", address1);
    filter.insert("address2", address2);
    filter
}

/// `dutyName` 오름차순 정렬과 페이지 구간
pub(crate) fn page_options(page: Page) -> FindOptions {
    FindOptions::builder()
        .sort(doc! { "dutyName": 1 })
        .skip(page.offset())
        .limit(page.size() as i64)
        .build()
}

#[async_trait]
impl HospitalRepository for HospitalMongoRepository {
    async fn list_all_ids(&self) -> AppResult<Vec<String>> {
        let ids = self.collection::<Hospital>()
            .distinct("hpid", doc! {})
            .await?
            .into_iter()
            .filter_map(|id| id.as_str().map(str::to_string))
            .collect();
        Ok(ids)
    }

    async fn find_by_type_and_address(
        &self,
        type_label: &str,
        address1: &str,
        address2: &str,
        page: Page,
    ) -> AppResult<Vec<Hospital>> {
        self.find_page(address_filter(Some(type_label), address1, address2), page).await
    }

    async fn find_by_address(&self, address1: &str, address2: &str, page: Page) -> AppResult<Vec<Hospital>> {
        self.find_page(address_filter(None, address1, address2), page).await
    }

    async fn find_detail(&self, hospital_id: &str) -> AppResult<Option<Hospital>> {
        let hospital = self.collection::<Hospital>()
            .find_one(doc! { "hpid": hospital_id })
            .await?;
        Ok(hospital)
    }

    async fn find_liked_by_user(&self, user_id: &str) -> AppResult<Vec<Hospital>> {
        let likes = self.like_repo.find_by_user(user_id).await?;

        let mut hospitals = Vec::with_capacity(likes.len());
        for like in likes {
            match self.find_detail(&like.hospital_id).await? {
                Some(hospital) => hospitals.push(hospital),
                None => warn!(
                    "좋아요 대상 병원이 존재하지 않아 제외합니다: user={}, hospital={}",
                    user_id, like.hospital_id
                ),
            }
        }
        Ok(hospitals)
    }
}
