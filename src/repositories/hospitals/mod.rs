//! 병원 리포지토리
//!
//! 지역/진료과목 필터 + 페이지네이션 조회, 단건 조회,
//! 사용자가 좋아요한 병원 해석을 담당합니다.

use async_trait::async_trait;
use crate::core::errors::AppResult;
use crate::domain::entities::hospitals::Hospital;
use crate::domain::models::Page;

pub mod hospital_repo;

pub use hospital_repo::HospitalMongoRepository;

#[async_trait]
pub trait HospitalRepository: Send + Sync {
    /// 모든 병원 ID (순서 무관)
    async fn list_all_ids(&self) -> AppResult<Vec<String>>;

    /// `dutyType` 배열에 `type_label`이 정확히 포함되고 주소가 일치하는 병원을
    /// 이름 오름차순으로 한 페이지 반환합니다.
    async fn find_by_type_and_address(
        &self,
        type_label: &str,
        address1: &str,
        address2: &str,
        page: Page,
    ) -> AppResult<Vec<Hospital>>;

    /// 주소가 일치하는 병원을 이름 오름차순으로 한 페이지 반환합니다.
    async fn find_by_address(&self, address1: &str, address2: &str, page: Page) -> AppResult<Vec<Hospital>>;

    async fn find_detail(&self, hospital_id: &str) -> AppResult<Option<Hospital>>;

    /// 사용자의 좋아요를 병원으로 해석합니다.
    ///
    /// 좋아요는 남아 있지만 병원 문서가 삭제된 경우 그 항목은 결과에서 빠집니다.
    async fn find_liked_by_user(&self, user_id: &str) -> AppResult<Vec<Hospital>>;
}
