use std::sync::Arc;
use log::{debug, info};
use crate::clients::kakao::PlacesClient;
use crate::config::PaginationConfig;
use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceLocator};
use crate::domain::dto::{HospitalDetailResponse, HospitalSummaryResponse, LikeResponse, PharmacyResponse};
use crate::domain::entities::hospitals::Hospital;
use crate::domain::entities::likes::Like;
use crate::domain::models::{HospitalType, Page};
use crate::repositories::hospitals::HospitalRepository;
use crate::repositories::likes::LikeRepository;
use crate::repositories::reviews::ReviewRepository;

const HOSPITAL_NOT_FOUND: &str = "병원을 찾을 수 없습니다";

/// 병원 조회/조립 서비스
///
/// 리포지토리와 카카오 클라이언트를 조합해 응답 DTO를 만듭니다.
///
/// - 상세: 병원 문서 + 좋아요 수 + 진료 시간 문자열
/// - 목록: 병원 문서 + 평균 평점 (한 건이라도 평점 조회에 실패하면 전체가 `NotFound`)
/// - 좋아요: 존재 확인 후 생성/삭제, 경합은 저장소 유니크 인덱스가 막음
/// - 약국: 병원 좌표 기준 카카오 카테고리 검색
pub struct HospitalService {
    hospital_repo: Arc<dyn HospitalRepository>,
    like_repo: Arc<dyn LikeRepository>,
    review_repo: Arc<dyn ReviewRepository>,
    places: Arc<dyn PlacesClient>,
    page_size: u64,
}

impl Service for HospitalService {
    fn name(&self) -> &str {
        "hospital"
    }
}

impl HospitalService {
    pub fn new(
        hospital_repo: Arc<dyn HospitalRepository>,
        like_repo: Arc<dyn LikeRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        places: Arc<dyn PlacesClient>,
    ) -> Self {
        Self::with_page_size(hospital_repo, like_repo, review_repo, places, PaginationConfig::page_size())
    }

    pub fn with_page_size(
        hospital_repo: Arc<dyn HospitalRepository>,
        like_repo: Arc<dyn LikeRepository>,
        review_repo: Arc<dyn ReviewRepository>,
        places: Arc<dyn PlacesClient>,
        page_size: u64,
    ) -> Self {
        Self {
            hospital_repo,
            like_repo,
            review_repo,
            places,
            page_size,
        }
    }

    /// `ServiceLocator`에 등록된 인스턴스
    pub fn instance() -> AppResult<Arc<Self>> {
        ServiceLocator::try_get::<Self>()
    }

    pub async fn get_all_hospital_ids(&self) -> AppResult<Vec<String>> {
        self.hospital_repo.list_all_ids().await
    }

    /// 병원 상세 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 `hpid`의 병원이 없음
    /// * `AppError::DatabaseError` - 저장소 오류 (그대로 전파)
    pub async fn get_detail(&self, hospital_id: &str) -> AppResult<HospitalDetailResponse> {
        let hospital = self.find_hospital(hospital_id).await?;
        let like_count = self.like_repo.count_by_hospital(hospital_id).await?;

        Ok(HospitalDetailResponse::new(hospital, like_count))
    }

    /// 진료과목 코드 + 지역으로 병원 목록 조회
    ///
    /// `type_code`는 `D001` 같은 외부 코드이며 저장된 `dutyType` 라벨로 변환됩니다.
    pub async fn get_by_type_and_address(
        &self,
        type_code: &str,
        address1: &str,
        address2: &str,
        page: i64,
    ) -> AppResult<Vec<HospitalSummaryResponse>> {
        let hospital_type = HospitalType::from_code(type_code)?;
        let page = Page::new(page, self.page_size)?;

        debug!(
            "진료과목별 병원 조회: {} ({}) {} {} page={}",
            hospital_type.code(), hospital_type.label(), address1, address2, page.number()
        );

        let hospitals = self.hospital_repo
            .find_by_type_and_address(hospital_type.label(), address1, address2, page)
            .await?;

        self.to_summaries(hospitals).await
    }

    pub async fn get_by_address(
        &self,
        address1: &str,
        address2: &str,
        page: i64,
    ) -> AppResult<Vec<HospitalSummaryResponse>> {
        let page = Page::new(page, self.page_size)?;

        debug!("지역별 병원 조회: {} {} page={}", address1, address2, page.number());

        let hospitals = self.hospital_repo.find_by_address(address1, address2, page).await?;

        self.to_summaries(hospitals).await
    }

    /// 사용자가 좋아요한 병원 목록. 삭제된 병원은 빠집니다.
    pub async fn get_liked_by_user(&self, user_id: &str) -> AppResult<Vec<HospitalSummaryResponse>> {
        let hospitals = self.hospital_repo.find_liked_by_user(user_id).await?;

        self.to_summaries(hospitals).await
    }

    /// 좋아요 추가
    ///
    /// # Errors
    ///
    /// * `AppError::ConflictError` - 이미 좋아요한 병원 (동시 요청으로 유니크 인덱스에 걸린 경우 포함)
    pub async fn like(&self, user_id: &str, hospital_id: &str) -> AppResult<LikeResponse> {
        if self.like_repo.exists(user_id, hospital_id).await? {
            return Err(AppError::ConflictError("이미 좋아요한 병원입니다".to_string()));
        }

        let like = Like::new(user_id, hospital_id);
        self.like_repo.save(&like).await?;

        info!("좋아요 추가: user={} hospital={}", user_id, hospital_id);

        Ok(LikeResponse::from(like))
    }

    /// 좋아요 취소
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 좋아요가 없거나, 확인 직후 다른 요청이 먼저 지운 경우
    pub async fn unlike(&self, user_id: &str, hospital_id: &str) -> AppResult<()> {
        if !self.like_repo.exists(user_id, hospital_id).await? {
            return Err(like_not_found());
        }

        if !self.like_repo.delete(user_id, hospital_id).await? {
            return Err(like_not_found());
        }

        info!("좋아요 취소: user={} hospital={}", user_id, hospital_id);

        Ok(())
    }

    /// 병원 주변 약국 목록
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 병원이 없음
    /// * `AppError::ExternalServiceError` - 카카오 API 실패/시간 초과
    pub async fn get_pharmacies_near(&self, hospital_id: &str) -> AppResult<Vec<PharmacyResponse>> {
        let hospital = self.find_hospital(hospital_id).await?;

        let places = self.places
            .find_pharmacies(hospital.wgs84_lat, hospital.wgs84_lon)
            .await?;

        Ok(places
            .into_iter()
            .map(|place| PharmacyResponse {
                name: place.place_name,
                address: place.address_name,
            })
            .collect())
    }

    async fn find_hospital(&self, hospital_id: &str) -> AppResult<Hospital> {
        self.hospital_repo
            .find_detail(hospital_id)
            .await?
            .ok_or_else(|| AppError::NotFound(HOSPITAL_NOT_FOUND.to_string()))
    }

    /// 평균 평점을 붙여 요약 응답으로 바꿉니다.
    ///
    /// 한 건이라도 실패하면 부분 결과 없이 `NotFound`로 좁혀집니다.
    async fn to_summaries(&self, hospitals: Vec<Hospital>) -> AppResult<Vec<HospitalSummaryResponse>> {
        let mut summaries = Vec::with_capacity(hospitals.len());

        for hospital in hospitals {
            let rating = self.review_repo
                .average_rating(&hospital.hpid)
                .await
                .map_err(|e| {
                    debug!("평점 조회 실패 ({}): {}", hospital.hpid, e);
                    AppError::NotFound(HOSPITAL_NOT_FOUND.to_string())
                })?;
            summaries.push(HospitalSummaryResponse::new(hospital, rating));
        }

        Ok(summaries)
    }
}

fn like_not_found() -> AppError {
    AppError::NotFound("좋아요 기록을 찾을 수 없습니다".to_string())
}
