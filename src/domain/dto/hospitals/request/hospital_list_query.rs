//! 병원 목록 조회 쿼리 DTO
//!
//! `GET /api/v1/hospitals?address1=서울특별시&address2=동작구&page=1`

use serde::Deserialize;
use validator::Validate;
use crate::utils::string_utils::deserialize_trimmed_string;

fn first_page() -> i64 {
    1
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct HospitalListQuery {
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "address1(시/도)은(는) 필수입니다"))]
    pub address1: String,

    #[serde(deserialize_with = "deserialize_trimmed_string")]
    #[validate(length(min = 1, message = "address2(시/군/구)은(는) 필수입니다"))]
    pub address2: String,

    /// 1부터 시작하는 페이지 번호
    #[serde(default = "first_page")]
    #[validate(range(min = 1, message = "page는 1 이상이어야 합니다"))]
    pub page: i64,
}
