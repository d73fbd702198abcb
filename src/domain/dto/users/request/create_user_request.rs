//! 사용자 생성 요청 DTO
//!
//! 앱 최초 실행 시 사용자 프로필(이름, 이메일, 거주 지역)을 등록하는 요청입니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 128, message = "userId는 1-128자 사이여야 합니다"))]
    pub user_id: String,

    #[validate(length(min = 1, max = 50, message = "이름은 1-50자 사이여야 합니다"))]
    pub user_name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub user_email: String,

    /// 시/도 (예: 서울특별시)
    #[validate(length(min = 1, message = "address1은(는) 필수입니다"))]
    pub address1: String,

    /// 시/군/구 (예: 동작구)
    #[validate(length(min = 1, message = "address2은(는) 필수입니다"))]
    pub address2: String,
}
