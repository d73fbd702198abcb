use serde::{Deserialize, Serialize};

/// 병원 리뷰 문서
///
/// 리뷰 작성/수정은 이 서비스의 범위 밖이며, 병원별 평균 평점 집계에만 사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub hospital_id: String,
    pub user_id: String,
    /// 1-5 점
    pub rating: i32,
    #[serde(default)]
    pub content: String,
}
