use serde::{Deserialize, Serialize};

/// (사용자, 병원) 좋아요 관계
///
/// 한 쌍에 대해 최대 하나만 존재하며, `likes` 컬렉션의
/// `(userId, hospitalId)` 유니크 인덱스가 이를 보장합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub user_id: String,
    pub hospital_id: String,
}

impl Like {
    pub fn new(user_id: impl Into<String>, hospital_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            hospital_id: hospital_id.into(),
        }
    }
}
