//! 좋아요 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::likes::Like;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    pub user_id: String,
    pub hospital_id: String,
}

impl From<Like> for LikeResponse {
    fn from(like: Like) -> Self {
        Self {
            user_id: like.user_id,
            hospital_id: like.hospital_id,
        }
    }
}
