use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub user_name: String,
    pub user_email: String,
    pub address1: String,
    pub address2: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id().to_string(),
            user_name: user.user_name().to_string(),
            user_email: user.user_email().to_string(),
            address1: user.address1().to_string(),
            address2: user.address2().to_string(),
        }
    }
}
