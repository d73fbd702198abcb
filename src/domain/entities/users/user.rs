//! User Entity Implementation
//!
//! 앱 사용자 엔티티입니다. 기본 생성자를 노출하지 않으며,
//! 이름/이메일/주소가 모두 채워진 경우에만 [`User::of`]로 생성할 수 있습니다.
//! 저장된 문서를 읽을 때도 같은 검증을 거칩니다.

use serde::{Deserialize, Serialize};
use crate::core::errors::{AppError, AppResult};
use crate::utils::string_utils::validate_required_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "UserRecord")]
pub struct User {
    user_id: String,
    user_name: String,
    user_email: String,
    /// 시/도 (예: 서울특별시)
    address1: String,
    /// 시/군/구 (예: 동작구)
    address2: String,
}

/// `users` 컬렉션 문서의 원시 형태
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    user_id: String,
    user_name: String,
    user_email: String,
    address1: String,
    address2: String,
}

impl TryFrom<UserRecord> for User {
    type Error = AppError;

    fn try_from(record: UserRecord) -> Result<Self, Self::Error> {
        User::of(
            &record.user_id,
            &record.user_name,
            &record.user_email,
            &record.address1,
            &record.address2,
        )
    }
}

impl User {
    /// 검증된 사용자 엔티티를 생성합니다.
    ///
    /// 모든 값은 앞뒤 공백이 제거된 채로 저장됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 비어 있는 필드가 있는 경우
    pub fn of(
        user_id: &str,
        user_name: &str,
        user_email: &str,
        address1: &str,
        address2: &str,
    ) -> AppResult<Self> {
        Ok(Self {
            user_id: validate_required_string(user_id, "userId")?,
            user_name: validate_required_string(user_name, "userName")?,
            user_email: validate_required_string(user_email, "userEmail")?,
            address1: validate_required_string(address1, "address1")?,
            address2: validate_required_string(address2, "address2")?,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn user_email(&self) -> &str {
        &self.user_email
    }

    pub fn address1(&self) -> &str {
        &self.address1
    }

    pub fn address2(&self) -> &str {
        &self.address2
    }
}
