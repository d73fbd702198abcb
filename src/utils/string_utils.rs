//! # 문자열 유틸리티
//!
//! 요청 파라미터와 엔티티 생성 시 사용하는 문자열 정리/검증 함수들입니다.

use serde::Deserialize;
use crate::core::errors::AppError;

/// 필수 문자열을 검증하고 앞뒤 공백을 제거해 반환합니다.
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}은(는) 필수입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 쿼리 파라미터 등에서 앞뒤 공백을 제거하며 역직렬화합니다.
pub fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(value.trim().to_string())
}
