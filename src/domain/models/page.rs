//! 오프셋 기반 페이지네이션
//!
//! 페이지 번호는 1부터 시작하며, 고정 크기 페이지의 시작 오프셋은
//! `(number - 1) * size`입니다. 커서 기반이 아니므로 동시 쓰기 중에는
//! 결과가 밀릴 수 있습니다.
//!
//! MongoDB는 `skip`/`limit`을 `i64`로 받으므로 오프셋과 크기도 그 범위 안이어야 합니다.

use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: u64,
    size: u64,
}

impl Page {
    /// # Errors
    ///
    /// * `AppError::ValidationError` - `number < 1`, `size == 0`, 또는 오프셋이 `i64` 범위를 넘는 경우
    pub fn new(number: i64, size: u64) -> AppResult<Self> {
        if number < 1 {
            return Err(AppError::ValidationError(format!(
                "page는 1 이상이어야 합니다 (요청값: {})",
                number
            )));
        }
        if size == 0 {
            return Err(AppError::ValidationError("page size는 1 이상이어야 합니다".to_string()));
        }
        let fits = i64::try_from(size)
            .ok()
            .and_then(|size| (number - 1).checked_mul(size))
            .is_some();
        if !fits {
            return Err(AppError::ValidationError(format!(
                "page가 너무 큽니다 (요청값: {}, 크기: {})",
                number, size
            )));
        }
        Ok(Self { number: number as u64, size })
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        (self.number - 1) * self.size
    }
}
