//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 컬렉션은 서비스가 의존하는 trait과 MongoDB 구현체로 나뉩니다.
//! 서비스는 `Arc<dyn ...Repository>`만 알기 때문에, 테스트에서는
//! [`memory`]의 인메모리 구현으로 교체됩니다.
//!
//! | Trait | MongoDB 구현 | 컬렉션 |
//! |-------|--------------|--------|
//! | [`HospitalRepository`](hospitals::HospitalRepository) | `HospitalMongoRepository` | `hospitals` |
//! | [`LikeRepository`](likes::LikeRepository) | `LikeMongoRepository` | `likes` |
//! | [`ReviewRepository`](reviews::ReviewRepository) | `ReviewMongoRepository` | `reviews` |
//! | [`UserRepository`](users::UserRepository) | `UserMongoRepository` | `users` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::hospitals::{HospitalMongoRepository, HospitalRepository};
//!
//! // #[repository] 매크로가 Database와 LikeMongoRepository를 주입
//! let repo = HospitalMongoRepository::instance();
//! let hospital = repo.find_detail("A1100001").await?;
//! ```

use mongodb::error::{ErrorKind, WriteFailure};

pub mod hospitals;
pub mod likes;
pub mod reviews;
pub mod users;

#[cfg(test)]
pub mod memory;

/// MongoDB duplicate key 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반으로 인한 쓰기 실패인지 확인합니다.
pub(crate) fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(command_error) => command_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
