//! Users Entity Module
//!
//! 앱 사용자 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::of("kakao_1234", "홍길동", "hong@example.com", "서울특별시", "동작구")?;
//! ```

pub mod user;

pub use user::*;
