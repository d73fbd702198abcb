//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 `main`에서 리포지토리와 클라이언트를 주입받아 생성되고
//! `ServiceLocator`에 등록됩니다. 핸들러는 `instance()`로 꺼내 씁니다.
//!
//! - [`hospitals`] - 병원 조회, 좋아요, 주변 약국
//! - [`users`] - 사용자 프로필 등록/조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{hospitals::HospitalService, users::UserService};
//!
//! let hospital_service = HospitalService::instance()?;
//! let user_service = UserService::instance()?;
//! ```

pub mod hospitals;
pub mod users;
