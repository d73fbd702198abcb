//! 사용자 프로필 서비스
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::instance()?;
//! let user = user_service.get_user("kakao_1234").await?;
//! ```

pub mod user_service;

pub use user_service::UserService;
