//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 오가는 요청/응답 구조체입니다.
//! 엔티티를 그대로 노출하지 않고, 서비스가 응답 형태로 조립해 반환합니다.
//!
//! - [`hospitals`] - 목록 쿼리, 상세/요약/약국 응답
//! - [`likes`] - 좋아요 응답
//! - [`users`] - 사용자 생성 요청, 사용자 응답

pub mod hospitals;
pub mod likes;
pub mod users;

pub use hospitals::{HospitalDetailResponse, HospitalListQuery, HospitalSummaryResponse, PharmacyResponse};
pub use likes::LikeResponse;
pub use users::{CreateUserRequest, UserResponse};
