//! # Domain Layer
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← MongoDB 문서와 매핑되는 엔티티 (Hospital, Like, Review, User)
//! ├── models/       ← 진료과목 코드 매핑, 진료 시간 포맷팅
//! └── dto/          ← HTTP 요청/응답 객체
//! ```

pub mod entities;
pub mod dto;
pub mod models;
