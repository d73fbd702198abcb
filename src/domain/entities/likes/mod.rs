//! Likes Entity Module
//!
//! 사용자와 병원 사이의 즐겨찾기(좋아요) 관계를 정의합니다.

pub mod like;

pub use like::*;
