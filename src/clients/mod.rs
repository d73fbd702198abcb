//! 외부 HTTP API 클라이언트
//!
//! - [`kakao`] - 카카오 로컬 카테고리 검색 (병원 주변 약국)

pub mod kakao;
