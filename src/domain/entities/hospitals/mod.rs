//! Hospitals Entity Module
//!
//! 병원 문서 엔티티를 정의합니다.

pub mod hospital;

pub use hospital::*;
