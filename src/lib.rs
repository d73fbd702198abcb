//! socdoc 병원 조회 백엔드
//!
//! 지역/진료과목별 병원 검색, 진료 시간과 좋아요 수를 담은 병원 상세,
//! 카카오 로컬 API 기반 주변 약국 조회, 사용자별 좋아요 북마크를 제공합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 조회/조립 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │  Repositories   │     │     Clients     │
//! └─────────────────┘     └─────────────────┘
//!          │                       │
//!          ▼                       ▼
//! ┌─────────────────┐     ┌─────────────────┐
//! │     MongoDB     │     │   Kakao Local   │
//! └─────────────────┘     └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use socdoc_backend::services::hospitals::HospitalService;
//!
//! let service = HospitalService::instance()?;
//! let hospitals = service.get_by_address("서울특별시", "동작구", 1).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod clients;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
