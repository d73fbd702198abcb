//! 병원 조회, 좋아요, 주변 약국 비즈니스 로직
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::hospitals::HospitalService;
//!
//! let service = HospitalService::instance()?;
//! let detail = service.get_detail("A1100401").await?;
//! let nearby = service.get_pharmacies_near("A1100401").await?;
//! ```

pub mod hospital_service;

pub use hospital_service::HospitalService;
