//! # Core Framework Module
//!
//! 백엔드 서비스의 공통 기반을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 서비스 레지스트리
//! - **ServiceLocator**: 타입 기반 싱글톤 저장소 (Spring의 ApplicationContext 역할)
//! - **Repository / Service**: 컴포넌트 이름과 초기화 훅을 정의하는 공통 trait
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::core::registry::ServiceLocator;
//!
//! // #[repository] 리포지토리는 Database 등록 후 자동 생성
//! ServiceLocator::set(Arc::new(database));
//! ServiceLocator::initialize_all()?;
//!
//! // 서비스는 main에서 명시적으로 등록
//! ServiceLocator::set(Arc::new(hospital_service));
//!
//! // 핸들러에서 조회
//! let service = ServiceLocator::try_get::<HospitalService>()?;
//! ```

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
