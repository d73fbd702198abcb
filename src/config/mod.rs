//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 페이지네이션, Rate Limit 설정
//! - [`kakao_config`] - 카카오 로컬 API(약국 검색) 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, PaginationConfig};
//!
//! let env = Environment::current();
//! let bind = format!("{}:{}", ServerConfig::host(), ServerConfig::port());
//! let page_size = PaginationConfig::page_size();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="socdoc"
//! export MONGODB_TIMEOUT_SECS="5"
//!
//! # 목록 조회
//! export PAGE_SIZE="10"
//!
//! # 카카오 로컬 API
//! export REST_API_KEY="your-kakao-rest-api-key"
//! export KAKAO_SEARCH_RADIUS="1000"
//! export KAKAO_TIMEOUT_SECS="5"
//! ```

pub mod data_config;
pub mod kakao_config;

pub use data_config::*;
pub use kakao_config::*;
