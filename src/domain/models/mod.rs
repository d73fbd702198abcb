//! # Domain Models
//!
//! 저장 문서가 아닌 도메인 값과 순수 변환 로직입니다.
//!
//! - [`hospital_type`] - 진료과목 코드 ↔ 라벨 매핑
//! - [`opening_hours`] - "HHMM" 진료 시간 포맷팅
//! - [`page`] - 1부터 시작하는 오프셋 페이지네이션

pub mod hospital_type;
pub mod opening_hours;
pub mod page;

pub use hospital_type::HospitalType;
pub use page::Page;
pub use opening_hours::{CLOSED_LABEL, format_hours, opening_hours};
