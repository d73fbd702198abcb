//! # Domain Entities Module
//!
//! MongoDB 컬렉션 문서와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! | 엔티티 | 컬렉션 | 비고 |
//! |--------|--------|------|
//! | [`Hospital`](hospitals::Hospital) | `hospitals` | 읽기 전용 디렉터리 데이터 |
//! | [`Like`](likes::Like) | `likes` | (userId, hospitalId) 유니크 |
//! | [`Review`](reviews::Review) | `reviews` | 평균 평점 집계에만 사용 |
//! | [`User`](users::User) | `users` | `User::of` 팩토리로만 생성 |
//!
//! 모든 엔티티는 `serde`로 camelCase 필드명을 사용해 BSON과 상호 변환되며,
//! 생성 이후 변경되지 않습니다.

pub mod hospitals;
pub mod likes;
pub mod reviews;
pub mod users;
