//! # HTTP Request Handlers
//!
//! actix-web 핸들러 함수 모음입니다. 각 핸들러는 경로/쿼리/본문을 추출해
//! `ServiceLocator`에 등록된 서비스에 넘기고, 결과를 JSON으로 돌려줍니다.
//! 에러는 `AppError`의 `ResponseError` 구현이 상태 코드로 바꿉니다.
//!
//! | 모듈 | 경로 |
//! |------|------|
//! | [`hospitals`] | `/api/v1/hospitals/...` |
//! | [`likes`] | `/api/v1/users/{user_id}/likes/...` |
//! | [`users`] | `/api/v1/users/...` |

pub mod hospitals;
pub mod likes;
pub mod users;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Once};
    use crate::clients::kakao::memory::{pharmacy, StaticPlacesClient};
    use crate::core::registry::ServiceLocator;
    use crate::repositories::memory::{
        hospital, InMemoryHospitalRepository, InMemoryLikeRepository, InMemoryReviewRepository,
        InMemoryUserRepository,
    };
    use crate::services::hospitals::HospitalService;
    use crate::services::users::UserService;

    pub const SEOUL: &str = "%EC%84%9C%EC%9A%B8%ED%8A%B9%EB%B3%84%EC%8B%9C";
    pub const DONGJAK: &str = "%EB%8F%99%EC%9E%91%EA%B5%AC";
    pub const GWANAK: &str = "%EA%B4%80%EC%95%85%EA%B5%AC";

    static INSTALL: Once = Once::new();

    /// 핸들러 테스트가 공유하는 인메모리 서비스를 한 번만 등록합니다.
    ///
    /// 상태가 테스트 간에 공유되므로 좋아요 테스트는 H3만, 사용자 테스트는 각자 다른 ID를 씁니다.
    pub fn install_services() {
        INSTALL.call_once(|| {
            let likes = Arc::new(InMemoryLikeRepository::new());
            let hospitals = Arc::new(InMemoryHospitalRepository::new(
                vec![
                    hospital("H1", "가나내과의원", "동작구", &["내과"]),
                    hospital("H2", "다라소아과", "동작구", &["소아청소년과"]),
                    hospital("H3", "마바내과", "관악구", &["내과", "가정의학과"]),
                ],
                likes.clone(),
            ));
            let reviews = Arc::new(InMemoryReviewRepository::new());
            reviews.add_rating("H1", 4);
            reviews.add_rating("H1", 5);
            let places = Arc::new(StaticPlacesClient::with_places(vec![
                pharmacy("흑석온누리약국", "서울 동작구 흑석동 224-1"),
            ]));

            ServiceLocator::set(Arc::new(HospitalService::with_page_size(
                hospitals, likes, reviews, places, 10,
            )));
            ServiceLocator::set(Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))));
        });
    }
}
