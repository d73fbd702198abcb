//! 테스트용 고정 응답 장소 클라이언트

use async_trait::async_trait;
use crate::clients::kakao::{KakaoPlace, PlacesClient};
use crate::core::errors::{AppError, AppResult};

#[derive(Default)]
pub struct StaticPlacesClient {
    places: Vec<KakaoPlace>,
    fail: bool,
}

impl StaticPlacesClient {
    pub fn with_places(places: Vec<KakaoPlace>) -> Self {
        Self {
            places,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl PlacesClient for StaticPlacesClient {
    async fn find_pharmacies(&self, _latitude: f64, _longitude: f64) -> AppResult<Vec<KakaoPlace>> {
        if self.fail {
            return Err(AppError::ExternalServiceError("카카오 약국 검색 시간 초과".to_string()));
        }
        Ok(self.places.clone())
    }
}

pub fn pharmacy(name: &str, address: &str) -> KakaoPlace {
    KakaoPlace {
        place_name: name.to_string(),
        address_name: address.to_string(),
        category_group_code: "PM9".to_string(),
        ..KakaoPlace::default()
    }
}
