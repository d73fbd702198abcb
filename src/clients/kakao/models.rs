//! 카카오 로컬 카테고리 검색 응답 모델
//!
//! 응답 필드는 snake_case로 내려오며, 좌표(`x`, `y`)와 거리(`distance`)도 문자열입니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KakaoSearchResponse {
    #[serde(default)]
    pub documents: Vec<KakaoPlace>,
    #[serde(default)]
    pub meta: Option<KakaoMeta>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KakaoPlace {
    #[serde(default)]
    pub id: String,
    pub place_name: String,
    #[serde(default)]
    pub address_name: String,
    #[serde(default)]
    pub road_address_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub category_group_code: String,
    /// 검색 중심으로부터의 거리(미터), 중심 좌표를 준 경우에만 채워짐
    #[serde(default)]
    pub distance: String,
    /// 경도
    #[serde(default)]
    pub x: String,
    /// 위도
    #[serde(default)]
    pub y: String,
    #[serde(default)]
    pub place_url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct KakaoMeta {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub pageable_count: u64,
    #[serde(default)]
    pub is_end: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_category_search_response() {
        let body = r#"{
            "documents": [
                {
                    "address_name": "서울 동작구 흑석동 224-1",
                    "category_group_code": "PM9",
                    "category_group_name": "약국",
                    "category_name": "의료,건강 > 약국",
                    "distance": "85",
                    "id": "12345",
                    "phone": "02-813-0000",
                    "place_name": "흑석온누리약국",
                    "place_url": "http://place.map.kakao.com/12345",
                    "road_address_name": "서울 동작구 흑석로 98",
                    "x": "126.9601",
                    "y": "37.5075"
                }
            ],
            "meta": { "is_end": true, "pageable_count": 1, "total_count": 1, "same_name": null }
        }"#;

        let response: KakaoSearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.documents.len(), 1);
        assert_eq!(response.documents[0].place_name, "흑석온누리약국");
        assert_eq!(response.documents[0].address_name, "서울 동작구 흑석동 224-1");
        assert!(response.meta.unwrap().is_end);
    }

    #[test]
    fn test_parse_empty_response() {
        let response: KakaoSearchResponse = serde_json::from_str(r#"{"documents": []}"#).unwrap();
        assert!(response.documents.is_empty());
        assert!(response.meta.is_none());
    }
}
