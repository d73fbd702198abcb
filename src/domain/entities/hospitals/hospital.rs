//! Hospital Entity Implementation
//!
//! `hospitals` 컬렉션 문서와 1:1로 대응되는 병원 엔티티입니다.
//! 필드 이름은 공공데이터 병원 정보 API의 camelCase 표기를 그대로 따릅니다.

use serde::{Deserialize, Serialize};

/// 진료 시간 슬롯 수 (요일 그룹별 시작/종료 쌍)
pub const DUTY_TIME_SLOTS: usize = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hospital {
    pub hpid: String,
    pub duty_name: String,
    #[serde(default)]
    pub duty_tel1: String,
    #[serde(default)]
    pub duty_addr: String,
    /// 찾아오는 길 등 지도 이미지 설명
    #[serde(default)]
    pub duty_mapimg: String,
    pub wgs84_lat: f64,
    pub wgs84_lon: f64,

    // "HHMM" 형식, 진료하지 않는 슬롯은 빈 문자열
    #[serde(default)]
    pub duty_time1s: String,
    #[serde(default)]
    pub duty_time1c: String,
    #[serde(default)]
    pub duty_time2s: String,
    #[serde(default)]
    pub duty_time2c: String,
    #[serde(default)]
    pub duty_time3s: String,
    #[serde(default)]
    pub duty_time3c: String,
    #[serde(default)]
    pub duty_time4s: String,
    #[serde(default)]
    pub duty_time4c: String,
    #[serde(default)]
    pub duty_time5s: String,
    #[serde(default)]
    pub duty_time5c: String,
    #[serde(default)]
    pub duty_time6s: String,
    #[serde(default)]
    pub duty_time6c: String,

    /// 진료과목 라벨 목록 (예: "내과", "소아청소년과")
    #[serde(default)]
    pub duty_type: Vec<String>,
    /// 시/도
    pub address1: String,
    /// 시/군/구
    pub address2: String,
}

impl Hospital {
    /// 여섯 개의 (시작, 종료) 진료 시간 쌍을 슬롯 순서대로 반환합니다.
    pub fn duty_times(&self) -> [(&str, &str); DUTY_TIME_SLOTS] {
        [
            (&self.duty_time1s, &self.duty_time1c),
            (&self.duty_time2s, &self.duty_time2c),
            (&self.duty_time3s, &self.duty_time3c),
            (&self.duty_time4s, &self.duty_time4c),
            (&self.duty_time5s, &self.duty_time5c),
            (&self.duty_time6s, &self.duty_time6c),
        ]
    }

    pub fn has_type(&self, label: &str) -> bool {
        self.duty_type.iter().any(|t| t == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_from_camel_case_document() {
        let json = serde_json::json!({
            "hpid": "A1100001",
            "dutyName": "중앙대학교병원",
            "dutyTel1": "02-6299-1114",
            "dutyAddr": "서울특별시 동작구 흑석로 102",
            "wgs84Lat": 37.5070,
            "wgs84Lon": 126.9608,
            "dutyTime1s": "0830",
            "dutyTime1c": "1730",
            "dutyType": ["내과", "외과"],
            "address1": "서울특별시",
            "address2": "동작구"
        });

        let hospital: Hospital = serde_json::from_value(json).unwrap();

        assert_eq!(hospital.duty_name, "중앙대학교병원");
        assert_eq!(hospital.duty_times()[0], ("0830", "1730"));
        assert_eq!(hospital.duty_times()[5], ("", ""));
        assert!(hospital.duty_mapimg.is_empty());
        assert!(hospital.has_type("내과"));
        assert!(!hospital.has_type("내"));
    }
}
