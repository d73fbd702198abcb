//! 병원 조회 응답 DTO

use serde::{Deserialize, Serialize};
use crate::domain::entities::hospitals::{DUTY_TIME_SLOTS, Hospital};
use crate::domain::models::opening_hours;

/// 병원 상세 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalDetailResponse {
    pub hpid: String,
    pub name: String,
    pub phone: String,
    pub address: String,
    pub description: String,
    pub like_count: u64,
    /// 슬롯 순서대로 "HH:MM - HH:MM" 또는 "휴진"
    pub time: [String; DUTY_TIME_SLOTS],
}

impl HospitalDetailResponse {
    pub fn new(hospital: Hospital, like_count: u64) -> Self {
        let time = opening_hours(&hospital);
        let Hospital {
            hpid,
            duty_name,
            duty_tel1,
            duty_addr,
            duty_mapimg,
            ..
        } = hospital;

        Self {
            hpid,
            name: duty_name,
            phone: duty_tel1,
            address: duty_addr,
            description: duty_mapimg,
            like_count,
            time,
        }
    }
}

/// 목록용 병원 요약 응답
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HospitalSummaryResponse {
    pub hpid: String,
    pub name: String,
    pub address: String,
    /// 리뷰 평균 평점, 리뷰가 없으면 0.0
    pub rating: f64,
}

impl HospitalSummaryResponse {
    pub fn new(hospital: Hospital, rating: f64) -> Self {
        Self {
            hpid: hospital.hpid,
            name: hospital.duty_name,
            address: hospital.duty_addr,
            rating,
        }
    }
}

/// 병원 주변 약국
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacyResponse {
    pub name: String,
    pub address: String,
}
