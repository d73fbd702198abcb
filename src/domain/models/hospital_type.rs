//! 진료과목 코드 매핑
//!
//! 클라이언트는 공공데이터 진료과목 코드(`D001` 등)로 조회하고,
//! 병원 문서의 `dutyType` 배열에는 한글 진료과목 라벨이 저장되어 있습니다.
//! 이 모듈이 두 표현 사이의 유일한 변환 지점입니다.

use std::fmt;
use serde::Serialize;
use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HospitalType {
    InternalMedicine,
    Pediatrics,
    Neurology,
    Psychiatry,
    Dermatology,
    GeneralSurgery,
    ThoracicSurgery,
    Orthopedics,
    Neurosurgery,
    PlasticSurgery,
    ObstetricsGynecology,
    Ophthalmology,
    Otolaryngology,
    Urology,
    RehabilitationMedicine,
    Anesthesiology,
    Radiology,
    FamilyMedicine,
    EmergencyMedicine,
    Dentistry,
    KoreanMedicine,
    OralMaxillofacialSurgery,
}

impl HospitalType {
    pub const ALL: [HospitalType; 22] = [
        HospitalType::InternalMedicine,
        HospitalType::Pediatrics,
        HospitalType::Neurology,
        HospitalType::Psychiatry,
        HospitalType::Dermatology,
        HospitalType::GeneralSurgery,
        HospitalType::ThoracicSurgery,
        HospitalType::Orthopedics,
        HospitalType::Neurosurgery,
        HospitalType::PlasticSurgery,
        HospitalType::ObstetricsGynecology,
        HospitalType::Ophthalmology,
        HospitalType::Otolaryngology,
        HospitalType::Urology,
        HospitalType::RehabilitationMedicine,
        HospitalType::Anesthesiology,
        HospitalType::Radiology,
        HospitalType::FamilyMedicine,
        HospitalType::EmergencyMedicine,
        HospitalType::Dentistry,
        HospitalType::KoreanMedicine,
        HospitalType::OralMaxillofacialSurgery,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            HospitalType::InternalMedicine => "D001",
            HospitalType::Pediatrics => "D002",
            HospitalType::Neurology => "D003",
            HospitalType::Psychiatry => "D004",
            HospitalType::Dermatology => "D005",
            HospitalType::GeneralSurgery => "D006",
            HospitalType::ThoracicSurgery => "D007",
            HospitalType::Orthopedics => "D008",
            HospitalType::Neurosurgery => "D009",
            HospitalType::PlasticSurgery => "D010",
            HospitalType::ObstetricsGynecology => "D011",
            HospitalType::Ophthalmology => "D012",
            HospitalType::Otolaryngology => "D013",
            HospitalType::Urology => "D014",
            HospitalType::RehabilitationMedicine => "D016",
            HospitalType::Anesthesiology => "D017",
            HospitalType::Radiology => "D018",
            HospitalType::FamilyMedicine => "D022",
            HospitalType::EmergencyMedicine => "D024",
            HospitalType::Dentistry => "D026",
            HospitalType::KoreanMedicine => "D028",
            HospitalType::OralMaxillofacialSurgery => "D034",
        }
    }

    /// `dutyType` 배열에 저장되는 라벨
    pub fn label(&self) -> &'static str {
        match self {
            HospitalType::InternalMedicine => "내과",
            HospitalType::Pediatrics => "소아청소년과",
            HospitalType::Neurology => "신경과",
            HospitalType::Psychiatry => "정신건강의학과",
            HospitalType::Dermatology => "피부과",
            HospitalType::GeneralSurgery => "외과",
            HospitalType::ThoracicSurgery => "흉부외과",
            HospitalType::Orthopedics => "정형외과",
            HospitalType::Neurosurgery => "신경외과",
            HospitalType::PlasticSurgery => "성형외과",
            HospitalType::ObstetricsGynecology => "산부인과",
            HospitalType::Ophthalmology => "안과",
            HospitalType::Otolaryngology => "이비인후과",
            HospitalType::Urology => "비뇨의학과",
            HospitalType::RehabilitationMedicine => "재활의학과",
            HospitalType::Anesthesiology => "마취통증의학과",
            HospitalType::Radiology => "영상의학과",
            HospitalType::FamilyMedicine => "가정의학과",
            HospitalType::EmergencyMedicine => "응급의학과",
            HospitalType::Dentistry => "치과",
            HospitalType::KoreanMedicine => "한방",
            HospitalType::OralMaxillofacialSurgery => "구강악안면외과",
        }
    }

    /// 외부 진료과목 코드를 변환합니다. 대소문자와 앞뒤 공백은 무시합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 알 수 없는 코드
    pub fn from_code(code: &str) -> AppResult<Self> {
        let normalized = code.trim().to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|hospital_type| hospital_type.code() == normalized)
            .ok_or_else(|| AppError::ValidationError(format!("알 수 없는 진료과목 코드입니다: {}", code)))
    }
}

impl fmt::Display for HospitalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
