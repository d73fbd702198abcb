//! 진료 시간 포맷팅
//!
//! 병원 문서의 "HHMM" 시작/종료 문자열을 화면 표시용 "HH:MM - HH:MM"으로 바꿉니다.

use crate::domain::entities::hospitals::{DUTY_TIME_SLOTS, Hospital};

/// 진료하지 않는 슬롯의 표시 문자열
pub const CLOSED_LABEL: &str = "휴진";

/// 정확히 네 자리 ASCII 숫자인지 확인합니다.
pub fn is_hhmm(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

/// "0900", "1800" → "09:00 - 18:00"
///
/// 어느 한쪽이라도 "HHMM" 형식이 아니면 [`CLOSED_LABEL`]을 반환합니다.
pub fn format_hours(start: &str, end: &str) -> String {
    if !is_hhmm(start) || !is_hhmm(end) {
        return CLOSED_LABEL.to_string();
    }
    format!("{}:{} - {}:{}", &start[0..2], &start[2..4], &end[0..2], &end[2..4])
}

/// 병원의 여섯 진료 시간 슬롯을 순서대로 포맷팅합니다.
pub fn opening_hours(hospital: &Hospital) -> [String; DUTY_TIME_SLOTS] {
    hospital.duty_times().map(|(start, end)| format_hours(start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours_inserts_colons() {
        assert_eq!(format_hours("0900", "1800"), "09:00 - 18:00");
        assert_eq!(format_hours("0000", "2359"), "00:00 - 23:59");
        assert_eq!(format_hours("1330", "2400"), "13:30 - 24:00");
    }

    #[test]
    fn test_every_valid_pair_formats_with_colon_after_two_digits() {
        for h in (0..24).step_by(5) {
            for m in (0..60).step_by(15) {
                let start = format!("{:02}{:02}", h, m);
                let end = format!("{:02}{:02}", 23 - h, 59 - m);
                let formatted = format_hours(&start, &end);

                assert_eq!(
                    formatted,
                    format!("{}:{} - {}:{}", &start[..2], &start[2..], &end[..2], &end[2..])
                );
            }
        }
    }

    #[test]
    fn test_empty_or_malformed_slot_is_closed() {
        assert_eq!(format_hours("", ""), CLOSED_LABEL);
        assert_eq!(format_hours("0900", ""), CLOSED_LABEL);
        assert_eq!(format_hours("900", "1800"), CLOSED_LABEL);
        assert_eq!(format_hours("09:00", "18:00"), CLOSED_LABEL);
        assert_eq!(format_hours("09a0", "1800"), CLOSED_LABEL);
    }

    #[test]
    fn test_is_hhmm_rejects_multibyte() {
        assert!(is_hhmm("0830"));
        assert!(!is_hhmm("０８３０"));
        assert!(!is_hhmm("08300"));
    }
}
