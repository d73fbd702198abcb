pub mod hospital_response;

pub use hospital_response::{HospitalDetailResponse, HospitalSummaryResponse, PharmacyResponse};
