pub mod hospital_list_query;

pub use hospital_list_query::HospitalListQuery;
