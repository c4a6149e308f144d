pub mod elective_detail;
pub mod electives;
pub mod login;
