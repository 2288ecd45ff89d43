pub mod code_detail;
pub mod project_info;
pub mod project_track;
