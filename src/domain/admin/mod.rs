pub mod dto;
pub mod entity;
pub mod handler;
pub mod policy;
pub mod service;

/// 기수 코드 그룹
pub const STAGE_CODE_GROUP: &str = "AA";
/// 프로젝트 코드 그룹
pub const PROJECT_CODE_GROUP: &str = "AM";
/// 트랙 코드 그룹
pub const TRACK_CODE_GROUP: &str = "AT";
