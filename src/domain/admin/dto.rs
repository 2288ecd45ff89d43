use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// 코드 이름 최대 길이 (trim 후 기준)
pub const CODE_NAME_MAX_LENGTH: usize = 45;

// ============== 프로젝트 조회 ==============

/// 코드 번호와 이름
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeResponse {
    pub code: i32,
    pub code_name: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfoResponse {
    pub id: i64,
    /// "{기수} {프로젝트}" 형식의 표시 이름
    #[schema(example = "5기 공통")]
    pub name: String,
    pub stage: CodeResponse,
    pub project: CodeResponse,
    pub track: Vec<CodeResponse>,
    pub active_date: NaiveDateTime,
    pub start_date: NaiveDateTime,
    pub end_date: NaiveDateTime,
}

/// 프로젝트 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessProjectInfoListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<ProjectInfoResponse>,
}

// ============== 코드 조회/입력/삭제 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeListRequest {
    #[validate(length(min = 1, max = 2, message = "코드 그룹은 1~2자여야 합니다."))]
    #[schema(example = "AT")]
    pub code_id: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeInsertRequest {
    #[validate(length(min = 1, max = 2, message = "코드 그룹은 1~2자여야 합니다."))]
    #[schema(example = "AT")]
    pub code_id: String,

    /// 앞뒤 공백을 제거한 뒤 1~45자
    #[schema(example = "인공지능")]
    pub code_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CodeDeleteRequest {
    #[validate(length(min = 1, max = 2, message = "코드 그룹은 1~2자여야 합니다."))]
    #[schema(example = "AT")]
    pub code_id: String,

    #[schema(example = 101)]
    pub code: i32,
}

/// 코드 조회 성공 응답 (Swagger 문서용)
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessCodeListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<CodeResponse>,
}
