use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

#[allow(unused_imports)]
use super::dto::{SuccessCodeListResponse, SuccessProjectInfoListResponse};
use super::dto::{
    CodeDeleteRequest, CodeInsertRequest, CodeListRequest, CodeResponse, ProjectInfoResponse,
};
use super::service::AdminService;
use crate::state::AppState;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::ErrorResponse;
use crate::utils::BaseResponse;

/// 프로젝트 조회 API
///
/// 등록된 모든 프로젝트 정보를 반환합니다.
#[utoipa::path(
    get,
    path = "/api/admin/project",
    responses(
        (status = 200, description = "프로젝트 조회 성공", body = SuccessProjectInfoListResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn get_project_info(
    State(state): State<AppState>,
) -> Result<Json<BaseResponse<Vec<ProjectInfoResponse>>>, AppError> {
    let list = AdminService::get_project_info(&state).await?;

    Ok(Json(BaseResponse::success(list)))
}

/// 코드 조회 API
#[utoipa::path(
    post,
    path = "/api/admin/project/code",
    request_body = CodeListRequest,
    responses(
        (status = 200, description = "코드 조회 성공", body = SuccessCodeListResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn get_code_list(
    State(state): State<AppState>,
    request: Result<Json<CodeListRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<Vec<CodeResponse>>>, AppError> {
    let Json(req) = request?;
    req.validate()?;

    let list = AdminService::select_code(&state, &req.code_id).await?;

    Ok(Json(BaseResponse::success(list)))
}

/// 코드 입력 API
///
/// 이름이 비어 있거나 이미 존재하는 코드이면 400을 반환하며, 성공 시 본문 없이 200을 반환합니다.
#[utoipa::path(
    post,
    path = "/api/admin/project/code/insert",
    request_body = CodeInsertRequest,
    responses(
        (status = 200, description = "코드 입력 성공"),
        (status = 400, description = "빈 이름 또는 입력 불가 코드", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn insert_code(
    State(state): State<AppState>,
    request: Result<Json<CodeInsertRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(req) = request?;
    req.validate()?;

    AdminService::insert_code(&state, &req.code_id, &req.code_name).await?;

    Ok(StatusCode::OK)
}

/// 코드 삭제 API
///
/// 다른 곳에서 참조 중이거나 존재하지 않는 코드이면 400을 반환합니다.
#[utoipa::path(
    post,
    path = "/api/admin/project/code/delete",
    request_body = CodeDeleteRequest,
    responses(
        (status = 200, description = "코드 삭제 성공"),
        (status = 400, description = "삭제 불가 코드", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Admin"
)]
pub async fn delete_code(
    State(state): State<AppState>,
    request: Result<Json<CodeDeleteRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Json(req) = request?;
    req.validate()?;

    AdminService::delete_code(&state, &req.code_id, req.code).await?;

    Ok(StatusCode::OK)
}
