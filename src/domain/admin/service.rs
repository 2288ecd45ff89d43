use std::collections::HashMap;

use sea_orm::{
    ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set, SqlErr,
    TransactionTrait,
};
use tracing::{info, warn};

use crate::state::AppState;
use crate::utils::error::AppError;

use super::dto::{CodeResponse, ProjectInfoResponse, CODE_NAME_MAX_LENGTH};
use super::entity::{code_detail, project_info, project_track};
use super::{PROJECT_CODE_GROUP, STAGE_CODE_GROUP, TRACK_CODE_GROUP};

/// 비어 있는 그룹에 처음 입력되는 코드 번호
pub const FIRST_CODE: i32 = 100;

pub struct AdminService;

impl AdminService {
    /// 전체 프로젝트 정보 조회
    pub async fn get_project_info(state: &AppState) -> Result<Vec<ProjectInfoResponse>, AppError> {
        let projects = project_info::Entity::find()
            .find_with_related(project_track::Entity)
            .order_by_asc(project_info::Column::Id)
            .all(&state.db)
            .await?;

        let code_names: HashMap<(String, i32), String> = code_detail::Entity::find()
            .filter(code_detail::Column::CodeId.is_in([
                STAGE_CODE_GROUP,
                PROJECT_CODE_GROUP,
                TRACK_CODE_GROUP,
            ]))
            .all(&state.db)
            .await?
            .into_iter()
            .map(|c| ((c.code_id, c.code), c.name))
            .collect();

        let resolve = |group: &str, code: i32| CodeResponse {
            code,
            code_name: code_names
                .get(&(group.to_string(), code))
                .cloned()
                .unwrap_or_default(),
        };

        let result = projects
            .into_iter()
            .map(|(project, tracks)| {
                let stage = resolve(STAGE_CODE_GROUP, project.stage_code);
                let project_code = resolve(PROJECT_CODE_GROUP, project.project_code);
                let mut track: Vec<CodeResponse> = tracks
                    .iter()
                    .map(|t| resolve(TRACK_CODE_GROUP, t.track_code))
                    .collect();
                track.sort_by_key(|t| t.code);

                ProjectInfoResponse {
                    id: project.id,
                    name: format!("{} {}", stage.code_name, project_code.code_name)
                        .trim()
                        .to_string(),
                    stage,
                    project: project_code,
                    track,
                    active_date: project.active_date,
                    start_date: project.start_date,
                    end_date: project.end_date,
                }
            })
            .collect();

        Ok(result)
    }

    /// 코드 그룹에 속한 코드 목록 조회
    pub async fn select_code(state: &AppState, code_id: &str) -> Result<Vec<CodeResponse>, AppError> {
        let codes = code_detail::Entity::find()
            .filter(code_detail::Column::CodeId.eq(code_id))
            .order_by_asc(code_detail::Column::Code)
            .all(&state.db)
            .await?;

        Ok(codes
            .into_iter()
            .map(|c| CodeResponse {
                code: c.code,
                code_name: c.name,
            })
            .collect())
    }

    /// 코드 입력
    ///
    /// 이름은 trim 후 1~45자여야 합니다. 새 코드 번호는 그룹 내 최댓값 + 1입니다.
    /// 동시 입력으로 유니크 인덱스에 걸리면 중복 입력과 같은 에러로 응답합니다.
    pub async fn insert_code(
        state: &AppState,
        code_id: &str,
        code_name: &str,
    ) -> Result<CodeResponse, AppError> {
        let code_name = code_name.trim();
        if code_name.is_empty() {
            return Err(AppError::validation_error("코드 이름을 입력해주세요."));
        }
        if code_name.chars().count() > CODE_NAME_MAX_LENGTH {
            return Err(AppError::validation_error(format!(
                "코드 이름은 {}자를 초과할 수 없습니다.",
                CODE_NAME_MAX_LENGTH
            )));
        }

        let txn = state.db.begin().await?;

        if !state
            .code_policy
            .check_insertable(&txn, code_id, code_name)
            .await?
        {
            return Err(AppError::CodeNotInsertable(format!(
                "이미 존재하는 코드입니다: {}",
                code_name
            )));
        }

        let max_code: Option<Option<i32>> = code_detail::Entity::find()
            .select_only()
            .column_as(code_detail::Column::Code.max(), "max_code")
            .filter(code_detail::Column::CodeId.eq(code_id))
            .into_tuple()
            .one(&txn)
            .await?;
        let code = max_code.flatten().map_or(FIRST_CODE, |max| max + 1);

        code_detail::Entity::insert(code_detail::ActiveModel {
            code_id: Set(code_id.to_string()),
            code: Set(code),
            name: Set(code_name.to_string()),
        })
        .exec_without_returning(&txn)
        .await
        .map_err(|e| Self::map_insert_error(e, code_id, code_name))?;

        txn.commit().await?;

        info!(code_id = code_id, code = code, code_name = code_name, "코드 입력 완료");

        Ok(CodeResponse {
            code,
            code_name: code_name.to_string(),
        })
    }

    /// 코드 삭제
    pub async fn delete_code(state: &AppState, code_id: &str, code: i32) -> Result<(), AppError> {
        let txn = state.db.begin().await?;

        if !state.code_policy.check_deletable(&txn, code_id, code).await? {
            return Err(AppError::CodeNotDeletable(format!(
                "삭제할 수 없는 코드입니다: {} {}",
                code_id, code
            )));
        }

        let deleted = code_detail::Entity::delete_by_id((code_id.to_string(), code))
            .exec(&txn)
            .await?;

        if deleted.rows_affected != 1 {
            return Err(AppError::internal_error(format!(
                "코드 삭제 결과가 올바르지 않습니다: {} rows",
                deleted.rows_affected
            )));
        }

        txn.commit().await?;

        info!(code_id = code_id, code = code, "코드 삭제 완료");

        Ok(())
    }

    /// 유니크 제약 위반은 코드 입력 불가로, 그 외는 서버 오류로 변환
    fn map_insert_error(err: DbErr, code_id: &str, code_name: &str) -> AppError {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                warn!(code_id = code_id, detail = %detail, "코드 입력 중 유니크 제약 위반");
                AppError::CodeNotInsertable(format!("이미 존재하는 코드입니다: {}", code_name))
            }
            _ => AppError::from(err),
        }
    }
}
