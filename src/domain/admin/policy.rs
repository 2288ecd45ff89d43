use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};

use super::entity::{code_detail, project_info, project_track};
use super::{PROJECT_CODE_GROUP, STAGE_CODE_GROUP, TRACK_CODE_GROUP};

/// 공통 코드 입력/삭제 가능 여부를 판단하는 규칙
///
/// 검사는 변경과 같은 트랜잭션 안에서 수행됩니다.
#[async_trait]
pub trait CodePolicy: Send + Sync {
    /// `code_name`은 이미 trim된 값입니다.
    async fn check_insertable(
        &self,
        txn: &DatabaseTransaction,
        code_id: &str,
        code_name: &str,
    ) -> Result<bool, DbErr>;

    async fn check_deletable(
        &self,
        txn: &DatabaseTransaction,
        code_id: &str,
        code: i32,
    ) -> Result<bool, DbErr>;
}

/// 기본 규칙
///
/// - 입력: 같은 그룹에 같은 이름의 코드가 없어야 합니다.
/// - 삭제: 코드가 존재하고, 프로젝트 정보(기수/프로젝트)나 프로젝트 트랙에서 참조되지 않아야 합니다.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceCodePolicy;

#[async_trait]
impl CodePolicy for ReferenceCodePolicy {
    async fn check_insertable(
        &self,
        txn: &DatabaseTransaction,
        code_id: &str,
        code_name: &str,
    ) -> Result<bool, DbErr> {
        let duplicates = code_detail::Entity::find()
            .filter(code_detail::Column::CodeId.eq(code_id))
            .filter(code_detail::Column::Name.eq(code_name))
            .count(txn)
            .await?;

        Ok(duplicates == 0)
    }

    async fn check_deletable(
        &self,
        txn: &DatabaseTransaction,
        code_id: &str,
        code: i32,
    ) -> Result<bool, DbErr> {
        let exists = code_detail::Entity::find_by_id((code_id.to_string(), code))
            .one(txn)
            .await?
            .is_some();
        if !exists {
            return Ok(false);
        }

        let references = match code_id {
            STAGE_CODE_GROUP => {
                project_info::Entity::find()
                    .filter(project_info::Column::StageCode.eq(code))
                    .count(txn)
                    .await?
            }
            PROJECT_CODE_GROUP => {
                project_info::Entity::find()
                    .filter(project_info::Column::ProjectCode.eq(code))
                    .count(txn)
                    .await?
            }
            TRACK_CODE_GROUP => {
                project_track::Entity::find()
                    .filter(project_track::Column::TrackCode.eq(code))
                    .count(txn)
                    .await?
            }
            _ => 0,
        };

        if references > 0 {
            tracing::debug!(
                code_id = code_id,
                code = code,
                references = references,
                "참조 중인 코드입니다"
            );
        }

        Ok(references == 0)
    }
}
