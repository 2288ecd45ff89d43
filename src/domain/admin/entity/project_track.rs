use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 프로젝트별 트랙 매핑 (트랙 코드 그룹 `AT`)
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_track")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub project_info_id: i64,
    pub track_code: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project_info::Entity",
        from = "Column::ProjectInfoId",
        to = "super::project_info::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ProjectInfo,
}

impl Related<super::project_info::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectInfo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
