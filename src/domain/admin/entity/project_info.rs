use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    /// 기수 코드 (그룹 `AA`)
    pub stage_code: i32,
    /// 프로젝트 코드 (그룹 `AM`)
    pub project_code: i32,
    pub active_date: DateTime,
    pub start_date: DateTime,
    pub end_date: DateTime,
    pub create_date: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_track::Entity")]
    ProjectTrack,
}

impl Related<super::project_track::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTrack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
