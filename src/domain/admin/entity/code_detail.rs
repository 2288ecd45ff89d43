use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 공통 코드 상세
///
/// `code_id`는 코드 그룹(예: `AA` 기수, `AM` 프로젝트, `AT` 트랙), `code`는 그룹 내 번호입니다.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "code_detail")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
