use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// 채팅방 참여 정보
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_chat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub chat_room_id: i64,
    pub user_id: i64,
    /// 참여자별로 보이는 채팅방 이름
    pub title: String,
    pub visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::chat_room::Entity",
        from = "Column::ChatRoomId",
        to = "super::chat_room::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    ChatRoom,
}

impl Related<super::chat_room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatRoom.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
