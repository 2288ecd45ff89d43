use std::collections::BTreeSet;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};
use sea_orm::sea_query::JoinType;
use tracing::{info, warn};

use crate::state::AppState;
use crate::utils::error::AppError;

use super::dto::{
    ChatMessageResponse, ChatRoomCreateRequest, ChatRoomResponse, DeleteChatRoomResponse,
    JoinChatRoomResponse, SendChatRequest, CHAT_MESSAGE_MAX_LENGTH, CHAT_ROOM_TITLE_MAX_LENGTH,
};
use super::entity::chat::{self, ChatType};
use super::entity::{chat_room, user_chat};

/// 채팅방 연쇄 삭제 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeDeleteResult {
    pub chats_deleted: u64,
    pub members_deleted: u64,
    pub rooms_deleted: u64,
}

pub struct ChatService;

impl ChatService {
    /// 채팅방 생성
    ///
    /// 채팅방과 참여자 목록을 하나의 트랜잭션으로 생성합니다. 중복된 사용자 ID는 한 번만 등록됩니다.
    pub async fn create_room(
        state: &AppState,
        req: ChatRoomCreateRequest,
    ) -> Result<ChatRoomResponse, AppError> {
        let title = Self::validate_title(&req.title)?;
        let user_ids: BTreeSet<i64> = req.user_ids.into_iter().collect();

        let txn = state.db.begin().await?;

        let room = chat_room::ActiveModel {
            title: Set(title.clone()),
            created_date: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        if !user_ids.is_empty() {
            let members = user_ids.iter().map(|&user_id| user_chat::ActiveModel {
                chat_room_id: Set(room.id),
                user_id: Set(user_id),
                title: Set(title.clone()),
                visible: Set(true),
                ..Default::default()
            });
            user_chat::Entity::insert_many(members)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        info!(
            chat_room_id = room.id,
            member_count = user_ids.len(),
            "채팅방 생성 완료"
        );

        Ok(room.into())
    }

    /// 사용자가 참여 중인 채팅방 목록 조회 (최신순)
    pub async fn list_rooms(
        state: &AppState,
        user_id: i64,
    ) -> Result<Vec<ChatRoomResponse>, AppError> {
        let rooms = chat_room::Entity::find()
            .join(JoinType::InnerJoin, chat_room::Relation::UserChat.def())
            .filter(user_chat::Column::UserId.eq(user_id))
            .filter(user_chat::Column::Visible.eq(true))
            .order_by_desc(chat_room::Column::CreatedDate)
            .order_by_desc(chat_room::Column::Id)
            .all(&state.db)
            .await?;

        Ok(rooms.into_iter().map(ChatRoomResponse::from).collect())
    }

    /// 채팅방 참여
    pub async fn join_room(
        state: &AppState,
        chat_room_id: i64,
        user_id: i64,
    ) -> Result<JoinChatRoomResponse, AppError> {
        let txn = state.db.begin().await?;

        let room = Self::find_room(&txn, chat_room_id).await?;

        if Self::is_member(&txn, chat_room_id, user_id).await? {
            return Err(AppError::bad_request("이미 참여 중인 채팅방입니다."));
        }

        user_chat::ActiveModel {
            chat_room_id: Set(room.id),
            user_id: Set(user_id),
            title: Set(room.title),
            visible: Set(true),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        info!(chat_room_id = chat_room_id, user_id = user_id, "채팅방 참여 완료");

        Ok(JoinChatRoomResponse {
            chat_room_id,
            user_id,
        })
    }

    /// 메시지 전송
    ///
    /// 채팅방 참여자만 메시지를 보낼 수 있습니다.
    pub async fn send_message(
        state: &AppState,
        chat_room_id: i64,
        req: SendChatRequest,
    ) -> Result<ChatMessageResponse, AppError> {
        let message = Self::validate_message(&req.message)?;

        Self::find_room(&state.db, chat_room_id).await?;

        if !Self::is_member(&state.db, chat_room_id, req.sender_id).await? {
            return Err(AppError::bad_request("채팅방 참여자만 메시지를 보낼 수 있습니다."));
        }

        let chat = chat::ActiveModel {
            chat_room_id: Set(chat_room_id),
            sender_id: Set(req.sender_id),
            message: Set(message),
            chat_type: Set(req.chat_type.unwrap_or(ChatType::Text)),
            send_date_time: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&state.db)
        .await?;

        Ok(chat.into())
    }

    /// 채팅 내역 조회 (보낸 시간순)
    pub async fn list_messages(
        state: &AppState,
        chat_room_id: i64,
    ) -> Result<Vec<ChatMessageResponse>, AppError> {
        Self::find_room(&state.db, chat_room_id).await?;

        let chats = chat::Entity::find()
            .filter(chat::Column::ChatRoomId.eq(chat_room_id))
            .order_by_asc(chat::Column::SendDateTime)
            .order_by_asc(chat::Column::Id)
            .all(&state.db)
            .await?;

        Ok(chats.into_iter().map(ChatMessageResponse::from).collect())
    }

    /// 채팅방 삭제
    ///
    /// 채팅 내역과 참여자 목록을 같은 트랜잭션에서 함께 삭제합니다.
    /// 도중에 실패하면 트랜잭션이 롤백되어 어떤 행도 삭제되지 않습니다.
    pub async fn delete_room(
        state: &AppState,
        chat_room_id: i64,
    ) -> Result<DeleteChatRoomResponse, AppError> {
        info!(chat_room_id = chat_room_id, "채팅방 삭제 요청");

        let txn = state.db.begin().await?;

        Self::find_room(&txn, chat_room_id).await?;

        let result = Self::delete_room_cascade(&txn, chat_room_id).await?;

        if result.rooms_deleted != 1 {
            warn!(
                chat_room_id = chat_room_id,
                rooms_deleted = result.rooms_deleted,
                "채팅방 삭제 결과가 올바르지 않아 롤백합니다"
            );
            return Err(AppError::internal_error("채팅방 삭제에 실패했습니다."));
        }

        txn.commit().await?;

        info!(
            chat_room_id = chat_room_id,
            chats_deleted = result.chats_deleted,
            members_deleted = result.members_deleted,
            "채팅방 및 연관 데이터 삭제 완료"
        );

        Ok(DeleteChatRoomResponse {
            chat_room_id,
            deleted_chats: result.chats_deleted,
            deleted_members: result.members_deleted,
        })
    }

    /// 채팅 -> 참여자 -> 채팅방 순서로 삭제합니다.
    ///
    /// 호출자가 넘긴 연결(보통 트랜잭션) 위에서 실행되며, 커밋 여부는 호출자가 결정합니다.
    pub async fn delete_room_cascade<C>(
        conn: &C,
        chat_room_id: i64,
    ) -> Result<CascadeDeleteResult, DbErr>
    where
        C: ConnectionTrait,
    {
        let chats_deleted = chat::Entity::delete_many()
            .filter(chat::Column::ChatRoomId.eq(chat_room_id))
            .exec(conn)
            .await?
            .rows_affected;

        let members_deleted = user_chat::Entity::delete_many()
            .filter(user_chat::Column::ChatRoomId.eq(chat_room_id))
            .exec(conn)
            .await?
            .rows_affected;

        let rooms_deleted = chat_room::Entity::delete_by_id(chat_room_id)
            .exec(conn)
            .await?
            .rows_affected;

        Ok(CascadeDeleteResult {
            chats_deleted,
            members_deleted,
            rooms_deleted,
        })
    }

    async fn find_room<C>(conn: &C, chat_room_id: i64) -> Result<chat_room::Model, AppError>
    where
        C: ConnectionTrait,
    {
        chat_room::Entity::find_by_id(chat_room_id)
            .one(conn)
            .await?
            .ok_or_else(|| AppError::not_found("존재하지 않는 채팅방입니다."))
    }

    async fn is_member<C>(conn: &C, chat_room_id: i64, user_id: i64) -> Result<bool, AppError>
    where
        C: ConnectionTrait,
    {
        let count = user_chat::Entity::find()
            .filter(user_chat::Column::ChatRoomId.eq(chat_room_id))
            .filter(user_chat::Column::UserId.eq(user_id))
            .count(conn)
            .await?;

        Ok(count > 0)
    }

    /// 채팅방 이름 검증 (trim 후 1~45자)
    fn validate_title(title: &str) -> Result<String, AppError> {
        let title = title.trim();
        let len = title.chars().count();
        if len == 0 || len > CHAT_ROOM_TITLE_MAX_LENGTH {
            return Err(AppError::validation_error(format!(
                "채팅방 이름은 1~{}자여야 합니다.",
                CHAT_ROOM_TITLE_MAX_LENGTH
            )));
        }
        Ok(title.to_string())
    }

    /// 메시지 검증 (trim 후 1~1000자)
    fn validate_message(message: &str) -> Result<String, AppError> {
        let trimmed = message.trim();
        let len = trimmed.chars().count();
        if len == 0 || len > CHAT_MESSAGE_MAX_LENGTH {
            return Err(AppError::validation_error(format!(
                "메시지는 1~{}자여야 합니다.",
                CHAT_MESSAGE_MAX_LENGTH
            )));
        }
        Ok(trimmed.to_string())
    }
}
