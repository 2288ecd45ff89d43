use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::entity::chat::{self, ChatType};
use super::entity::chat_room;

/// 채팅방 이름 최대 길이
pub const CHAT_ROOM_TITLE_MAX_LENGTH: usize = 45;
/// 메시지 최대 길이
pub const CHAT_MESSAGE_MAX_LENGTH: usize = 1000;

// ============== 채팅방 생성/조회 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoomCreateRequest {
    #[validate(length(min = 1, max = 45, message = "채팅방 이름은 1~45자여야 합니다."))]
    #[schema(example = "A101 팀 채팅")]
    pub title: String,

    #[validate(length(min = 1, message = "참여자는 최소 1명 이상이어야 합니다."))]
    pub user_ids: Vec<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoomResponse {
    pub chat_room_id: i64,
    pub title: String,
    pub created_date: NaiveDateTime,
}

impl From<chat_room::Model> for ChatRoomResponse {
    fn from(room: chat_room::Model) -> Self {
        Self {
            chat_room_id: room.id,
            title: room.title,
            created_date: room.created_date,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ChatRoomListQuery {
    /// 참여 중인 채팅방을 조회할 사용자 ID
    pub user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessChatRoomResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ChatRoomResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessChatRoomListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<ChatRoomResponse>,
}

// ============== 채팅방 참여 ==============

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinChatRoomRequest {
    pub user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JoinChatRoomResponse {
    pub chat_room_id: i64,
    pub user_id: i64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessJoinChatRoomResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: JoinChatRoomResponse,
}

// ============== 메시지 전송/조회 ==============

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SendChatRequest {
    pub sender_id: i64,

    #[validate(length(min = 1, max = 1000, message = "메시지는 1~1000자여야 합니다."))]
    pub message: String,

    /// 생략 시 `TEXT`
    #[serde(rename = "type")]
    pub chat_type: Option<ChatType>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessageResponse {
    pub chat_id: i64,
    pub chat_room_id: i64,
    pub sender_id: i64,
    pub message: String,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    pub send_date_time: NaiveDateTime,
}

impl From<chat::Model> for ChatMessageResponse {
    fn from(chat: chat::Model) -> Self {
        Self {
            chat_id: chat.id,
            chat_room_id: chat.chat_room_id,
            sender_id: chat.sender_id,
            message: chat.message,
            chat_type: chat.chat_type,
            send_date_time: chat.send_date_time,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessChatMessageResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: ChatMessageResponse,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessChatMessageListResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: Vec<ChatMessageResponse>,
}

// ============== 채팅방 삭제 ==============

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteChatRoomResponse {
    pub chat_room_id: i64,
    /// 함께 삭제된 채팅 수
    pub deleted_chats: u64,
    /// 함께 삭제된 참여자 수
    pub deleted_members: u64,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SuccessDeleteChatRoomResponse {
    pub is_success: bool,
    pub code: String,
    pub message: String,
    pub result: DeleteChatRoomResponse,
}
