use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use validator::Validate;

#[allow(unused_imports)]
use super::dto::{
    SuccessChatMessageListResponse, SuccessChatMessageResponse, SuccessChatRoomListResponse,
    SuccessChatRoomResponse, SuccessDeleteChatRoomResponse, SuccessJoinChatRoomResponse,
};
use super::dto::{
    ChatMessageResponse, ChatRoomCreateRequest, ChatRoomListQuery, ChatRoomResponse,
    DeleteChatRoomResponse, JoinChatRoomRequest, JoinChatRoomResponse, SendChatRequest,
};
use super::service::ChatService;
use crate::state::AppState;
use crate::utils::error::AppError;
#[allow(unused_imports)]
use crate::utils::ErrorResponse;
use crate::utils::BaseResponse;

/// 채팅방 생성 API
#[utoipa::path(
    post,
    path = "/api/chat/room",
    request_body = ChatRoomCreateRequest,
    responses(
        (status = 200, description = "채팅방 생성 성공", body = SuccessChatRoomResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn create_room(
    State(state): State<AppState>,
    request: Result<Json<ChatRoomCreateRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<ChatRoomResponse>>, AppError> {
    let Json(req) = request?;
    req.validate()?;

    let room = ChatService::create_room(&state, req).await?;

    Ok(Json(BaseResponse::success(room)))
}

/// 참여 중인 채팅방 목록 조회 API
#[utoipa::path(
    get,
    path = "/api/chat/room",
    params(ChatRoomListQuery),
    responses(
        (status = 200, description = "채팅방 목록 조회 성공", body = SuccessChatRoomListResponse),
        (status = 400, description = "잘못된 요청", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn list_rooms(
    State(state): State<AppState>,
    query: Result<Query<ChatRoomListQuery>, QueryRejection>,
) -> Result<Json<BaseResponse<Vec<ChatRoomResponse>>>, AppError> {
    let Query(query) = query?;
    let rooms = ChatService::list_rooms(&state, query.user_id).await?;

    Ok(Json(BaseResponse::success(rooms)))
}

/// 채팅방 참여 API
#[utoipa::path(
    post,
    path = "/api/chat/room/{roomId}/join",
    params(("roomId" = i64, Path, description = "채팅방 ID")),
    request_body = JoinChatRoomRequest,
    responses(
        (status = 200, description = "채팅방 참여 성공", body = SuccessJoinChatRoomResponse),
        (status = 400, description = "이미 참여 중인 채팅방", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 채팅방", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn join_room(
    State(state): State<AppState>,
    room_id: Result<Path<i64>, PathRejection>,
    request: Result<Json<JoinChatRoomRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<JoinChatRoomResponse>>, AppError> {
    let Path(room_id) = room_id?;
    let Json(req) = request?;

    let result = ChatService::join_room(&state, room_id, req.user_id).await?;

    Ok(Json(BaseResponse::success(result)))
}

/// 메시지 전송 API
#[utoipa::path(
    post,
    path = "/api/chat/room/{roomId}/message",
    params(("roomId" = i64, Path, description = "채팅방 ID")),
    request_body = SendChatRequest,
    responses(
        (status = 200, description = "메시지 전송 성공", body = SuccessChatMessageResponse),
        (status = 400, description = "잘못된 요청 또는 참여자가 아님", body = ErrorResponse),
        (status = 404, description = "존재하지 않는 채팅방", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn send_message(
    State(state): State<AppState>,
    room_id: Result<Path<i64>, PathRejection>,
    request: Result<Json<SendChatRequest>, JsonRejection>,
) -> Result<Json<BaseResponse<ChatMessageResponse>>, AppError> {
    let Path(room_id) = room_id?;
    let Json(req) = request?;
    req.validate()?;

    let chat = ChatService::send_message(&state, room_id, req).await?;

    Ok(Json(BaseResponse::success(chat)))
}

/// 채팅 내역 조회 API
#[utoipa::path(
    get,
    path = "/api/chat/room/{roomId}/message",
    params(("roomId" = i64, Path, description = "채팅방 ID")),
    responses(
        (status = 200, description = "채팅 내역 조회 성공", body = SuccessChatMessageListResponse),
        (status = 404, description = "존재하지 않는 채팅방", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    room_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BaseResponse<Vec<ChatMessageResponse>>>, AppError> {
    let Path(room_id) = room_id?;
    let chats = ChatService::list_messages(&state, room_id).await?;

    Ok(Json(BaseResponse::success(chats)))
}

/// 채팅방 삭제 API
///
/// 채팅방과 함께 채팅 내역, 참여자 목록이 모두 삭제되며 복구할 수 없습니다.
#[utoipa::path(
    delete,
    path = "/api/chat/room/{roomId}",
    params(("roomId" = i64, Path, description = "채팅방 ID")),
    responses(
        (status = 200, description = "채팅방 삭제 성공", body = SuccessDeleteChatRoomResponse),
        (status = 404, description = "존재하지 않는 채팅방", body = ErrorResponse),
        (status = 500, description = "서버 내부 오류", body = ErrorResponse)
    ),
    tag = "Chat"
)]
pub async fn delete_room(
    State(state): State<AppState>,
    room_id: Result<Path<i64>, PathRejection>,
) -> Result<Json<BaseResponse<DeleteChatRoomResponse>>, AppError> {
    let Path(room_id) = room_id?;
    let result = ChatService::delete_room(&state, room_id).await?;

    Ok(Json(BaseResponse::success(result)))
}
