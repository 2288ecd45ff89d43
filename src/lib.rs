pub mod config;
pub mod domain;
pub mod global;
pub mod shutdown;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        domain::health::handler::health_check,
        domain::admin::handler::get_project_info,
        domain::admin::handler::get_code_list,
        domain::admin::handler::insert_code,
        domain::admin::handler::delete_code,
        domain::chat::handler::create_room,
        domain::chat::handler::list_rooms,
        domain::chat::handler::join_room,
        domain::chat::handler::send_message,
        domain::chat::handler::list_messages,
        domain::chat::handler::delete_room,
    ),
    components(
        schemas(
            domain::health::dto::HealthStatus,
            domain::health::dto::HealthState,
            domain::health::dto::HealthChecks,
            domain::health::dto::CheckResult,
            domain::admin::dto::CodeResponse,
            domain::admin::dto::ProjectInfoResponse,
            domain::admin::dto::SuccessProjectInfoListResponse,
            domain::admin::dto::CodeListRequest,
            domain::admin::dto::CodeInsertRequest,
            domain::admin::dto::CodeDeleteRequest,
            domain::admin::dto::SuccessCodeListResponse,
            domain::chat::entity::chat::ChatType,
            domain::chat::dto::ChatRoomCreateRequest,
            domain::chat::dto::ChatRoomResponse,
            domain::chat::dto::SuccessChatRoomResponse,
            domain::chat::dto::SuccessChatRoomListResponse,
            domain::chat::dto::JoinChatRoomRequest,
            domain::chat::dto::JoinChatRoomResponse,
            domain::chat::dto::SuccessJoinChatRoomResponse,
            domain::chat::dto::SendChatRequest,
            domain::chat::dto::ChatMessageResponse,
            domain::chat::dto::SuccessChatMessageResponse,
            domain::chat::dto::SuccessChatMessageListResponse,
            domain::chat::dto::DeleteChatRoomResponse,
            domain::chat::dto::SuccessDeleteChatRoomResponse,
            utils::response::ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "헬스체크 API"),
        (name = "Admin", description = "관리자 API"),
        (name = "Chat", description = "채팅 API")
    )
)]
pub struct ApiDoc;

/// 라우터 생성
pub fn create_router(state: AppState) -> Router {
    let admin = Router::new()
        .route("/project", get(domain::admin::handler::get_project_info))
        .route("/project/code", post(domain::admin::handler::get_code_list))
        .route(
            "/project/code/insert",
            post(domain::admin::handler::insert_code),
        )
        .route(
            "/project/code/delete",
            post(domain::admin::handler::delete_code),
        );

    let chat = Router::new()
        .route(
            "/room",
            post(domain::chat::handler::create_room).get(domain::chat::handler::list_rooms),
        )
        .route(
            "/room/:room_id",
            axum::routing::delete(domain::chat::handler::delete_room),
        )
        .route("/room/:room_id/join", post(domain::chat::handler::join_room))
        .route(
            "/room/:room_id/message",
            post(domain::chat::handler::send_message).get(domain::chat::handler::list_messages),
        );

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(domain::health::health_check))
        .nest("/api/admin", admin)
        .nest("/api/chat", chat)
        .layer(middleware::from_fn(
            global::middleware::request_id_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
