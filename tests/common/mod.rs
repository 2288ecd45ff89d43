//! 통합 테스트 공용 헬퍼
//!
//! 테스트마다 독립된 인메모리 SQLite DB 위에 라우터를 구성합니다.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, Set,
};
use serde_json::Value;

use teamgu_server::config::{create_tables, AppConfig};
use teamgu_server::create_router;
use teamgu_server::domain::admin::entity::{code_detail, project_info, project_track};
use teamgu_server::domain::admin::policy::{CodePolicy, ReferenceCodePolicy};
use teamgu_server::domain::chat::entity::chat::{self, ChatType};
use teamgu_server::domain::chat::entity::{chat_room, user_chat};
use teamgu_server::state::AppState;

pub struct TestApp {
    pub router: Router,
    pub db: DatabaseConnection,
}

/// 빈 인메모리 DB 연결
///
/// 인메모리 DB는 연결마다 별도로 생성되므로 풀 크기를 1로 고정합니다.
pub async fn connect() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    Database::connect(opt).await.unwrap()
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        database_url: "sqlite::memory:".to_string(),
        schema_update: true,
        log_dir: "logs".to_string(),
    }
}

pub fn app_with(db: DatabaseConnection, policy: Arc<dyn CodePolicy>) -> TestApp {
    let state = AppState::new(db.clone(), test_config(), policy);
    TestApp {
        router: create_router(state),
        db,
    }
}

/// 전체 스키마가 생성된 테스트 앱
pub async fn setup() -> TestApp {
    let db = connect().await;
    create_tables(&db).await.unwrap();
    app_with(db, Arc::new(ReferenceCodePolicy))
}

// ============== 요청/응답 헬퍼 ==============

pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ============== 데이터 준비 ==============

pub fn date(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub async fn seed_code(db: &DatabaseConnection, code_id: &str, code: i32, name: &str) {
    code_detail::Entity::insert(code_detail::ActiveModel {
        code_id: Set(code_id.to_string()),
        code: Set(code),
        name: Set(name.to_string()),
    })
    .exec_without_returning(db)
    .await
    .unwrap();
}

pub async fn seed_project(
    db: &DatabaseConnection,
    stage_code: i32,
    project_code: i32,
    track_codes: &[i32],
) -> project_info::Model {
    let project = project_info::ActiveModel {
        stage_code: Set(stage_code),
        project_code: Set(project_code),
        active_date: Set(date(2021, 7, 1)),
        start_date: Set(date(2021, 7, 12)),
        end_date: Set(date(2021, 8, 20)),
        create_date: Set(date(2021, 6, 30)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();

    for &track_code in track_codes {
        project_track::ActiveModel {
            project_info_id: Set(project.id),
            track_code: Set(track_code),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    project
}

pub async fn seed_room(db: &DatabaseConnection, title: &str) -> chat_room::Model {
    chat_room::ActiveModel {
        title: Set(title.to_string()),
        created_date: Set(date(2021, 8, 1)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap()
}

pub async fn seed_member(db: &DatabaseConnection, chat_room_id: i64, user_id: i64) {
    user_chat::ActiveModel {
        chat_room_id: Set(chat_room_id),
        user_id: Set(user_id),
        title: Set("팀 채팅".to_string()),
        visible: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}

pub async fn seed_chat(db: &DatabaseConnection, chat_room_id: i64, sender_id: i64, message: &str) {
    chat::ActiveModel {
        chat_room_id: Set(chat_room_id),
        sender_id: Set(sender_id),
        message: Set(message.to_string()),
        chat_type: Set(ChatType::Text),
        send_date_time: Set(date(2021, 8, 2)),
        ..Default::default()
    }
    .insert(db)
    .await
    .unwrap();
}
