//! 관리자 코드 관리 API 테스트
//!
//! 테스트 대상:
//! - POST /api/admin/project/code
//! - POST /api/admin/project/code/insert
//! - POST /api/admin/project/code/delete

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::StatusCode;
use sea_orm::{
    ColumnTrait, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
};
use serde_json::json;
use tower::ServiceExt;

use common::{body_bytes, body_json, json_request, seed_code, seed_project, setup};
use teamgu_server::domain::admin::entity::code_detail;
use teamgu_server::domain::admin::policy::CodePolicy;

const LIST_URI: &str = "/api/admin/project/code";
const INSERT_URI: &str = "/api/admin/project/code/insert";
const DELETE_URI: &str = "/api/admin/project/code/delete";

async fn count_codes(db: &sea_orm::DatabaseConnection, code_id: &str) -> u64 {
    code_detail::Entity::find()
        .filter(code_detail::Column::CodeId.eq(code_id))
        .count(db)
        .await
        .unwrap()
}

// ============== 코드 조회 ==============

#[tokio::test]
async fn should_return_codes_of_group_ordered_by_code() {
    // Arrange
    let app = setup().await;
    seed_code(&app.db, "AT", 102, "인공지능").await;
    seed_code(&app.db, "AT", 101, "웹 기술").await;
    seed_code(&app.db, "AA", 105, "5기").await;

    // Act
    let response = app
        .router
        .oneshot(json_request("POST", LIST_URI, json!({ "codeId": "AT" })))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["isSuccess"], true);
    assert_eq!(
        body["result"],
        json!([
            { "code": 101, "codeName": "웹 기술" },
            { "code": 102, "codeName": "인공지능" }
        ])
    );
}

#[tokio::test]
async fn should_return_empty_list_for_unknown_group() {
    let app = setup().await;

    let response = app
        .router
        .oneshot(json_request("POST", LIST_URI, json!({ "codeId": "ZZ" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["result"], json!([]));
}

// ============== 코드 입력 ==============

#[tokio::test]
async fn should_insert_code_with_next_number_and_empty_body() {
    // Arrange
    let app = setup().await;
    seed_code(&app.db, "AT", 101, "웹 기술").await;
    seed_code(&app.db, "AT", 104, "인공지능").await;

    // Act
    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            INSERT_URI,
            json!({ "codeId": "AT", "codeName": "  블록체인  " }),
        ))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());

    let inserted = code_detail::Entity::find_by_id(("AT".to_string(), 105))
        .one(&app.db)
        .await
        .unwrap()
        .expect("새 코드가 입력되어야 함");
    assert_eq!(inserted.name, "블록체인");
    assert_eq!(count_codes(&app.db, "AT").await, 3);
}

#[tokio::test]
async fn should_start_from_first_code_for_empty_group() {
    let app = setup().await;

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            INSERT_URI,
            json!({ "codeId": "AM", "codeName": "공통" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let inserted = code_detail::Entity::find_by_id(("AM".to_string(), 100))
        .one(&app.db)
        .await
        .unwrap();
    assert!(inserted.is_some());
}

#[tokio::test]
async fn should_return_400_for_empty_name_without_insert() {
    let app = setup().await;

    for name in ["", "   ", "\t\n"] {
        let response = app
            .router
            .clone()
            .oneshot(json_request(
                "POST",
                INSERT_URI,
                json!({ "codeId": "AT", "codeName": name }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["code"], "COMMON400");
    }

    assert_eq!(count_codes(&app.db, "AT").await, 0);
}

#[tokio::test]
async fn should_return_400_for_duplicate_name_without_insert() {
    // Arrange
    let app = setup().await;
    seed_code(&app.db, "AT", 101, "웹 기술").await;

    // Act
    let response = app
        .router
        .oneshot(json_request(
            "POST",
            INSERT_URI,
            json!({ "codeId": "AT", "codeName": " 웹 기술 " }),
        ))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "CODE_001");
    assert_eq!(count_codes(&app.db, "AT").await, 1);
}

#[tokio::test]
async fn should_allow_same_name_in_different_group() {
    let app = setup().await;
    seed_code(&app.db, "AT", 101, "공통").await;

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            INSERT_URI,
            json!({ "codeId": "AM", "codeName": "공통" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(count_codes(&app.db, "AM").await, 1);
}

#[tokio::test]
async fn should_return_400_when_code_name_is_missing() {
    let app = setup().await;

    let response = app
        .router
        .oneshot(json_request("POST", INSERT_URI, json!({ "codeId": "AT" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "COMMON400");
}

#[tokio::test]
async fn should_check_name_length_after_trim() {
    let app = setup().await;
    let padded = format!("   {}   ", "가".repeat(40));

    let accepted = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            INSERT_URI,
            json!({ "codeId": "AT", "codeName": padded }),
        ))
        .await
        .unwrap();
    let rejected = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            INSERT_URI,
            json!({ "codeId": "AT", "codeName": "가".repeat(46) }),
        ))
        .await
        .unwrap();

    assert_eq!(accepted.status(), StatusCode::OK);
    let inserted = code_detail::Entity::find_by_id(("AT".to_string(), 100))
        .one(&app.db)
        .await
        .unwrap()
        .expect("trim 후 40자 이름은 입력되어야 함");
    assert_eq!(inserted.name, "가".repeat(40));

    assert_eq!(rejected.status(), StatusCode::BAD_REQUEST);
    let body = body_json(rejected).await;
    assert_eq!(body["code"], "COMMON400");
    assert_eq!(count_codes(&app.db, "AT").await, 1);
}

#[tokio::test]
async fn should_return_code_001_when_unique_index_rejects_name() {
    // Arrange: 정책 검사를 통과한 뒤 다른 요청이 같은 이름을 먼저 입력한 상황
    let db = common::connect().await;
    teamgu_server::config::create_tables(&db).await.unwrap();
    seed_code(&db, "AT", 101, "웹 기술").await;
    let app = common::app_with(db, Arc::new(AllowAllPolicy));

    // Act
    let response = app
        .router
        .oneshot(json_request(
            "POST",
            INSERT_URI,
            json!({ "codeId": "AT", "codeName": "웹 기술" }),
        ))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["code"], "CODE_001");
    assert_eq!(count_codes(&app.db, "AT").await, 1);
}

// ============== 코드 삭제 ==============

#[tokio::test]
async fn should_delete_unreferenced_code() {
    // Arrange
    let app = setup().await;
    seed_code(&app.db, "AT", 101, "웹 기술").await;
    seed_code(&app.db, "AT", 102, "인공지능").await;

    // Act
    let response = app
        .router
        .oneshot(json_request(
            "POST",
            DELETE_URI,
            json!({ "codeId": "AT", "code": 102 }),
        ))
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
    let deleted = code_detail::Entity::find_by_id(("AT".to_string(), 102))
        .one(&app.db)
        .await
        .unwrap();
    assert!(deleted.is_none());
    assert_eq!(count_codes(&app.db, "AT").await, 1);
}

#[tokio::test]
async fn should_return_400_when_code_is_referenced_by_project() {
    // Arrange
    let app = setup().await;
    seed_code(&app.db, "AA", 105, "5기").await;
    seed_code(&app.db, "AM", 101, "공통").await;
    seed_code(&app.db, "AT", 101, "웹 기술").await;
    seed_project(&app.db, 105, 101, &[101]).await;

    for (code_id, code) in [("AA", 105), ("AM", 101), ("AT", 101)] {
        // Act
        let response = app
            .router
            .clone()
            .oneshot(json_request(
                "POST",
                DELETE_URI,
                json!({ "codeId": code_id, "code": code }),
            ))
            .await
            .unwrap();

        // Assert
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["code"], "CODE_002");
        assert_eq!(count_codes(&app.db, code_id).await, 1);
    }
}

#[tokio::test]
async fn should_return_400_when_deleting_missing_code() {
    let app = setup().await;

    let response = app
        .router
        .oneshot(json_request(
            "POST",
            DELETE_URI,
            json!({ "codeId": "AT", "code": 999 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ============== 정책 교체 ==============

/// 모든 변경을 거부하는 정책
struct DenyAllPolicy;

#[async_trait]
impl CodePolicy for DenyAllPolicy {
    async fn check_insertable(
        &self,
        _txn: &DatabaseTransaction,
        _code_id: &str,
        _code_name: &str,
    ) -> Result<bool, DbErr> {
        Ok(false)
    }

    async fn check_deletable(
        &self,
        _txn: &DatabaseTransaction,
        _code_id: &str,
        _code: i32,
    ) -> Result<bool, DbErr> {
        Ok(false)
    }
}

/// 모든 변경을 허용하는 정책
struct AllowAllPolicy;

#[async_trait]
impl CodePolicy for AllowAllPolicy {
    async fn check_insertable(
        &self,
        _txn: &DatabaseTransaction,
        _code_id: &str,
        _code_name: &str,
    ) -> Result<bool, DbErr> {
        Ok(true)
    }

    async fn check_deletable(
        &self,
        _txn: &DatabaseTransaction,
        _code_id: &str,
        _code: i32,
    ) -> Result<bool, DbErr> {
        Ok(true)
    }
}

#[tokio::test]
async fn should_follow_injected_policy() {
    // Arrange
    let db = common::connect().await;
    teamgu_server::config::create_tables(&db).await.unwrap();
    seed_code(&db, "AT", 101, "웹 기술").await;
    let app = common::app_with(db, Arc::new(DenyAllPolicy));

    // Act
    let insert = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            INSERT_URI,
            json!({ "codeId": "AT", "codeName": "새 트랙" }),
        ))
        .await
        .unwrap();
    let delete = app
        .router
        .oneshot(json_request(
            "POST",
            DELETE_URI,
            json!({ "codeId": "AT", "code": 101 }),
        ))
        .await
        .unwrap();

    // Assert
    assert_eq!(insert.status(), StatusCode::BAD_REQUEST);
    assert_eq!(delete.status(), StatusCode::BAD_REQUEST);
    assert_eq!(count_codes(&app.db, "AT").await, 1);
}
