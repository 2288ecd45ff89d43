use std::sync::Arc;
use std::time::Instant;

use crate::config::AppConfig;
use crate::domain::admin::policy::CodePolicy;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: AppConfig,
    /// 코드 입력/삭제 가능 여부 판단 규칙
    pub code_policy: Arc<dyn CodePolicy>,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: AppConfig, code_policy: Arc<dyn CodePolicy>) -> Self {
        Self {
            db,
            config,
            code_policy,
            started_at: Instant::now(),
        }
    }
}
