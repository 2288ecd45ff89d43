use std::net::SocketAddr;
use std::sync::Arc;

use teamgu_server::config::{establish_connection, AppConfig};
use teamgu_server::create_router;
use teamgu_server::domain::admin::policy::ReferenceCodePolicy;
use teamgu_server::shutdown::shutdown_signal;
use teamgu_server::state::AppState;
use teamgu_server::utils::logging::init_logging;

#[tokio::main]
async fn main() {
    // 1. 환경변수 로드
    dotenvy::dotenv().ok();

    // 2. 로깅 초기화 (guard는 종료 시까지 유지)
    let _guard = init_logging(&AppConfig::log_dir_from_env());

    // 3. 설정 로드
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // 4. DB 연결
    let db = match establish_connection(&config.database_url, config.schema_update).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to the database");
            std::process::exit(1);
        }
    };

    // 5. 라우터 설정
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let state = AppState::new(db, config, Arc::new(ReferenceCodePolicy));
    let app = create_router(state);

    // 6. 서버 실행
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, %addr, "Failed to bind address");
            std::process::exit(1);
        }
    };
    tracing::info!("Server listening on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server error");
    }
}
