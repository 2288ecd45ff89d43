use std::env;

/// 애플리케이션 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    /// 기동 시 엔티티 정의로 테이블 생성 여부
    pub schema_update: bool,
    pub log_dir: String,
}

impl AppConfig {
    /// 환경 변수에서 설정 로드
    pub fn from_env() -> Result<Self, ConfigError> {
        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            tracing::warn!(
                "DATABASE_URL 환경변수가 설정되지 않았습니다. 로컬 SQLite 파일을 사용합니다."
            );
            "sqlite://teamgu.db?mode=rwc".to_string()
        });

        let schema_update = parse_bool(env::var("DB_SCHEMA_UPDATE").ok().as_deref())?;

        Ok(Self {
            server_port,
            database_url,
            schema_update,
            log_dir: Self::log_dir_from_env(),
        })
    }

    /// 로그 디렉터리 (로깅은 설정 로드보다 먼저 초기화되므로 따로 읽습니다)
    pub fn log_dir_from_env() -> String {
        env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string())
    }
}

fn parse_bool(value: Option<&str>) -> Result<bool, ConfigError> {
    match value.map(str::trim) {
        None | Some("") => Ok(false),
        Some(v) => v
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| ConfigError::InvalidSchemaUpdate(v.to_string())),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port number")]
    InvalidPort,
    #[error("Invalid DB_SCHEMA_UPDATE value '{0}', use 'true' or 'false'")]
    InvalidSchemaUpdate(String),
}
