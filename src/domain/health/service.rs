use std::time::{Duration, Instant};

use sea_orm::DatabaseConnection;
use tokio::time::timeout;

use super::dto::{CheckResult, HealthChecks, HealthState, HealthStatus};

/// 헬스체크 타임아웃 (5초)
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Degraded 상태 임계값 (2초)
const DEGRADED_THRESHOLD: Duration = Duration::from_secs(2);

/// 전체 헬스 체크 수행
pub async fn check_health(db: &DatabaseConnection, started_at: Instant) -> HealthStatus {
    let database = check_database(db).await;
    let status = determine_health_state(&database);

    HealthStatus {
        status,
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: started_at.elapsed().as_secs(),
        checks: HealthChecks { database },
    }
}

async fn check_database(db: &DatabaseConnection) -> CheckResult {
    let start = Instant::now();

    match timeout(HEALTH_CHECK_TIMEOUT, db.ping()).await {
        Ok(Ok(())) => CheckResult::success(start.elapsed().as_millis() as u64),
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "Database health check failed");
            CheckResult::failure(start.elapsed().as_millis() as u64, e.to_string())
        }
        Err(_) => {
            tracing::warn!("Database health check timed out");
            CheckResult::timeout()
        }
    }
}

/// DB 상태에 따른 전체 상태 결정
fn determine_health_state(check: &CheckResult) -> HealthState {
    if !check.status {
        return HealthState::Unhealthy;
    }

    // 응답 시간이 2초 이상이면 Degraded
    match check.latency_ms {
        Some(latency) if latency >= DEGRADED_THRESHOLD.as_millis() as u64 => HealthState::Degraded,
        _ => HealthState::Healthy,
    }
}
