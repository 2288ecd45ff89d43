use serde::Serialize;
use utoipa::ToSchema;

/// 헬스체크 응답
#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: HealthState,
    #[schema(example = "0.1.0")]
    pub version: &'static str,
    /// 서버 가동 시간 (초)
    #[schema(example = 3600)]
    pub uptime_secs: u64,
    pub checks: HealthChecks,
}

#[derive(Serialize, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    /// DB 응답이 느린 상태
    Degraded,
    Unhealthy,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    pub database: CheckResult,
}

/// 의존성 하나에 대한 체크 결과
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    #[schema(example = true)]
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = 3)]
    pub latency_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckResult {
    pub fn success(latency_ms: u64) -> Self {
        Self {
            status: true,
            latency_ms: Some(latency_ms),
            error: None,
        }
    }

    pub fn failure(latency_ms: u64, error: impl Into<String>) -> Self {
        Self {
            status: false,
            latency_ms: Some(latency_ms),
            error: Some(error.into()),
        }
    }

    /// 응답 시간은 알 수 없으므로 비워 둡니다.
    pub fn timeout() -> Self {
        Self {
            status: false,
            latency_ms: None,
            error: Some("Timeout".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_serialize_status_in_camel_case_and_lowercase_state() {
        let status = HealthStatus {
            status: HealthState::Degraded,
            version: "0.1.0",
            uptime_secs: 42,
            checks: HealthChecks {
                database: CheckResult::success(2500),
            },
        };

        let json = serde_json::to_value(&status).unwrap();

        assert_eq!(json["status"], "degraded");
        assert_eq!(json["uptimeSecs"], 42);
        assert_eq!(json["checks"]["database"]["latencyMs"], 2500);
        assert!(json["checks"]["database"].get("error").is_none());
    }

    #[test]
    fn should_omit_latency_on_timeout() {
        let json = serde_json::to_value(CheckResult::timeout()).unwrap();

        assert_eq!(json["status"], false);
        assert_eq!(json["error"], "Timeout");
        assert!(json.get("latencyMs").is_none());
    }
}
