use axum::Json;
use serde::Serialize;

pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

/// GET /health
///
/// Liveness probe for external monitoring. Always answers 200 while the
/// process is serving.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        service: SERVICE_NAME,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_ok() {
        let Json(body) = health().await;
        assert_eq!(body.status, "OK");
        assert_eq!(body.service, "cicd-demo-service");
    }

    #[tokio::test]
    async fn test_health_serializes_status_field() {
        let Json(body) = health().await;
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["status"], "OK");
        assert_eq!(value["service"], SERVICE_NAME);
    }
}
