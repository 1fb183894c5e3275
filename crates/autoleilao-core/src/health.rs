use axum::http::StatusCode;

/// `GET /healthz`: the process is up and serving. Readiness is per service.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
