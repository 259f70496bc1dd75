use axum::http::StatusCode;

/// `GET /healthz`: the process is up. Store reachability is `/readyz`, owned by
/// the service.
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
