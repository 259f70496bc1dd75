use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Resource API error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("user not found")]
    UserNotFound,
    #[error("order not found")]
    OrderNotFound,
    #[error("offer not found")]
    OfferNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("order already exists")]
    OrderAlreadyExists,
    #[error("offer already exists")]
    OfferAlreadyExists,
    #[error("invalid body: {0}")]
    InvalidBody(String),
    #[error("invalid path: {0}")]
    InvalidPath(String),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::OrderNotFound => "ORDER_NOT_FOUND",
            Self::OfferNotFound => "OFFER_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::OrderAlreadyExists => "ORDER_ALREADY_EXISTS",
            Self::OfferAlreadyExists => "OFFER_ALREADY_EXISTS",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::InvalidPath(_) => "INVALID_PATH",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidPath(rejection.body_text())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidBody(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::OrderNotFound | Self::OfferNotFound => {
                StatusCode::NOT_FOUND
            }
            Self::UserAlreadyExists | Self::OrderAlreadyExists | Self::OfferAlreadyExists => {
                StatusCode::CONFLICT
            }
            Self::InvalidBody(_) | Self::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
