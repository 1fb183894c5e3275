use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Catalog service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum CatalogServiceError {
    #[error("car not found")]
    CarNotFound,
    #[error("seller not found")]
    SellerNotFound,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("password must be at least 6 characters")]
    PasswordTooShort,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl CatalogServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::CarNotFound => "CAR_NOT_FOUND",
            Self::SellerNotFound => "SELLER_NOT_FOUND",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::PasswordTooShort => "PASSWORD_TOO_SHORT",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for CatalogServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::CarNotFound | Self::SellerNotFound => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::PasswordTooShort => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors and TraceLayer already records them.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
