//! Bearer-token admin identity extractor.

use std::fmt;
use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::headers::{Authorization, HeaderMapExt, authorization::Bearer};
use http::request::Parts;

use crate::token::{AuthError, verify_admin_token};

/// HMAC secret used to sign and verify admin tokens.
#[derive(Clone)]
pub struct JwtSecret(Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("JwtSecret(..)")
    }
}

/// Authenticated admin, taken from `Authorization: Bearer <jwt>`.
///
/// Rejects with 401 before the handler runs when the header is absent, uses
/// another scheme, or carries a token that fails verification.
#[derive(Debug, Clone)]
pub struct AdminIdentity {
    pub username: String,
}

impl<S> FromRequestParts<S> for AdminIdentity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = AuthError;

    // Verification is synchronous; the returned future borrows nothing from `parts`.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let verified = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(AuthError::Missing)
            .and_then(|auth| verify_admin_token(auth.token(), secret.as_str()));

        async move {
            let username = verified?;
            Ok(Self { username })
        }
    }
}
