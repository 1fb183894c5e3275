//! Bearer header helpers for tests that call admin routes.

use http::header::AUTHORIZATION;
use http::{HeaderName, HeaderValue};

use autoleilao_auth_types::token::issue_admin_token;

/// Admin identity signed with a test secret.
pub struct MockAdmin {
    pub token: String,
}

impl MockAdmin {
    /// Sign a fresh token for `username` with `secret`.
    pub fn new(username: &str, secret: &str) -> Self {
        let (token, _) = issue_admin_token(username, secret).expect("sign test token");
        Self { token }
    }

    /// The `Authorization` header pair.
    pub fn authorization(&self) -> (HeaderName, HeaderValue) {
        (AUTHORIZATION, bearer(&self.token))
    }
}

/// Build a `Bearer <token>` header value from an arbitrary token string.
pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header value")
}
