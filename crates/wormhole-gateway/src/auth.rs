use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use subtle::ConstantTimeEq;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// A single user allowed through HTTP basic auth.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// The value a client sends in the `Authorization` header.
    pub fn to_header_value(&self) -> String {
        format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", self.user, self.password))
        )
    }

    fn matches(&self, headers: &HeaderMap) -> bool {
        parse_basic(headers).is_some_and(|given| self.ct_matches(&given))
    }

    /// Compares both fields in constant time; neither comparison short-circuits.
    fn ct_matches(&self, given: &Credentials) -> bool {
        let user = self.user.as_bytes().ct_eq(given.user.as_bytes());
        let password = self.password.as_bytes().ct_eq(given.password.as_bytes());
        (user & password).into()
    }
}

/// Decodes `Authorization: Basic <base64(user:password)>`.
fn parse_basic(headers: &HeaderMap) -> Option<Credentials> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, encoded) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("basic") {
        return None;
    }

    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user, password) = decoded.split_once(':')?;
    Some(Credentials::new(user, password))
}

/// Rejects requests without valid basic auth credentials.
///
/// Passes everything through when no credentials are configured.
pub async fn require_basic_auth(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response> {
    if let Some(expected) = state.credentials() {
        if !expected.matches(request.headers()) {
            debug!(uri = %request.uri(), "basic auth failed");
            return Err(AppError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}
