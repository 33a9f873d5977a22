use std::sync::Arc;

use auth::Authenticator;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use http::header::AUTHORIZATION;
use http::HeaderMap;

use crate::domain::account::models::AccountId;
use crate::inbound::http::handlers::ApiError;

pub const MISSING_TOKEN: &str = "Missing or malformed Authorization header";
pub const INVALID_TOKEN: &str = "Invalid or expired token";

/// Identity resolved from a verified bearer token.
///
/// Present in request extensions only after the middleware accepted the
/// token; handlers read it with `Extension<CurrentAccount>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentAccount {
    pub account_id: AccountId,
}

/// Middleware that validates bearer tokens and attaches the caller's account.
///
/// Any failure ends the request with 401. The account is not looked up in
/// storage, so a token outlives its account until it expires.
pub async fn authenticate(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(req.headers()).ok_or_else(|| {
        tracing::debug!(uri = %req.uri(), "Rejected request without bearer token");
        ApiError::Unauthorized(MISSING_TOKEN.to_string())
    })?;

    let claims = authenticator
        .validate_token(token, Utc::now())
        .map_err(|e| {
            tracing::warn!(error = %e, "Token validation failed");
            ApiError::Unauthorized(INVALID_TOKEN.to_string())
        })?;

    let account_id = AccountId::from_string(claims.subject()).map_err(|e| {
        tracing::error!(error = %e, "Signed token carries an unparseable subject");
        ApiError::Unauthorized(INVALID_TOKEN.to_string())
    })?;

    req.extensions_mut().insert(CurrentAccount { account_id });

    Ok(next.run(req).await)
}

/// Token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; an empty token counts as absent.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("Bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
