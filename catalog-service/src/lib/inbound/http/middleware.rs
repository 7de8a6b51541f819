use std::time::Duration;

use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::Response;

use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Identity taken from a verified bearer token, stored in request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
}

/// Middleware that verifies the bearer token and records who made the request.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token_from_header(&req)?;

    let claims = state.token_issuer.verify(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        username: claims.username,
    });

    Ok(next.run(req).await)
}

/// Middleware that bounds how long a request may take.
///
/// An expired deadline drops the in-flight handler and answers with the
/// regular error envelope.
pub async fn enforce_timeout(
    State(timeout): State<Duration>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let method = req.method().clone();
    let uri = req.uri().clone();

    tokio::time::timeout(timeout, next.run(req))
        .await
        .map_err(|_| {
            tracing::warn!(
                method = %method,
                uri = %uri,
                timeout_ms = timeout.as_millis(),
                "Request timed out"
            );
            ApiError::RequestTimeout("Request timed out".to_string())
        })
}

/// Accepts `Bearer <token>` as well as a bare token.
fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    let token = auth_str
        .strip_prefix("Bearer ")
        .unwrap_or(auth_str)
        .trim();

    if token.is_empty() {
        return Err(ApiError::Unauthorized(
            "Missing token in Authorization header".to_string(),
        ));
    }

    Ok(token)
}
