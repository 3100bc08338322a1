//! services/api/src/web/middleware.rs
//!
//! Authentication middleware for protecting routes.

use axum::{
    extract::{Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tracing::debug;

use crate::web::state::AppState;

/// The authenticated caller's email, inserted into request extensions by
/// [`require_auth`] for handlers to extract.
#[derive(Debug, Clone)]
pub struct AuthedUser(pub String);

/// Middleware that validates the bearer token and resolves the account.
///
/// A missing or malformed `Authorization` header yields 401. A token that
/// fails verification yields 403. A token whose account no longer exists
/// also yields 403: the credential is stateless, so the store is the only
/// authority on whether the user is still real.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    // 1. Extract the bearer token from the Authorization header
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    // 2. Verify the signature and expiry, recovering the bound email
    let email = state.tokens.verify(token).map_err(|e| {
        debug!("Rejected bearer token: {:?}", e);
        StatusCode::FORBIDDEN
    })?;

    // 3. The account must still exist; never trust the token alone
    state.store.get(&email).await.map_err(|e| {
        debug!("Token resolved to missing account: {:?}", e);
        StatusCode::FORBIDDEN
    })?;

    // 4. Insert the email into request extensions
    req.extensions_mut().insert(AuthedUser(email));

    // 5. Continue to the handler
    Ok(next.run(req).await)
}
