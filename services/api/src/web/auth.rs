//! services/api/src/web/auth.rs
//!
//! Authentication endpoints for account registration and login.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use basket_core::domain::{Account, Category, Product};
use basket_core::ports::PortError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::ToSchema;

use crate::web::state::AppState;

//=========================================================================================
// Request/Response Types
//=========================================================================================

#[derive(Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pwd: String,
}

#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pwd: String,
}

#[derive(Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    #[schema(value_type = Vec<Object>)]
    pub products: Vec<Product>,
    #[schema(value_type = Vec<Object>)]
    pub categories: Vec<Category>,
}

//=========================================================================================
// Handlers
//=========================================================================================

/// POST /register - Create a new account seeded with the catalog
#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created successfully", body = TokenResponse),
        (status = 400, description = "Missing fields or duplicate email"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn register_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    // 1. Both fields are required and must be non-empty
    if req.email.trim().is_empty() || req.pwd.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "email and pwd are required".to_string(),
        ));
    }

    // 2. Hash the password
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(req.pwd.as_bytes(), &salt)
        .map_err(|e| {
            error!("Failed to hash password: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to hash password".to_string(),
            )
        })?
        .to_string();

    // 3. Seed the account with a personal copy of the catalog
    let account = Account {
        email: req.email.clone(),
        password_hash,
        categories: state.catalog.categories().to_vec(),
        products: state.catalog.products().to_vec(),
    };

    match state.store.insert(account).await {
        Ok(()) => {}
        Err(PortError::Duplicate(_)) => {
            return Err((
                StatusCode::BAD_REQUEST,
                "An account with this email already exists".to_string(),
            ));
        }
        Err(e) => {
            error!("Failed to create account: {:?}", e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create account".to_string(),
            ));
        }
    }

    // 4. Issue a session token
    let token = state.tokens.issue(&req.email).map_err(|e| {
        error!("Failed to issue token: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to issue token".to_string(),
        )
    })?;

    Ok((StatusCode::CREATED, Json(TokenResponse { token })))
}

/// POST /login - Login with an existing account
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 201, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn login_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let invalid = || {
        (
            StatusCode::BAD_REQUEST,
            "Invalid email or password".to_string(),
        )
    };

    // 1. Get the account by email
    let account = state.store.get(&req.email).await.map_err(|_| invalid())?;

    // 2. Verify the password
    let parsed_hash = PasswordHash::new(&account.password_hash).map_err(|e| {
        error!("Failed to parse password hash: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Authentication error".to_string(),
        )
    })?;

    let valid = Argon2::default()
        .verify_password(req.pwd.as_bytes(), &parsed_hash)
        .is_ok();

    if !valid {
        return Err(invalid());
    }

    // 3. Issue a session token and return the account's current data
    let token = state.tokens.issue(&req.email).map_err(|e| {
        error!("Failed to issue token: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to issue token".to_string(),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(LoginResponse {
            token,
            products: account.products,
            categories: account.categories,
        }),
    ))
}
