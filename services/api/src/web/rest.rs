//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the authenticated REST API endpoints and
//! the master definition for the OpenAPI specification.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
    Extension,
};
use basket_core::domain::{Account, Category, Product};
use basket_core::payment::{apply_payment, compute_balance, PaymentOutcome};
use basket_core::reconcile::reconcile;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::error;
use utoipa::{OpenApi, ToSchema};

use crate::web::middleware::AuthedUser;
use crate::web::state::AppState;

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::catalog::list_categories_handler,
        crate::web::catalog::list_products_handler,
        crate::web::auth::register_handler,
        crate::web::auth::login_handler,
        check_handler,
        get_products_handler,
        put_products_handler,
        get_categories_handler,
        put_categories_handler,
        balance_handler,
        pay_handler,
    ),
    components(
        schemas(
            crate::web::auth::RegisterRequest,
            crate::web::auth::LoginRequest,
            crate::web::auth::TokenResponse,
            crate::web::auth::LoginResponse,
            MessageResponse,
            UpdateProductsRequest,
            UpdateCategoriesRequest,
            BalanceResponse,
            PayRequest,
            PayResponse,
        )
    ),
    tags(
        (name = "Basket API", description = "API endpoints for the shopping-list service.")
    )
)]
pub struct ApiDoc;

//=========================================================================================
// API Response and Payload Structs
//=========================================================================================

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateProductsRequest {
    #[schema(value_type = Vec<Object>)]
    pub products: Option<Vec<Product>>,
}

#[derive(Deserialize, ToSchema)]
pub struct UpdateCategoriesRequest {
    #[schema(value_type = Vec<Object>)]
    pub categories: Option<Vec<Category>>,
}

/// Totals across the account's bought products.
#[derive(Serialize, ToSchema)]
pub struct BalanceResponse {
    pub total: f64,
    pub paid: f64,
    pub remaining: f64,
}

impl From<basket_core::domain::Balance> for BalanceResponse {
    fn from(balance: basket_core::domain::Balance) -> Self {
        Self {
            total: balance.total,
            paid: balance.paid,
            remaining: balance.remaining,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct PayRequest {
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub card_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct PayResponse {
    pub message: String,
    #[schema(value_type = Vec<Object>)]
    pub products: Vec<Product>,
    pub total: f64,
    pub paid: f64,
    pub remaining: f64,
}

//=========================================================================================
// Helpers
//=========================================================================================

/// Fetches the caller's account. The middleware already resolved it once,
/// but the account can vanish between that check and this read; treat that
/// the same way the middleware would.
async fn load_account(
    state: &AppState,
    email: &str,
) -> Result<Account, (StatusCode, String)> {
    state.store.get(email).await.map_err(|e| {
        error!("Authenticated account disappeared: {:?}", e);
        (StatusCode::FORBIDDEN, "Unknown user".to_string())
    })
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// GET /auth/check - Confirm the credential is valid
#[utoipa::path(
    get,
    path = "/auth/check",
    responses(
        (status = 200, description = "Credential is valid", body = MessageResponse),
        (status = 401, description = "No credential"),
        (status = 403, description = "Invalid credential")
    )
)]
pub async fn check_handler(
    Extension(AuthedUser(_email)): Extension<AuthedUser>,
) -> impl IntoResponse {
    Json(MessageResponse {
        message: "ok".to_string(),
    })
}

/// GET /auth/products - The account's personal product list
#[utoipa::path(
    get,
    path = "/auth/products",
    responses(
        (status = 200, description = "The account's products"),
        (status = 401, description = "No credential"),
        (status = 403, description = "Invalid credential")
    )
)]
pub async fn get_products_handler(
    State(state): State<Arc<AppState>>,
    Extension(AuthedUser(email)): Extension<AuthedUser>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let account = load_account(&state, &email).await?;
    Ok(Json(account.products))
}

/// PUT /auth/products - Replace the account's product list
///
/// The incoming list is reconciled against the stored one by name: a
/// matched entry whose quantity changed loses its paid status. The stored
/// list is then replaced wholesale.
#[utoipa::path(
    put,
    path = "/auth/products",
    request_body = UpdateProductsRequest,
    responses(
        (status = 201, description = "Products replaced", body = MessageResponse),
        (status = 400, description = "Missing products field"),
        (status = 401, description = "No credential"),
        (status = 403, description = "Invalid credential")
    )
)]
pub async fn put_products_handler(
    State(state): State<Arc<AppState>>,
    Extension(AuthedUser(email)): Extension<AuthedUser>,
    Json(req): Json<UpdateProductsRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Some(products) = req.products else {
        return Err((
            StatusCode::BAD_REQUEST,
            "products field is required".to_string(),
        ));
    };

    let mut account = load_account(&state, &email).await?;
    account.products = reconcile(&account.products, products);

    state.store.set(&email, account).await.map_err(|e| {
        error!("Failed to store products: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to store products".to_string(),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "ok".to_string(),
        }),
    ))
}

/// GET /auth/categories - The account's personal category list
#[utoipa::path(
    get,
    path = "/auth/categories",
    responses(
        (status = 200, description = "The account's categories"),
        (status = 401, description = "No credential"),
        (status = 403, description = "Invalid credential")
    )
)]
pub async fn get_categories_handler(
    State(state): State<Arc<AppState>>,
    Extension(AuthedUser(email)): Extension<AuthedUser>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let account = load_account(&state, &email).await?;
    Ok(Json(account.categories))
}

/// PUT /auth/categories - Replace the account's category list
///
/// Plain overwrite; categories carry no payment state to reconcile.
#[utoipa::path(
    put,
    path = "/auth/categories",
    request_body = UpdateCategoriesRequest,
    responses(
        (status = 201, description = "Categories replaced", body = MessageResponse),
        (status = 400, description = "Missing categories field"),
        (status = 401, description = "No credential"),
        (status = 403, description = "Invalid credential")
    )
)]
pub async fn put_categories_handler(
    State(state): State<Arc<AppState>>,
    Extension(AuthedUser(email)): Extension<AuthedUser>,
    Json(req): Json<UpdateCategoriesRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let Some(categories) = req.categories else {
        return Err((
            StatusCode::BAD_REQUEST,
            "categories field is required".to_string(),
        ));
    };

    let mut account = load_account(&state, &email).await?;
    account.categories = categories;

    state.store.set(&email, account).await.map_err(|e| {
        error!("Failed to store categories: {:?}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to store categories".to_string(),
        )
    })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "ok".to_string(),
        }),
    ))
}

/// GET /auth/pay - Totals across the account's bought products
#[utoipa::path(
    get,
    path = "/auth/pay",
    responses(
        (status = 200, description = "Current balance", body = BalanceResponse),
        (status = 401, description = "No credential"),
        (status = 403, description = "Invalid credential")
    )
)]
pub async fn balance_handler(
    State(state): State<Arc<AppState>>,
    Extension(AuthedUser(email)): Extension<AuthedUser>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let account = load_account(&state, &email).await?;
    let balance = compute_balance(&account.products);
    Ok(Json(BalanceResponse::from(balance)))
}

/// POST /auth/pay - Apply a payment to the account's bought products
///
/// The amount is spread over bought, unpaid products in listing order;
/// each item is settled whole or skipped. An amount that covers nothing is
/// rejected, unless nothing was outstanding in the first place.
#[utoipa::path(
    post,
    path = "/auth/pay",
    request_body = PayRequest,
    responses(
        (status = 200, description = "Payment applied (or everything was already paid)", body = PayResponse),
        (status = 400, description = "Missing or non-positive amount, or missing card_id"),
        (status = 401, description = "No credential"),
        (status = 403, description = "Amount does not cover any outstanding item")
    )
)]
pub async fn pay_handler(
    State(state): State<Arc<AppState>>,
    Extension(AuthedUser(email)): Extension<AuthedUser>,
    Json(req): Json<PayRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    if req.amount <= 0.0 || req.card_id.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "A positive amount and a card_id are required".to_string(),
        ));
    }

    let mut account = load_account(&state, &email).await?;

    match apply_payment(&mut account.products, req.amount) {
        PaymentOutcome::AlreadySettled => {
            let balance = compute_balance(&account.products);
            Ok((
                StatusCode::OK,
                Json(PayResponse {
                    message: "Already paid".to_string(),
                    products: account.products,
                    total: balance.total,
                    paid: balance.paid,
                    remaining: balance.remaining,
                }),
            ))
        }
        PaymentOutcome::Insufficient => Err((
            StatusCode::FORBIDDEN,
            "Payment amount does not cover any outstanding item".to_string(),
        )),
        PaymentOutcome::Applied { .. } => {
            let balance = compute_balance(&account.products);
            state.store.set(&email, account.clone()).await.map_err(|e| {
                error!("Failed to store payment result: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to store payment result".to_string(),
                )
            })?;
            Ok((
                StatusCode::OK,
                Json(PayResponse {
                    message: "ok".to_string(),
                    products: account.products,
                    total: balance.total,
                    paid: balance.paid,
                    remaining: balance.remaining,
                }),
            ))
        }
    }
}
