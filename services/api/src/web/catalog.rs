//! services/api/src/web/catalog.rs
//!
//! Public, read-only catalog endpoints.

use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

use crate::web::state::AppState;

/// GET /categories - The shared catalog categories
#[utoipa::path(
    get,
    path = "/categories",
    responses(
        (status = 200, description = "The catalog categories")
    )
)]
pub async fn list_categories_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.categories().to_vec())
}

/// GET /products - The shared catalog products
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "The catalog products")
    )
)]
pub async fn list_products_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.catalog.products().to_vec())
}
