pub mod auth;
pub mod catalog;
pub mod middleware;
pub mod rest;
pub mod state;
pub mod token;

use axum::{
    http::{
        header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::web::state::AppState;

pub use middleware::require_auth;
pub use rest::ApiDoc;

/// Builds the application router: the anonymous catalog and account
/// endpoints, plus the `/auth` subtree guarded by the bearer middleware.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE, ACCEPT]);

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/categories", get(catalog::list_categories_handler))
        .route("/products", get(catalog::list_products_handler))
        .route("/register", post(auth::register_handler))
        .route("/login", post(auth::login_handler));

    // Protected routes (auth required)
    let protected_routes = Router::new()
        .route("/check", get(rest::check_handler))
        .route(
            "/products",
            get(rest::get_products_handler).put(rest::put_products_handler),
        )
        .route(
            "/categories",
            get(rest::get_categories_handler).put(rest::put_categories_handler),
        )
        .route("/pay", get(rest::balance_handler).post(rest::pay_handler))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            require_auth,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/auth", protected_routes)
        .layer(cors)
        .with_state(state)
}
