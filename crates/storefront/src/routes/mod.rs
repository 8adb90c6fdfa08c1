//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - The shopping page
//! GET  /health          - Health check
//!
//! # Filter
//! POST /category        - Select a category (redirects back to /)
//! POST /search          - Submit the search form (redirects back to /)
//!
//! # Cart (HTMX fragments)
//! POST /cart/add        - Add a product (returns cart_items fragment)
//! POST /cart/increment  - Bump a line quantity (returns cart_items fragment)
//! POST /cart/decrement  - Lower a line quantity (returns cart_items fragment)
//! POST /cart/remove     - Remove a line (returns cart_items fragment)
//! GET  /cart/count      - Cart count badge (fragment)
//! ```

pub mod cart;
pub mod filter;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(cart::add))
        .route("/increment", post(cart::increment))
        .route("/decrement", post(cart::decrement))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // The shopping page
        .route("/", get(home::page))
        .route("/health", get(health))
        // Filter controls
        .route("/category", post(filter::select_category))
        .route("/search", post(filter::submit_search))
        // Cart routes
        .nest("/cart", cart_routes())
}
