//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Each mutation dispatches one action against the page state and answers
//! with the cart items fragment plus an `HX-Trigger` so the navbar badge
//! refreshes itself. All handlers are total: an id with no matching
//! product or line is a no-op, never an error.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use goldenrod_core::{Action, PageState, ProductId};

use crate::routes::home::CartView;
use crate::state::AppState;

/// Form data naming a product for any cart operation.
#[derive(Debug, Deserialize)]
pub struct CartForm {
    pub product_id: i64,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: usize,
    pub total: String,
}

/// Render the cart items fragment for a snapshot, tagged so HTMX updates
/// the count badge too.
fn cart_fragment(snapshot: &PageState) -> Response {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: CartView::from(&snapshot.cart),
        },
    )
        .into_response()
}

/// Add a product to the cart (HTMX).
///
/// The product is resolved against the current catalog snapshot so the
/// line copies its displayable fields at add time. Unknown ids are
/// ignored.
#[instrument(skip(state))]
pub async fn add(State(state): State<AppState>, Form(form): Form<CartForm>) -> Response {
    let id = ProductId::new(form.product_id);
    let snapshot = state.snapshot();

    let next = match snapshot.catalog.find_product(id) {
        Some(product) => state.dispatch(Action::AddToCart(product.clone())),
        None => {
            tracing::debug!(%id, "Ignoring add for unknown product id");
            snapshot
        }
    };

    cart_fragment(&next)
}

/// Bump a cart line's quantity (HTMX).
#[instrument(skip(state))]
pub async fn increment(State(state): State<AppState>, Form(form): Form<CartForm>) -> Response {
    let next = state.dispatch(Action::IncrementQuantity(ProductId::new(form.product_id)));
    cart_fragment(&next)
}

/// Lower a cart line's quantity (HTMX). Quantity never drops below 1.
#[instrument(skip(state))]
pub async fn decrement(State(state): State<AppState>, Form(form): Form<CartForm>) -> Response {
    let next = state.dispatch(Action::DecrementQuantity(ProductId::new(form.product_id)));
    cart_fragment(&next)
}

/// Remove a cart line entirely, whatever its quantity (HTMX).
#[instrument(skip(state))]
pub async fn remove(State(state): State<AppState>, Form(form): Form<CartForm>) -> Response {
    let next = state.dispatch(Action::RemoveFromCart(ProductId::new(form.product_id)));
    cart_fragment(&next)
}

/// Get the cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.snapshot();
    CartCountTemplate {
        count: snapshot.cart.line_count(),
        total: snapshot.cart.total().to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use goldenrod_core::{Catalog, Category, Price, Product};

    use super::*;
    use crate::config::StorefrontConfig;

    fn test_state() -> AppState {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            catalog_url: "http://localhost/unused.json".to_string(),
        };
        let catalog = Catalog {
            categories: vec![Category {
                category_name: "Men".to_string(),
                category_products: vec![
                    Product {
                        id: ProductId::new(1),
                        title: "Shirt".to_string(),
                        price: Price::new("100".parse().unwrap()),
                        compare_at_price: None,
                        vendor: None,
                        image: None,
                    },
                    Product {
                        id: ProductId::new(2),
                        title: "Jeans".to_string(),
                        price: Price::new("250".parse().unwrap()),
                        compare_at_price: None,
                        vendor: None,
                        image: None,
                    },
                ],
            }],
        };
        AppState::new(config, catalog)
    }

    async fn add_id(state: &AppState, product_id: i64) -> Response {
        add(State(state.clone()), Form(CartForm { product_id })).await
    }

    #[tokio::test]
    async fn test_add_twice_aggregates() {
        let state = test_state();
        add_id(&state, 1).await;
        let response = add_id(&state, 1).await;

        assert!(response.headers().contains_key("HX-Trigger"));
        let cart = state.snapshot().cart;
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), Price::new("200".parse().unwrap()));
    }

    #[tokio::test]
    async fn test_add_unknown_id_is_noop() {
        let state = test_state();
        add_id(&state, 404).await;
        assert!(state.snapshot().cart.is_empty());
    }

    #[tokio::test]
    async fn test_increment_decrement_remove_flow() {
        let state = test_state();
        add_id(&state, 1).await;
        add_id(&state, 2).await;

        increment(State(state.clone()), Form(CartForm { product_id: 1 })).await;
        assert_eq!(state.snapshot().cart.lines()[0].quantity, 2);

        // Decrement at quantity 1 is a no-op
        decrement(State(state.clone()), Form(CartForm { product_id: 2 })).await;
        assert_eq!(state.snapshot().cart.lines()[1].quantity, 1);

        remove(State(state.clone()), Form(CartForm { product_id: 1 })).await;
        let cart = state.snapshot().cart;
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].product.id, ProductId::new(2));
    }

    #[tokio::test]
    async fn test_cart_ops_survive_empty_catalog() {
        // Simulates the failed-fetch scenario: cart holds a line whose
        // product no longer resolves against the (empty) catalog.
        let state = test_state();
        add_id(&state, 1).await;
        state.dispatch(Action::CatalogLoaded(Catalog::default()));

        increment(State(state.clone()), Form(CartForm { product_id: 1 })).await;
        assert_eq!(state.snapshot().cart.lines()[0].quantity, 2);

        // New adds are no-ops against the empty catalog
        add_id(&state, 2).await;
        assert_eq!(state.snapshot().cart.line_count(), 1);
    }
}
