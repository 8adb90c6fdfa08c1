//! The single page-state container and its action reducer.
//!
//! Everything the page shows is a function of one [`PageState`] value:
//! the catalog, the selected-category filter, and the cart. User events
//! and the one-time catalog fetch are expressed as [`Action`]s; applying
//! an action produces a fresh snapshot and leaves the old one untouched,
//! which keeps mutations auditable and testable away from rendering.

use serde::{Deserialize, Serialize};

use crate::cart::Cart;
use crate::catalog::{Catalog, Product};
use crate::filter::CategoryFilter;
use crate::types::ProductId;

/// Everything that can happen to the page state.
///
/// `AddToCart` carries the full product because the cart copies its
/// displayable fields at add time; the remaining cart actions only need
/// the id. There are no invalid transitions: actions referencing unknown
/// ids reduce to no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// The one-time catalog fetch completed; replace the catalog wholesale.
    CatalogLoaded(Catalog),
    /// A category control was clicked.
    SelectCategory(String),
    /// The search form was submitted.
    SubmitSearch(String),
    /// An "add to cart" control was clicked on a product.
    AddToCart(Product),
    /// A cart line's remove control was clicked.
    RemoveFromCart(ProductId),
    /// A cart line's `+` control was clicked.
    IncrementQuantity(ProductId),
    /// A cart line's `-` control was clicked.
    DecrementQuantity(ProductId),
}

/// The whole page state: catalog, filter, and cart.
///
/// Starts empty - no categories, `All` filter, empty cart - which is also
/// the state the page keeps if the catalog fetch fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub catalog: Catalog,
    pub filter: CategoryFilter,
    pub cart: Cart,
}

impl PageState {
    /// Apply one action and return the resulting snapshot.
    ///
    /// Pure: `self` is never modified, so snapshots already handed out
    /// stay valid whatever is dispatched afterwards.
    #[must_use]
    pub fn apply(&self, action: Action) -> Self {
        match action {
            Action::CatalogLoaded(catalog) => Self {
                catalog,
                ..self.clone()
            },
            Action::SelectCategory(name) => Self {
                filter: CategoryFilter::select(&name),
                ..self.clone()
            },
            Action::SubmitSearch(text) => Self {
                filter: CategoryFilter::from_search(&text),
                ..self.clone()
            },
            Action::AddToCart(product) => Self {
                cart: self.cart.add(&product),
                ..self.clone()
            },
            Action::RemoveFromCart(id) => Self {
                cart: self.cart.remove(id),
                ..self.clone()
            },
            Action::IncrementQuantity(id) => Self {
                cart: self.cart.increment(id),
                ..self.clone()
            },
            Action::DecrementQuantity(id) => Self {
                cart: self.cart.decrement(id),
                ..self.clone()
            },
        }
    }
}
