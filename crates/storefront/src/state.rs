//! Application state shared across handlers.

use std::sync::{Arc, PoisonError, RwLock};

use goldenrod_core::{Action, Catalog, PageState};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The page state (catalog,
/// filter, cart) lives behind a lock and is only ever replaced wholesale
/// by [`AppState::dispatch`], so concurrent handlers see last-write-wins
/// ordering - the same ordering a sequential event loop would produce.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    page: RwLock<PageState>,
}

impl AppState {
    /// Create application state from the loaded (possibly empty) catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Self {
        let page = PageState::default().apply(Action::CatalogLoaded(catalog));
        Self {
            inner: Arc::new(AppStateInner {
                config,
                page: RwLock::new(page),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Clone the current page-state snapshot.
    ///
    /// The snapshot is detached: later dispatches never change it.
    #[must_use]
    pub fn snapshot(&self) -> PageState {
        self.inner
            .page
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply an action to the current page state and install the result.
    ///
    /// Returns the new snapshot so handlers can render it without a second
    /// read.
    pub fn dispatch(&self, action: Action) -> PageState {
        let mut page = self
            .inner
            .page
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let next = page.apply(action);
        *page = next.clone();
        next
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use goldenrod_core::{Category, Price, Product, ProductId};

    fn test_state() -> AppState {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            catalog_url: "http://localhost/unused.json".to_string(),
        };
        let catalog = Catalog {
            categories: vec![Category {
                category_name: "Men".to_string(),
                category_products: vec![Product {
                    id: ProductId::new(1),
                    title: "Shirt".to_string(),
                    price: Price::new("300".parse().unwrap()),
                    compare_at_price: None,
                    vendor: None,
                    image: None,
                }],
            }],
        };
        AppState::new(config, catalog)
    }

    #[test]
    fn test_dispatch_installs_new_snapshot() {
        let state = test_state();
        let product = state
            .snapshot()
            .catalog
            .find_product(ProductId::new(1))
            .unwrap()
            .clone();

        state.dispatch(Action::AddToCart(product));
        assert_eq!(state.snapshot().cart.line_count(), 1);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let state = test_state();
        let before = state.snapshot();
        state.dispatch(Action::SelectCategory("Women".to_string()));
        assert_eq!(before.filter.name(), "All");
        assert_eq!(state.snapshot().filter.name(), "Women");
    }
}
