//! The shopping page and its view types.
//!
//! Everything the templates render is a plain-string view derived from a
//! [`PageState`] snapshot. Missing optional catalog fields become empty
//! strings and the templates omit them, so a sparse catalog entry degrades
//! instead of failing to render.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use goldenrod_core::{Cart, CartLine, PageState, Product};

use crate::filters;
use crate::state::AppState;

/// The fixed set of category controls shown on the page.
pub const CATEGORY_CONTROLS: &[&str] = &["All", "Men", "Women", "Kids"];

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: i64,
    pub title: String,
    pub price: String,
    /// Struck-through original price; empty when the catalog has none.
    pub compare_at_price: String,
    pub vendor: String,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i64(),
            title: product.title.clone(),
            price: product.price.to_string(),
            compare_at_price: product
                .compare_at_price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            vendor: product.vendor.clone().unwrap_or_default(),
            image: product.image.clone().unwrap_or_default(),
        }
    }
}

/// One visible catalog section.
#[derive(Clone)]
pub struct CategorySectionView {
    pub name: String,
    pub products: Vec<ProductView>,
}

/// Cart line display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: i64,
    pub title: String,
    pub quantity: u32,
    pub line_total: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.as_i64(),
            title: line.product.title.clone(),
            quantity: line.quantity,
            line_total: line.line_total().to_string(),
        }
    }
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    /// Number of distinct lines, shown in the navbar badge.
    pub count: usize,
}

impl From<&Cart> for CartView {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.lines().iter().map(CartItemView::from).collect(),
            total: cart.total().to_string(),
            count: cart.line_count(),
        }
    }
}

/// Build the category sections the current filter shows.
#[must_use]
pub fn visible_sections(state: &PageState) -> Vec<CategorySectionView> {
    state
        .catalog
        .categories
        .iter()
        .filter(|category| state.filter.shows(&category.category_name))
        .map(|category| CategorySectionView {
            name: category.category_name.clone(),
            products: category
                .category_products
                .iter()
                .map(ProductView::from)
                .collect(),
        })
        .collect()
}

/// The full shopping page template.
#[derive(Template, WebTemplate)]
#[template(path = "page.html")]
pub struct PageTemplate {
    /// Name of the selected category, for highlighting the controls.
    pub selected: String,
    /// The fixed category controls.
    pub controls: &'static [&'static str],
    /// Catalog sections the filter shows.
    pub sections: Vec<CategorySectionView>,
    /// Current cart contents.
    pub cart: CartView,
}

/// Display the shopping page.
#[instrument(skip(state))]
pub async fn page(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = state.snapshot();

    PageTemplate {
        selected: snapshot.filter.name().to_string(),
        controls: CATEGORY_CONTROLS,
        sections: visible_sections(&snapshot),
        cart: CartView::from(&snapshot.cart),
    }
}
