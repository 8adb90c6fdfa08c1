//! The read-only product catalog and its wire shape.
//!
//! The catalog is fetched once at startup from a static JSON resource
//! shaped as `{ "categories": [{ "category_name", "category_products" }] }`.
//! Field names here match that wire shape directly so the payload
//! deserializes without renames. Products are never mutated after the
//! fetch; cart lines copy the fields they need at add time.

use serde::{Deserialize, Serialize};

use crate::types::{Price, ProductId};

/// An immutable catalog entry.
///
/// `compare_at_price`, `vendor`, and `image` are optional so a catalog
/// entry missing them still deserializes and renders; the view simply
/// omits the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique id within the catalog.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Selling price.
    pub price: Price,
    /// Original price shown struck through, if any.
    #[serde(default)]
    pub compare_at_price: Option<Price>,
    /// Vendor name.
    #[serde(default)]
    pub vendor: Option<String>,
    /// Image URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// A named group of products within one catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Section name, unique within the snapshot (e.g., `Men`).
    pub category_name: String,
    /// Products belonging to this section.
    #[serde(default)]
    pub category_products: Vec<Product>,
}

/// The full set of categories and products retrieved from the remote
/// source. `Default` is the empty catalog the page starts with (and keeps,
/// should the fetch fail).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Whether the catalog holds no categories at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Look up a product anywhere in the catalog by id.
    ///
    /// Ids are unique within a catalog snapshot, so the first match is
    /// the only match.
    #[must_use]
    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.categories
            .iter()
            .flat_map(|category| category.category_products.iter())
            .find(|product| product.id == id)
    }
}
