//! The shopping cart as an ordered collection of quantity lines.
//!
//! The cart holds at most one line per product id; adding an already-carted
//! product bumps its quantity instead of appending a second line. Every
//! operation is pure: it takes `&self` and returns a new [`Cart`] snapshot,
//! so earlier snapshots handed to observers are never affected by later
//! mutations.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{Price, ProductId};

/// One aggregated cart entry: a product and the quantity selected.
///
/// The `product` is a denormalized copy captured when the line was created.
/// Later catalog changes do not propagate into existing lines. Quantity is
/// always at least 1 while the line exists; dropping a line happens only
/// through [`Cart::remove`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity)
    }
}

/// The in-memory shopping cart.
///
/// Lines keep insertion order. All mutating operations return a fresh
/// snapshot and are total: referencing a product id that has no line is a
/// no-op, never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines (not total quantity).
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a product: bump the existing line's quantity by one, or append
    /// a new line with quantity 1, copying the product at this moment.
    #[must_use]
    pub fn add(&self, product: &Product) -> Self {
        let mut next = self.clone();
        match next.lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => next.lines.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
        next
    }

    /// Delete the line for `id` entirely, whatever its quantity.
    /// No-op if there is no such line.
    #[must_use]
    pub fn remove(&self, id: ProductId) -> Self {
        let mut next = self.clone();
        next.lines.retain(|line| line.product.id != id);
        next
    }

    /// Bump the quantity of the line for `id` by one. No-op if absent.
    #[must_use]
    pub fn increment(&self, id: ProductId) -> Self {
        let mut next = self.clone();
        if let Some(line) = next.lines.iter_mut().find(|line| line.product.id == id) {
            line.quantity += 1;
        }
        next
    }

    /// Lower the quantity of the line for `id` by one, but never below 1.
    /// Decrementing at quantity 1 is a no-op; only [`Cart::remove`] drops
    /// a line.
    #[must_use]
    pub fn decrement(&self, id: ProductId) -> Self {
        let mut next = self.clone();
        if let Some(line) = next.lines.iter_mut().find(|line| line.product.id == id)
            && line.quantity > 1
        {
            line.quantity -= 1;
        }
        next
    }

    /// Sum of `price * quantity` over all lines; zero for an empty cart.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn product(id: i64, price: &str) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            price: Price::new(price.parse().unwrap()),
            compare_at_price: None,
            vendor: None,
            image: None,
        }
    }

    fn price(s: &str) -> Price {
        Price::new(s.parse().unwrap())
    }

    #[test]
    fn test_add_twice_aggregates_into_one_line() {
        let p = product(1, "100");
        let cart = Cart::new().add(&p).add(&p);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 2);
        assert_eq!(cart.total(), price("200"));
    }

    #[test]
    fn test_remove_drops_line_regardless_of_quantity() {
        let p = product(1, "100");
        let cart = Cart::new().add(&p).add(&p).add(&p);
        let cart = cart.remove(p.id);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Price::ZERO);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let cart = Cart::new().add(&product(1, "100"));
        let same = cart.remove(ProductId::new(2));
        assert_eq!(same, cart);
    }

    #[test]
    fn test_increment_and_decrement() {
        let p = product(1, "50");
        let cart = Cart::new().add(&p).increment(p.id).increment(p.id);
        assert_eq!(cart.lines()[0].quantity, 3);
        let cart = cart.decrement(p.id);
        assert_eq!(cart.lines()[0].quantity, 2);
    }

    #[test]
    fn test_decrement_never_goes_below_one() {
        let p = product(1, "50");
        let cart = Cart::new().add(&p).decrement(p.id).decrement(p.id);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_increment_and_decrement_absent_are_noops() {
        let cart = Cart::new().add(&product(1, "50"));
        assert_eq!(cart.increment(ProductId::new(9)), cart);
        assert_eq!(cart.decrement(ProductId::new(9)), cart);
    }

    #[test]
    fn test_no_duplicate_lines_across_operation_sequences() {
        let a = product(1, "10");
        let b = product(2, "20");
        let cart = Cart::new()
            .add(&a)
            .add(&b)
            .add(&a)
            .decrement(b.id)
            .increment(a.id)
            .add(&b);
        let mut ids: Vec<_> = cart.lines().iter().map(|l| l.product.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), cart.line_count());
    }

    #[test]
    fn test_add_after_remove_starts_fresh() {
        let p = product(1, "10");
        let cart = Cart::new().add(&p).add(&p).remove(p.id).add(&p);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_total_sums_across_lines() {
        let cart = Cart::new()
            .add(&product(1, "19.99"))
            .add(&product(2, "0.01"))
            .increment(ProductId::new(1));
        assert_eq!(cart.total(), price("39.99"));
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let cart = Cart::new()
            .add(&product(3, "1"))
            .add(&product(1, "1"))
            .add(&product(2, "1"));
        let ids: Vec<_> = cart.lines().iter().map(|l| l.product.id.as_i64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_mutation() {
        let p = product(1, "100");
        let before = Cart::new().add(&p);
        let after = before.add(&p).increment(p.id);
        assert_eq!(before.lines()[0].quantity, 1);
        assert_eq!(after.lines()[0].quantity, 3);
    }

    #[test]
    fn test_line_copies_product_at_add_time() {
        let mut p = product(1, "100");
        let cart = Cart::new().add(&p);
        p.title = "Renamed".to_string();
        assert_eq!(cart.lines()[0].product.title, "Product 1");
    }
}
