//! Goldenrod Core - catalog, cart, and filter state logic.
//!
//! This crate holds everything the storefront page is made of: the fetched
//! catalog, the selected-category filter, and the shopping cart, plus the
//! single state container that ties them together.
//!
//! # Architecture
//!
//! The core crate contains only types and pure state transitions - no I/O,
//! no HTTP clients, no rendering. The storefront binary fetches the catalog
//! and renders templates; everything it renders is derived from a
//! [`store::PageState`] snapshot produced here.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids and prices
//! - [`catalog`] - The read-only product catalog and its wire shape
//! - [`cart`] - The cart as an ordered collection of quantity lines
//! - [`filter`] - Selected-category filter and search shortcuts
//! - [`store`] - Action enum and reducer over the whole page state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod filter;
pub mod store;
pub mod types;

pub use cart::{Cart, CartLine};
pub use catalog::{Catalog, Category, Product};
pub use filter::CategoryFilter;
pub use store::{Action, PageState};
pub use types::{Price, ProductId};
