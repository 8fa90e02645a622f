//! Catalog client for the verdura produce API.
//!
//! This crate covers the fetch-and-transform half of the catalog screen:
//! it issues one GET against the content API, validates each wire entry
//! into a typed [`Item`], and computes the per-item display fields
//! (effective price, discount flag, stock status). Rendering and screen
//! lifecycle live in the consuming application.
//!
//! # Example
//!
//! ```ignore
//! use verdura_catalog::{CatalogClient, DisplayItem};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = CatalogClient::with_base_url("http://localhost:1337");
//!     let items = client.fetch_catalog().await.unwrap();
//!
//!     for item in items.into_iter().map(DisplayItem::new) {
//!         println!("{}: {:.2}/{}", item.item.name, item.derived.effective_price, item.item.unit);
//!     }
//! }
//! ```

mod client;
mod convert;
mod error;
mod model;

pub use client::{CatalogClient, DEFAULT_BASE_URL};
pub use convert::{ValidationError, parse_catalog, parse_item};
pub use error::CatalogError;
pub use model::{Derived, DisplayItem, Item, ItemId, LOW_STOCK_THRESHOLD, StockStatus};
