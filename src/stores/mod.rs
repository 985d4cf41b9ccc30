//! In-memory state for the cart. Provides:
//! - Ordered line items and the quantity rules applied to them ([`ProductsStore`])
//!
//! Current implementation is synchronous and has no knowledge of storage;
//! [`crate::CartStore`] layers persistence on top.

mod products;

pub use products::ProductsStore;
