//! Scoped access to a cart for code that cannot have it passed in directly.
//!
//! [`CartProvider::scope`] makes a [`CartStore`] visible to everything the
//! wrapped future runs, and [`use_cart`] looks it up. The binding is
//! task-local: work moved onto another task with `tokio::spawn` must be given
//! its own scope.

use std::future::Future;

use crate::{CartStore, Error};

tokio::task_local! {
    static CURRENT_CART: CartStore;
}

pub struct CartProvider {
    cart: CartStore,
}

impl CartProvider {
    pub fn new(cart: CartStore) -> Self {
        Self { cart }
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Runs `f` with this provider's cart available through [`use_cart`].
    /// An enclosing provider is shadowed for the duration.
    pub async fn scope<F>(&self, f: F) -> F::Output
    where
        F: Future,
    {
        CURRENT_CART.scope(self.cart.clone(), f).await
    }

    /// Synchronous counterpart of [`CartProvider::scope`].
    pub fn sync_scope<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        CURRENT_CART.sync_scope(self.cart.clone(), f)
    }
}

/// Returns the cart of the innermost enclosing provider.
///
/// # Errors
/// Returns [`Error::OutsideProvider`] when no provider scope is active.
pub fn use_cart() -> Result<CartStore, Error> {
    CURRENT_CART
        .try_with(CartStore::clone)
        .map_err(|_| Error::OutsideProvider)
}
