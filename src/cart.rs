use std::sync::Arc;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info, instrument, warn};

use crate::config::{CartConfig, CorruptPayload};
use crate::dto::{decode_products, encode_products, LineItem, NewLineItem};
use crate::storage::KeyValueStore;
use crate::stores::ProductsStore;
use crate::Error;

/// Cart state shared between UI consumers.
///
/// Cloning is cheap and every clone drives the same cart. Each command holds
/// the cart lock while it persists, and only commits the new lines in memory
/// once the write succeeded, so memory never runs ahead of storage and
/// overlapping commands never work from a stale snapshot.
#[derive(Clone)]
pub struct CartStore {
    inner: Arc<Inner>,
}

struct Inner {
    storage: Arc<dyn KeyValueStore>,
    storage_key: String,
    products: Mutex<ProductsStore>,
    /// Last committed lines, published to subscribers
    committed: watch::Sender<Vec<LineItem>>,
}

impl CartStore {
    /// Creates the cart from whatever is persisted under the configured key.
    ///
    /// An absent or blank payload yields an empty cart. A payload that does
    /// not decode is handled according to [`CartConfig::on_corrupt`].
    ///
    /// # Errors
    /// Returns an error if:
    /// * The storage read fails
    /// * The payload is malformed and the policy is [`CorruptPayload::Fail`]
    pub async fn load(storage: Arc<dyn KeyValueStore>, config: CartConfig) -> Result<Self, Error> {
        let payload = storage.get(&config.storage_key).await?;

        let products = match payload.as_deref().map(str::trim) {
            None | Some("") => ProductsStore::new(),
            Some(payload) => match decode_products(payload) {
                Ok(items) => ProductsStore::from_items(items),
                Err(e) => match config.on_corrupt {
                    CorruptPayload::Discard => {
                        warn!(key = %config.storage_key, error = %e, "discarding malformed cart payload");
                        ProductsStore::new()
                    }
                    CorruptPayload::Fail => return Err(Error::Decode(e)),
                },
            },
        };
        info!(lines = products.len(), "cart loaded");

        let (committed, _) = watch::channel(products.items().to_vec());
        Ok(Self {
            inner: Arc::new(Inner {
                storage,
                storage_key: config.storage_key,
                products: Mutex::new(products),
                committed,
            }),
        })
    }

    /// Snapshot of the committed lines, in cart order.
    pub fn products(&self) -> Vec<LineItem> {
        self.inner.committed.borrow().clone()
    }

    /// Receiver that observes every committed change to the lines.
    pub fn subscribe(&self) -> watch::Receiver<Vec<LineItem>> {
        self.inner.committed.subscribe()
    }

    /// Adds a catalog entry. A new id is appended with quantity 1; a known id
    /// is incremented.
    #[instrument(skip(self, candidate), fields(id = %candidate.id))]
    pub async fn add_to_cart(&self, candidate: NewLineItem) -> Result<(), Error> {
        let appended = self.apply(|products| products.add(candidate)).await?;
        debug!(appended, "added to cart");
        Ok(())
    }

    /// Adds one to the quantity of the line with this id. Unknown ids leave
    /// the lines unchanged.
    #[instrument(skip(self))]
    pub async fn increment(&self, id: &str) -> Result<(), Error> {
        self.apply(|products| products.increment(id)).await
    }

    /// Removes one from the quantity of the line with this id, never going
    /// below zero. Lines at zero are kept.
    #[instrument(skip(self))]
    pub async fn decrement(&self, id: &str) -> Result<(), Error> {
        self.apply(|products| products.decrement(id)).await
    }

    /// Runs `mutate` on a copy of the lines, persists the result and then
    /// commits it. On a failed write the committed lines are left untouched.
    async fn apply<F, R>(&self, mutate: F) -> Result<R, Error>
    where
        F: FnOnce(&mut ProductsStore) -> R,
    {
        let mut products = self.inner.products.lock().await;

        let mut next = products.clone();
        let result = mutate(&mut next);

        let payload = encode_products(next.items()).map_err(Error::Encode)?;
        if let Err(e) = self.inner.storage.set(&self.inner.storage_key, payload).await {
            warn!(key = %self.inner.storage_key, error = %e, "failed to persist cart");
            return Err(e.into());
        }

        *products = next;
        self.inner.committed.send_replace(products.items().to_vec());
        Ok(result)
    }
}
