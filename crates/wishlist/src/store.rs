//! Wishlist state holder with write-through persistence.

use storefront_catalog::Product;
use storefront_core::{Entity, ProductId};

use crate::storage::{KeyValueStorage, StorageError};

/// Storage key holding the JSON array of wishlisted product ids.
pub const WISHLIST_KEY: &str = "wishlist";

/// The shopper's wishlist: a duplicate-free set of product ids, kept in
/// insertion order and written through to storage on every mutation.
///
/// Construct one per session and pass it to whoever needs it.
#[derive(Debug)]
pub struct WishlistStore<S> {
    storage: S,
    ids: Vec<ProductId>,
}

impl<S> WishlistStore<S>
where
    S: KeyValueStorage,
{
    /// Load the wishlist from `storage`.
    ///
    /// Missing, unreadable or undecodable storage yields an empty wishlist; the
    /// failure is logged, never returned.
    pub fn open(storage: S) -> Self {
        let ids = match load(&storage) {
            Ok(ids) => ids,
            Err(reason) => {
                tracing::warn!(key = WISHLIST_KEY, %reason, "failed to load wishlist; starting empty");
                Vec::new()
            }
        };
        Self { storage, ids }
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Add `id`. Returns `false` (and writes nothing) if it was already present.
    pub fn add(&mut self, id: ProductId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id);
        self.persist();
        true
    }

    /// Remove `id`. Returns `false` if it was not present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| *existing != id);
        if self.ids.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Wishlisted products, in catalog order. Ids no longer in the catalog are
    /// skipped.
    pub fn resolve<'a>(&self, catalog: &'a [Product]) -> Vec<&'a Product> {
        catalog.iter().filter(|p| self.contains(p.id())).collect()
    }

    /// Best effort: a failed write is logged and the in-memory set stays
    /// authoritative for the rest of the session.
    fn persist(&self) {
        let raw: Vec<u32> = self.ids.iter().map(|id| id.get()).collect();
        let result = serde_json::to_string(&raw)
            .map_err(|e| e.to_string())
            .and_then(|payload| {
                self.storage
                    .set(WISHLIST_KEY, &payload)
                    .map_err(|e: StorageError| e.to_string())
            });
        if let Err(err) = result {
            tracing::error!(key = WISHLIST_KEY, "failed to save wishlist: {err}");
        }
    }
}

fn load<S: KeyValueStorage>(storage: &S) -> Result<Vec<ProductId>, String> {
    let Some(payload) = storage.get(WISHLIST_KEY).map_err(|e| e.to_string())? else {
        return Ok(Vec::new());
    };
    let stored: Vec<ProductId> = serde_json::from_str(&payload).map_err(|e| e.to_string())?;

    // Older payloads may carry repeated ids; collapse them keeping first-seen order.
    let mut ids: Vec<ProductId> = Vec::with_capacity(stored.len());
    for id in stored {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}
