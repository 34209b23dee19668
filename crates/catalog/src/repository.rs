//! Catalog storage seam and its in-memory implementation.

use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::facets::FacetIndex;
use crate::product::{Product, ProductDraft};
use crate::seed::seed_catalog;

/// Product records in catalog ("featured") order.
pub trait CatalogRepository: Send + Sync {
    /// The product with `id`, or `NotFound`.
    fn get(&self, id: ProductId) -> DomainResult<Product>;
    /// Full snapshot, catalog order.
    fn list(&self) -> DomainResult<Vec<Product>>;
    /// Validate and append a new product under a freshly assigned id.
    fn create(&self, draft: ProductDraft) -> DomainResult<Product>;
    /// Validate and replace an existing product, keeping its id and position.
    fn update(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product>;
    fn delete(&self, id: ProductId) -> DomainResult<Product>;

    /// Facets of the current snapshot.
    fn facets(&self) -> DomainResult<FacetIndex> {
        Ok(FacetIndex::from_products(&self.list()?))
    }
}

impl<S> CatalogRepository for Arc<S>
where
    S: CatalogRepository + ?Sized,
{
    fn get(&self, id: ProductId) -> DomainResult<Product> {
        (**self).get(id)
    }

    fn list(&self) -> DomainResult<Vec<Product>> {
        (**self).list()
    }

    fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        (**self).create(draft)
    }

    fn update(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        (**self).update(id, draft)
    }

    fn delete(&self, id: ProductId) -> DomainResult<Product> {
        (**self).delete(id)
    }

    fn facets(&self) -> DomainResult<FacetIndex> {
        (**self).facets()
    }
}

#[derive(Debug)]
struct CatalogState {
    products: Vec<Product>,
    /// `None` once every id has been handed out.
    next_id: Option<ProductId>,
}

/// In-memory catalog for tests/dev (and the default service wiring).
#[derive(Debug)]
pub struct InMemoryCatalog {
    inner: RwLock<CatalogState>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogState {
                products: Vec::new(),
                next_id: Some(ProductId::FIRST),
            }),
        }
    }

    /// Catalog holding `products` in the given order. Ids must be unique.
    pub fn with_products(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
        }
        let next_id = match products.iter().map(Entity::id).max() {
            Some(highest) => highest.next(),
            None => Some(ProductId::FIRST),
        };

        Ok(Self {
            inner: RwLock::new(CatalogState { products, next_id }),
        })
    }

    /// Catalog holding the twelve reference products.
    pub fn seeded() -> DomainResult<Self> {
        Self::with_products(seed_catalog()?)
    }

    fn read(&self) -> DomainResult<RwLockReadGuard<'_, CatalogState>> {
        self.inner
            .read()
            .map_err(|_| DomainError::invariant("catalog lock poisoned"))
    }

    fn write(&self) -> DomainResult<RwLockWriteGuard<'_, CatalogState>> {
        self.inner
            .write()
            .map_err(|_| DomainError::invariant("catalog lock poisoned"))
    }
}

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogRepository for InMemoryCatalog {
    fn get(&self, id: ProductId) -> DomainResult<Product> {
        self.read()?
            .products
            .iter()
            .find(|p| p.id() == id)
            .cloned()
            .ok_or_else(DomainError::not_found)
    }

    fn list(&self) -> DomainResult<Vec<Product>> {
        Ok(self.read()?.products.clone())
    }

    fn create(&self, draft: ProductDraft) -> DomainResult<Product> {
        let mut state = self.write()?;
        let id = state
            .next_id
            .ok_or_else(|| DomainError::invariant("product id space exhausted"))?;
        let product = Product::from_draft(id, draft)?;
        state.next_id = id.next();
        state.products.push(product.clone());
        tracing::info!(product_id = %product.id(), name = product.name(), "product created");
        Ok(product)
    }

    fn update(&self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        let mut state = self.write()?;
        let slot = state
            .products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(DomainError::not_found)?;
        let product = Product::from_draft(id, draft)?;
        *slot = product.clone();
        tracing::info!(product_id = %id, "product updated");
        Ok(product)
    }

    fn delete(&self, id: ProductId) -> DomainResult<Product> {
        let mut state = self.write()?;
        let index = state
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(DomainError::not_found)?;
        let removed = state.products.remove(index);
        tracing::info!(product_id = %id, "product deleted");
        Ok(removed)
    }
}
