use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Context;

use storefront_catalog::{CatalogRepository, InMemoryCatalog};
use storefront_stylist::{HttpStyleAdvisor, StyleAdvisor};
use storefront_wishlist::{FileStorage, InMemoryStorage, KeyValueStorage, WishlistStore};

use crate::config::AppConfig;

pub type SharedWishlist = WishlistStore<Arc<dyn KeyValueStorage>>;

/// Process-wide handles shared by every handler.
pub struct AppServices {
    catalog: Arc<dyn CatalogRepository>,
    wishlist: Mutex<SharedWishlist>,
    advisor: Option<Arc<dyn StyleAdvisor>>,
}

impl AppServices {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        storage: Arc<dyn KeyValueStorage>,
        advisor: Option<Arc<dyn StyleAdvisor>>,
    ) -> Self {
        Self {
            catalog,
            wishlist: Mutex::new(WishlistStore::open(storage)),
            advisor,
        }
    }

    pub fn catalog(&self) -> &dyn CatalogRepository {
        self.catalog.as_ref()
    }

    /// Exclusive access to the wishlist. A panic mid-mutation cannot leave the
    /// id list half-written, so a poisoned lock is recovered.
    pub fn wishlist(&self) -> MutexGuard<'_, SharedWishlist> {
        self.wishlist.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn advisor(&self) -> Option<Arc<dyn StyleAdvisor>> {
        self.advisor.clone()
    }
}

/// Wire services from configuration. A style advisor is attached only when
/// `stylist_url` is set.
pub fn build_services(config: &AppConfig) -> anyhow::Result<AppServices> {
    let catalog: Arc<dyn CatalogRepository> = if config.seed_catalog {
        Arc::new(InMemoryCatalog::seeded().context("failed to seed catalog")?)
    } else {
        Arc::new(InMemoryCatalog::new())
    };

    let storage: Arc<dyn KeyValueStorage> = match &config.data_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "wishlist stored on disk");
            Arc::new(FileStorage::new(dir))
        }
        None => {
            tracing::warn!("no data directory available; wishlist kept in memory");
            Arc::new(InMemoryStorage::new())
        }
    };

    let advisor: Option<Arc<dyn StyleAdvisor>> = match &config.stylist_url {
        Some(url) => {
            tracing::info!(endpoint = %url, "style suggestions forwarded to advisor");
            let advisor = HttpStyleAdvisor::new(url.clone()).context("failed to build style advisor")?;
            Some(Arc::new(advisor))
        }
        None => {
            tracing::info!("no style advisor configured; style suggestions disabled");
            None
        }
    };

    Ok(AppServices::new(catalog, storage, advisor))
}
