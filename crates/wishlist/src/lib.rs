//! `storefront-wishlist`
//!
//! **Responsibility:** the shopper's wishlist, a small persistent set of product
//! ids.
//!
//! This crate provides:
//! - a key-value storage seam (`KeyValueStorage`) with in-memory and file-backed
//!   implementations
//! - `WishlistStore`, which keeps the set in memory and writes it through to
//!   storage on every mutation

pub mod storage;
pub mod store;

pub use storage::{default_data_dir, FileStorage, InMemoryStorage, KeyValueStorage, StorageError};
pub use store::{WishlistStore, WISHLIST_KEY};
