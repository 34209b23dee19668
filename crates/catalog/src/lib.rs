//! Catalog domain module.
//!
//! This crate contains the product model and the catalog query engine
//! (filtering, sorting and faceting), implemented purely as deterministic
//! domain logic (no IO, no HTTP). The only stateful piece is the in-memory
//! [`InMemoryCatalog`] repository used by the service layer.

pub mod criteria;
pub mod facets;
pub mod filter;
pub mod product;
pub mod query;
pub mod repository;
pub mod seed;
pub mod sort;

pub use criteria::{CategoryFilter, CriteriaMutation, FilterCriteria, PriceRange, DEFAULT_MAX_PRICE_CENTS};
pub use facets::FacetIndex;
pub use filter::matches;
pub use product::{Category, Price, Product, ProductDraft};
pub use query::{execute, query, QueryOutcome};
pub use repository::{CatalogRepository, InMemoryCatalog};
pub use seed::seed_catalog;
pub use sort::{compare, sort_products, SortKey};
