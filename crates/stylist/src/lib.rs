//! `storefront-stylist`
//!
//! **Responsibility:** outfit-suggestion boundary.
//!
//! This crate shapes the request sent to an external suggestion model and
//! carries its reply back. [`HttpStyleAdvisor`] forwards requests to an
//! external endpoint; the crate never runs a model itself:
//! - It must not mutate catalog or wishlist state.
//! - The reply text is opaque: it is neither parsed nor validated.

pub mod advisor;
pub mod http;
pub mod request;
pub mod result;

pub use advisor::{suggest_outfits, StyleAdvisor};
pub use http::HttpStyleAdvisor;
pub use request::{catalog_snapshot, OutfitRequest, SEASONAL_TRENDS};
pub use result::{OutfitSuggestions, StylistError};
