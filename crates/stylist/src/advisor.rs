use storefront_catalog::Product;

use crate::request::OutfitRequest;
use crate::result::{OutfitSuggestions, StylistError};

/// External outfit-suggestion collaborator (e.g. a hosted language model).
///
/// Implementations must not mutate storefront state; they only turn a request
/// into free text.
pub trait StyleAdvisor: Send + Sync + 'static {
    fn suggest(&self, request: &OutfitRequest) -> Result<OutfitSuggestions, StylistError>;
}

/// Build a request from `user_preferences` and `catalog`, then ask `advisor`.
pub fn suggest_outfits<A>(
    advisor: &A,
    user_preferences: &str,
    catalog: &[Product],
) -> Result<OutfitSuggestions, StylistError>
where
    A: StyleAdvisor + ?Sized,
{
    let request = OutfitRequest::new(user_preferences, catalog)?;
    tracing::debug!(catalog_items = catalog.len(), "requesting outfit suggestions");
    advisor.suggest(&request).inspect_err(|e| {
        tracing::warn!("outfit suggestion failed: {e}");
    })
}
