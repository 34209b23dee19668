use std::collections::BTreeSet;

use serde::Deserialize;

use storefront_catalog::{
    CategoryFilter, FilterCriteria, PriceRange, SortKey, DEFAULT_MAX_PRICE_CENTS,
};
use storefront_core::{DomainError, DomainResult, ProductId};

/// `GET /products` query string. Every field is optional; absent fields take
/// the storefront defaults (all categories, any size/color, `[0, 50000]`
/// cents, featured order).
#[derive(Debug, Default, Deserialize)]
pub struct ProductQueryParams {
    pub category: Option<String>,
    /// Comma-separated size labels.
    pub sizes: Option<String>,
    /// Comma-separated color labels.
    pub colors: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub sort: Option<String>,
}

impl ProductQueryParams {
    pub fn to_query(&self) -> DomainResult<(FilterCriteria, SortKey)> {
        let category = match non_blank(&self.category) {
            Some(raw) => raw.parse::<CategoryFilter>()?,
            None => CategoryFilter::All,
        };

        let min = parse_cents("min_price", &self.min_price)?.unwrap_or(0);
        let max = parse_cents("max_price", &self.max_price)?.unwrap_or(DEFAULT_MAX_PRICE_CENTS);
        let price_range = PriceRange::new(min, max)?;

        let sort = match non_blank(&self.sort) {
            Some(raw) => raw.parse::<SortKey>()?,
            None => SortKey::default(),
        };

        let criteria = FilterCriteria::new(
            category,
            split_labels(&self.sizes),
            split_labels(&self.colors),
            price_range,
        );
        Ok((criteria, sort))
    }
}

/// `POST /style-suggestions` body.
#[derive(Debug, Deserialize)]
pub struct StyleRequest {
    pub user_preferences: String,
}

pub fn parse_product_id(raw: &str) -> DomainResult<ProductId> {
    raw.parse()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn parse_cents(field: &str, value: &Option<String>) -> DomainResult<Option<u64>> {
    non_blank(value)
        .map(|raw| {
            raw.parse::<u64>()
                .map_err(|_| DomainError::field(field, "must be a non-negative whole number of cents"))
        })
        .transpose()
}

fn split_labels(value: &Option<String>) -> BTreeSet<String> {
    value
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_string)
        .collect()
}
