//! Query engine: filter + stable sort over a catalog snapshot.

use serde::Serialize;

use crate::criteria::FilterCriteria;
use crate::filter::matches;
use crate::product::Product;
use crate::sort::{sort_products, SortKey};

/// Materialized query result plus the size of the catalog it was drawn from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryOutcome {
    pub items: Vec<Product>,
    pub total: usize,
}

/// Filter `catalog` (keeping relative order), then stable-sort by `sort`.
///
/// Pure: the inputs are never modified and identical arguments always yield an
/// identical sequence.
pub fn query(catalog: &[Product], criteria: &FilterCriteria, sort: SortKey) -> Vec<Product> {
    let mut items: Vec<Product> = catalog
        .iter()
        .filter(|p| matches(p, criteria))
        .cloned()
        .collect();
    sort_products(&mut items, sort);
    items
}

/// [`query`] plus the "showing N of M" bookkeeping callers render.
pub fn execute(catalog: &[Product], criteria: &FilterCriteria, sort: SortKey) -> QueryOutcome {
    let items = query(catalog, criteria, sort);
    tracing::debug!(
        category = %criteria.category(),
        sizes = criteria.sizes().len(),
        colors = criteria.colors().len(),
        sort = %sort,
        matched = items.len(),
        total = catalog.len(),
        "catalog query executed"
    );
    QueryOutcome {
        items,
        total: catalog.len(),
    }
}
