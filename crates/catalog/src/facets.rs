//! Derived facet lists (all distinct sizes and colors in a catalog snapshot).

use std::collections::BTreeSet;

use serde::Serialize;

use crate::product::Product;

/// Sorted, deduplicated union of sizes and colors across a catalog snapshot.
///
/// The index is a snapshot: rebuild it whenever the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FacetIndex {
    sizes: Vec<String>,
    colors: Vec<String>,
}

impl FacetIndex {
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let mut sizes = BTreeSet::new();
        let mut colors = BTreeSet::new();
        for product in products {
            sizes.extend(product.sizes().iter().cloned());
            colors.extend(product.colors().iter().cloned());
        }
        Self {
            sizes: sizes.into_iter().collect(),
            colors: colors.into_iter().collect(),
        }
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }
}
