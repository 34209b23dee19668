//! Filter predicate: does one product satisfy a criteria set?

use std::collections::BTreeSet;

use crate::criteria::FilterCriteria;
use crate::product::Product;

/// Logical AND of the category, size, color and price sub-predicates.
///
/// Sizes and colors match when *any* requested label is present on the product;
/// an empty request set is unconstrained.
pub fn matches(product: &Product, criteria: &FilterCriteria) -> bool {
    criteria.category().admits(product.category())
        && any_requested(criteria.sizes(), |s| product.has_size(s))
        && any_requested(criteria.colors(), |c| product.has_color(c))
        && criteria.price_range().contains(product.price())
}

fn any_requested(requested: &BTreeSet<String>, present: impl Fn(&str) -> bool) -> bool {
    requested.is_empty() || requested.iter().any(|label| present(label))
}
