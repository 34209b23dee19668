//! Sort comparator and stable sort over product sequences.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::DomainError;

use crate::product::Product;

/// Result ordering (closed set).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    /// Catalog order, untouched.
    #[default]
    #[serde(rename = "featured")]
    Featured,
    #[serde(rename = "price-asc")]
    PriceAscending,
    #[serde(rename = "price-desc")]
    PriceDescending,
    #[serde(rename = "name-asc")]
    NameAscending,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Featured,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::NameAscending,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAscending => "price-asc",
            SortKey::PriceDescending => "price-desc",
            SortKey::NameAscending => "name-asc",
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::field("sort", "must be one of: featured, price-asc, price-desc, name-asc")
            })
    }
}

/// Compare two products under `key`.
///
/// `Featured` treats every pair as equal, so a stable sort leaves input order
/// intact.
pub fn compare(a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Featured => Ordering::Equal,
        SortKey::PriceAscending => a.price().cmp(&b.price()),
        SortKey::PriceDescending => b.price().cmp(&a.price()),
        SortKey::NameAscending => collate(a.name(), b.name()),
    }
}

/// Stable in-place sort. Ties keep their relative input order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    if key == SortKey::Featured {
        return;
    }
    products.sort_by(|a, b| compare(a, b, key));
}

/// Case-folded comparison first ("apple" next to "Apple"), then raw code
/// points so distinct names never compare equal.
fn collate(a: &str, b: &str) -> Ordering {
    let fold = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}
