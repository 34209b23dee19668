//! Filter criteria (immutable value) and its pure transition function.
//!
//! Callers never mutate a [`FilterCriteria`] in place: every change goes
//! through [`FilterCriteria::apply`] (or one of the helper wrappers), which
//! returns a fresh value and leaves the previous one untouched.

use core::str::FromStr;
use std::collections::BTreeSet;

use serde::Serialize;

use storefront_core::{DomainError, DomainResult, ValueObject};

use crate::product::{Category, Price};

/// Upper bound of the default price range, in cents ($500).
pub const DEFAULT_MAX_PRICE_CENTS: u64 = 50_000;

/// Category constraint: the `all` sentinel or one concrete category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl ValueObject for CategoryFilter {}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        CategoryFilter::Only(value)
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.to_string()
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => core::fmt::Display::fmt(c, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::from_str(s).map(CategoryFilter::Only)
    }
}

/// Closed price interval `[min, max]` in cents, `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PriceRange {
    min: u64,
    max: u64,
}

impl PriceRange {
    /// Build a range; `min > max` is rejected, never swapped or clamped.
    pub fn new(min: u64, max: u64) -> DomainResult<Self> {
        if min > max {
            return Err(DomainError::field(
                "price_range",
                format!("min ({min}) must not exceed max ({max})"),
            ));
        }
        Ok(Self { min, max })
    }

    /// `[0, ∞)`.
    pub fn unbounded() -> Self {
        Self { min: 0, max: u64::MAX }
    }

    pub fn min(self) -> u64 {
        self.min
    }

    pub fn max(self) -> u64 {
        self.max
    }

    /// Inclusive on both ends.
    pub fn contains(self, price: Price) -> bool {
        (self.min..=self.max).contains(&price.cents())
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self {
            min: 0,
            max: DEFAULT_MAX_PRICE_CENTS,
        }
    }
}

impl ValueObject for PriceRange {}

/// Facet constraints applied to the catalog.
///
/// Empty `sizes`/`colors` sets mean "unconstrained".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterCriteria {
    category: CategoryFilter,
    sizes: BTreeSet<String>,
    colors: BTreeSet<String>,
    price_range: PriceRange,
}

impl ValueObject for FilterCriteria {}

/// One discrete change to a [`FilterCriteria`] value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaMutation {
    SetCategory(CategoryFilter),
    ToggleSize(String),
    ToggleColor(String),
    SetPriceRange(PriceRange),
    Reset,
}

impl FilterCriteria {
    pub fn new(
        category: CategoryFilter,
        sizes: impl IntoIterator<Item = String>,
        colors: impl IntoIterator<Item = String>,
        price_range: PriceRange,
    ) -> Self {
        Self {
            category,
            sizes: sizes.into_iter().collect(),
            colors: colors.into_iter().collect(),
            price_range,
        }
    }

    /// Criteria that admit every well-formed product.
    pub fn unconstrained() -> Self {
        Self {
            price_range: PriceRange::unbounded(),
            ..Self::default()
        }
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn sizes(&self) -> &BTreeSet<String> {
        &self.sizes
    }

    pub fn colors(&self) -> &BTreeSet<String> {
        &self.colors
    }

    pub fn price_range(&self) -> PriceRange {
        self.price_range
    }

    /// Pure transition: returns the criteria that result from `mutation`.
    pub fn apply(&self, mutation: CriteriaMutation) -> Self {
        match mutation {
            CriteriaMutation::SetCategory(category) => Self {
                category,
                ..self.clone()
            },
            CriteriaMutation::ToggleSize(size) => Self {
                sizes: toggled(&self.sizes, size),
                ..self.clone()
            },
            CriteriaMutation::ToggleColor(color) => Self {
                colors: toggled(&self.colors, color),
                ..self.clone()
            },
            CriteriaMutation::SetPriceRange(price_range) => Self {
                price_range,
                ..self.clone()
            },
            CriteriaMutation::Reset => Self::default(),
        }
    }

    pub fn with_category(&self, category: impl Into<CategoryFilter>) -> Self {
        self.apply(CriteriaMutation::SetCategory(category.into()))
    }

    pub fn toggle_size(&self, size: impl Into<String>) -> Self {
        self.apply(CriteriaMutation::ToggleSize(size.into()))
    }

    pub fn toggle_color(&self, color: impl Into<String>) -> Self {
        self.apply(CriteriaMutation::ToggleColor(color.into()))
    }

    pub fn with_price_range(&self, price_range: PriceRange) -> Self {
        self.apply(CriteriaMutation::SetPriceRange(price_range))
    }

    pub fn reset(&self) -> Self {
        self.apply(CriteriaMutation::Reset)
    }
}

fn toggled(set: &BTreeSet<String>, label: String) -> BTreeSet<String> {
    let mut next = set.clone();
    if !next.remove(&label) {
        next.insert(label);
    }
    next
}
