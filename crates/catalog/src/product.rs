use core::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

use storefront_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Product category (closed set).
///
/// Deserializes through [`FromStr`], so wire names are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Accessories,
    Shoes,
}

impl Category {
    /// Every category, in storefront display order.
    pub const ALL: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Accessories,
        Category::Shoes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Dresses => "Dresses",
            Category::Outerwear => "Outerwear",
            Category::Accessories => "Accessories",
            Category::Shoes => "Shoes",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                DomainError::field(
                    "category",
                    "must be one of: Tops, Bottoms, Dresses, Outerwear, Accessories, Shoes",
                )
            })
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Positive price in the smallest currency unit (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Price(u64);

impl Price {
    pub fn from_cents(cents: u64) -> DomainResult<Self> {
        if cents == 0 {
            return Err(DomainError::field("price", "must be positive"));
        }
        Ok(Self(cents))
    }

    pub fn cents(self) -> u64 {
        self.0
    }

    /// Price in major units, for display and prompt payloads.
    pub fn as_decimal(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl ValueObject for Price {}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl TryFrom<u64> for Price {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_cents(value)
    }
}

impl From<Price> for u64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

/// Catalog product record.
///
/// Only constructible through [`ProductDraft`] validation, so every `Product`
/// has a non-empty name/description, a positive price, an http(s) image URL and
/// non-empty, deduplicated size and color sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Price,
    image: String,
    category: Category,
    sizes: Vec<String>,
    colors: Vec<String>,
}

impl Product {
    /// Validate `draft` and assign it the identifier `id`.
    pub fn from_draft(id: ProductId, draft: ProductDraft) -> DomainResult<Self> {
        draft.validate(id)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }

    /// Editable view of this product (admin edit form prefill).
    pub fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price.cents(),
            image: self.image.clone(),
            category: self.category,
            sizes: self.sizes.clone(),
            colors: self.colors.clone(),
        }
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Unvalidated product payload (admin create/update).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    /// Price in cents.
    pub price: u64,
    pub image: String,
    pub category: Category,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

impl ProductDraft {
    /// Validate every field and build the product. The error names the first
    /// failing field.
    pub fn validate(self, id: ProductId) -> DomainResult<Product> {
        let name = required_text("name", self.name)?;
        let description = required_text("description", self.description)?;
        let price = Price::from_cents(self.price)?;
        let image = image_url(self.image)?;
        let sizes = label_set("sizes", self.sizes)?;
        let colors = label_set("colors", self.colors)?;

        Ok(Product {
            id,
            name,
            description,
            price,
            image,
            category: self.category,
            sizes,
            colors,
        })
    }
}

fn required_text(field: &str, value: String) -> DomainResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::field(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn image_url(value: String) -> DomainResult<String> {
    let trimmed = value.trim();
    let url = Url::parse(trimmed).map_err(|e| DomainError::field("image", e))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(DomainError::field("image", "must be an http(s) URL"));
    }
    Ok(trimmed.to_string())
}

/// Trim labels, reject blanks, collapse duplicates keeping first-seen order.
fn label_set(field: &str, labels: Vec<String>) -> DomainResult<Vec<String>> {
    let mut out: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.trim();
        if label.is_empty() {
            return Err(DomainError::field(field, "labels must not be blank"));
        }
        if !out.iter().any(|l| l == label) {
            out.push(label.to_string());
        }
    }
    if out.is_empty() {
        return Err(DomainError::field(field, "at least one is required"));
    }
    Ok(out)
}
