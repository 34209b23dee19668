use serde::{Deserialize, Serialize};

use storefront_catalog::{Category, Product};

use crate::result::StylistError;

/// Trends string sent with every request unless overridden.
pub const SEASONAL_TRENDS: &str = "Current trends include minimalist aesthetics, oversized silhouettes, \
sustainable fabrics, and vintage-inspired denim. Neutral tones are popular, with occasional pops of \
vibrant color like electric blue and kelly green.";

const MIN_PREFERENCES_CHARS: usize = 20;
const MAX_PREFERENCES_CHARS: usize = 500;

/// Request sent to the suggestion collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRequest {
    pub user_preferences: String,
    pub seasonal_trends: String,
    /// JSON array of `{name, description, category, price}`.
    pub product_catalog: String,
}

#[derive(Serialize)]
struct CatalogEntry<'a> {
    name: &'a str,
    description: &'a str,
    category: Category,
    price: f64,
}

/// Serialize the subset of `products` the suggestion model sees.
pub fn catalog_snapshot(products: &[Product]) -> Result<String, StylistError> {
    let entries: Vec<CatalogEntry<'_>> = products
        .iter()
        .map(|p| CatalogEntry {
            name: p.name(),
            description: p.description(),
            category: p.category(),
            price: p.price().as_decimal(),
        })
        .collect();
    serde_json::to_string(&entries).map_err(|e| StylistError::Failed(e.to_string()))
}

impl OutfitRequest {
    /// Build a request for `user_preferences` against `catalog`, using the
    /// default trends string.
    ///
    /// Preferences must be 20–500 characters after trimming.
    pub fn new(user_preferences: &str, catalog: &[Product]) -> Result<Self, StylistError> {
        let user_preferences = user_preferences.trim();
        let chars = user_preferences.chars().count();
        if chars < MIN_PREFERENCES_CHARS {
            return Err(StylistError::InvalidInput(format!(
                "user_preferences: describe your style in at least {MIN_PREFERENCES_CHARS} characters"
            )));
        }
        if chars > MAX_PREFERENCES_CHARS {
            return Err(StylistError::InvalidInput(format!(
                "user_preferences: must not be longer than {MAX_PREFERENCES_CHARS} characters"
            )));
        }

        Ok(Self {
            user_preferences: user_preferences.to_string(),
            seasonal_trends: SEASONAL_TRENDS.to_string(),
            product_catalog: catalog_snapshot(catalog)?,
        })
    }

    /// Prompt text for text-completion style collaborators.
    pub fn render_prompt(&self) -> String {
        format!(
            "You are a personal stylist that provides outfit suggestions based on user preferences, \
seasonal trends, and the current product catalog.\n\n\
User Preferences: {}\n\
Seasonal Trends: {}\n\
Product Catalog: {}\n\n\
Provide a list of outfit suggestions that match the user's preferences, are in line with the \
current seasonal trends, and are available in the product catalog.",
            self.user_preferences, self.seasonal_trends, self.product_catalog
        )
    }
}
