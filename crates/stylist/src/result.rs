use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reply from the suggestion collaborator (free text, passed through as-is).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitSuggestions {
    pub outfit_suggestions: String,
}

impl OutfitSuggestions {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            outfit_suggestions: text.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum StylistError {
    #[error("invalid request: {0}")]
    InvalidInput(String),

    #[error("suggestion service unavailable: {0}")]
    Unavailable(String),

    #[error("suggestion failed: {0}")]
    Failed(String),
}
