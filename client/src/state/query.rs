//! Search request payload assembled from the search card inputs.
//!
//! The page does not send this anywhere yet. It is the value the "Search
//! Recipes" button produces, serialized in the shape a search backend would
//! receive.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use serde::Serialize;

use crate::state::search::{IngredientList, SearchMode};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchQuery {
    Text { raw: String, terms: Vec<String> },
    Ingredients { ingredients: Vec<String> },
}

impl SearchQuery {
    /// Build the query for the active mode. Only that mode's input is read.
    #[must_use]
    pub fn from_inputs(mode: SearchMode, text: &str, ingredients: &IngredientList) -> Self {
        match mode {
            SearchMode::Text => Self::Text { raw: text.to_owned(), terms: query_terms(text) },
            SearchMode::Ingredients => Self::Ingredients { ingredients: ingredients.items().to_vec() },
        }
    }

    #[must_use]
    pub fn mode(&self) -> SearchMode {
        match self {
            Self::Text { .. } => SearchMode::Text,
            Self::Ingredients { .. } => SearchMode::Ingredients,
        }
    }

    /// True when there is nothing to search for.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text { terms, .. } => terms.is_empty(),
            Self::Ingredients { ingredients } => ingredients.is_empty(),
        }
    }
}

/// Lowercase (full Unicode mapping), drop anything but ASCII letters, digits
/// and whitespace, then split on whitespace.
#[must_use]
pub fn query_terms(text: &str) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect();
    cleaned.split_whitespace().map(str::to_owned).collect()
}
