//! Search card state: the selected search mode, the ingredient list, and the
//! text of both inputs.
//!
//! DESIGN
//! ======
//! `SearchCardState` is plain data held in one `RwSignal` by the search card.
//! The ingredient list is never edited in place: `with_added` /
//! `with_removed` return a new list that replaces the old one.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::state::disclosure::MenuEntry;
use crate::state::query::SearchQuery;

/// Key that commits the ingredient draft.
pub const COMMIT_KEY: &str = "Enter";

/// How the user expresses a recipe query.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Single free-text field.
    #[default]
    Text,
    /// Tag-style list of ingredients.
    Ingredients,
}

impl SearchMode {
    /// Every mode, in dropdown order.
    pub const ALL: [SearchMode; 2] = [SearchMode::Text, SearchMode::Ingredients];

    /// Label shown on the dropdown trigger and its items.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Search by Text",
            Self::Ingredients => "Search by Ingredients",
        }
    }

    /// Label shown above the input that the mode reveals.
    #[must_use]
    pub fn input_label(self) -> &'static str {
        match self {
            Self::Text => "Enter Your Search Text",
            Self::Ingredients => "Add Ingredients",
        }
    }

    /// Placeholder for the input that the mode reveals.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Text => "Type your search here...",
            Self::Ingredients => "Type an ingredient and press Enter",
        }
    }
}

impl MenuEntry for SearchMode {
    fn label(&self) -> &'static str {
        SearchMode::label(*self)
    }
}

/// Ordered ingredient tokens entered by the user.
///
/// Entries are trimmed and never empty. Duplicates are kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngredientList {
    items: Vec<String>,
}

impl IngredientList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Return a new list with `raw` appended after trimming.
    ///
    /// Returns `None` when the trimmed input is empty; the caller keeps its
    /// current list and draft in that case.
    #[must_use]
    pub fn with_added(&self, raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        let mut items = self.items.clone();
        items.push(trimmed.to_owned());
        Some(Self { items })
    }

    /// Return a new list without the entry at `index`.
    ///
    /// A stale index (past the end) yields an unchanged copy.
    #[must_use]
    pub fn with_removed(&self, index: usize) -> Self {
        if index >= self.items.len() {
            return self.clone();
        }
        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, item)| item.clone())
            .collect();
        Self { items }
    }
}

/// Outcome of a key press in the ingredient input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IngredientKeyOutcome {
    /// The draft was committed; swap in this list and clear the input.
    Added(IngredientList),
    /// Nothing changes; the input keeps its text.
    Ignored,
}

/// Decide what a key press in the ingredient input does.
#[must_use]
pub fn ingredient_key_outcome(list: &IngredientList, key: &str, draft: &str) -> IngredientKeyOutcome {
    if key != COMMIT_KEY {
        return IngredientKeyOutcome::Ignored;
    }
    match list.with_added(draft) {
        Some(next) => IngredientKeyOutcome::Added(next),
        None => IngredientKeyOutcome::Ignored,
    }
}

/// Everything the search card shows, owned by the card.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchCardState {
    pub mode: SearchMode,
    pub ingredients: IngredientList,
    /// Ingredient input text not yet committed.
    pub draft: String,
    /// Free-text input.
    pub query_text: String,
}

impl SearchCardState {
    /// Switch the visible input. Neither input's contents change.
    pub fn set_mode(&mut self, mode: SearchMode) {
        self.mode = mode;
    }

    /// Apply a key press from the ingredient input.
    ///
    /// Returns `true` when the draft was committed and cleared. Keys that
    /// arrive while an IME composition is open never commit.
    pub fn on_ingredient_key(&mut self, key: &str, composing: bool) -> bool {
        if composing {
            return false;
        }
        match ingredient_key_outcome(&self.ingredients, key, &self.draft) {
            IngredientKeyOutcome::Added(next) => {
                self.ingredients = next;
                self.draft.clear();
                true
            }
            IngredientKeyOutcome::Ignored => false,
        }
    }

    pub fn remove(&mut self, index: usize) {
        self.ingredients = self.ingredients.with_removed(index);
    }

    /// Query for the active mode.
    #[must_use]
    pub fn query(&self) -> SearchQuery {
        SearchQuery::from_inputs(self.mode, &self.query_text, &self.ingredients)
    }
}
