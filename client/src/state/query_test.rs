use super::*;

fn list_of(items: &[&str]) -> IngredientList {
    items.iter().fold(IngredientList::new(), |list, item| match list.with_added(item) {
        Some(next) => next,
        None => list,
    })
}

#[test]
fn query_terms_lowercases_and_strips_punctuation() {
    assert_eq!(query_terms("Spicy Chicken-Curry, please!"), ["spicy", "chickencurry", "please"]);
}

#[test]
fn query_terms_keeps_digits() {
    assert_eq!(query_terms("30 minute meals"), ["30", "minute", "meals"]);
}

#[test]
fn query_terms_drops_non_ascii_letters() {
    assert_eq!(query_terms("crème brûlée"), ["crme", "brle"]);
}

#[test]
fn query_terms_uses_full_unicode_lowercase() {
    // U+212A KELVIN SIGN lowercases to ASCII `k`.
    assert_eq!(query_terms("\u{212A}ale SALAD"), ["kale", "salad"]);
}

#[test]
fn query_terms_blank_is_empty() {
    assert!(query_terms("   ").is_empty());
    assert!(query_terms("?!").is_empty());
}

#[test]
fn text_mode_reads_only_free_text() {
    let ingredients = list_of(&["egg"]);
    let query = SearchQuery::from_inputs(SearchMode::Text, "Pad Thai", &ingredients);
    assert_eq!(
        query,
        SearchQuery::Text { raw: "Pad Thai".to_owned(), terms: vec!["pad".to_owned(), "thai".to_owned()] }
    );
    assert_eq!(query.mode(), SearchMode::Text);
}

#[test]
fn ingredients_mode_reads_only_list() {
    let ingredients = list_of(&["egg", "milk"]);
    let query = SearchQuery::from_inputs(SearchMode::Ingredients, "ignored", &ingredients);
    assert_eq!(
        query,
        SearchQuery::Ingredients { ingredients: vec!["egg".to_owned(), "milk".to_owned()] }
    );
    assert_eq!(query.mode(), SearchMode::Ingredients);
}

#[test]
fn is_empty_tracks_active_input() {
    let empty = IngredientList::new();
    assert!(SearchQuery::from_inputs(SearchMode::Text, " ... ", &empty).is_empty());
    assert!(SearchQuery::from_inputs(SearchMode::Ingredients, "pasta", &empty).is_empty());
    assert!(!SearchQuery::from_inputs(SearchMode::Text, "pasta", &empty).is_empty());
}

#[test]
fn text_query_serializes_with_mode_tag() {
    let query = SearchQuery::from_inputs(SearchMode::Text, "Tomato Soup", &IngredientList::new());
    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        serde_json::json!({ "mode": "text", "raw": "Tomato Soup", "terms": ["tomato", "soup"] })
    );
}

#[test]
fn ingredients_query_serializes_with_mode_tag() {
    let ingredients = list_of(&["egg", "milk"]);
    let query = SearchQuery::from_inputs(SearchMode::Ingredients, "", &ingredients);
    assert_eq!(
        serde_json::to_value(&query).unwrap(),
        serde_json::json!({ "mode": "ingredients", "ingredients": ["egg", "milk"] })
    );
}
