//! Search card: mode selector, the input for that mode, and the search button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The card owns all search state. The mode and ingredient list survive each
//! other's changes: switching to text mode hides the ingredient tags without
//! clearing them.

use leptos::prelude::*;

use crate::components::disclosure::Disclosure;
use crate::components::icons::ChevronDownIcon;
use crate::components::ingredient_tags::IngredientTags;
use crate::state::search::{SearchCardState, SearchMode};

#[component]
pub fn SearchCard() -> impl IntoView {
    let card = RwSignal::new(SearchCardState::default());
    let mode = Memo::new(move |_| card.with(|c| c.mode));
    let ingredients = Memo::new(move |_| card.with(|c| c.ingredients.clone()));

    let on_mode_select = Callback::new(move |next: SearchMode| card.update(|c| c.set_mode(next)));

    let on_ingredient_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let committed = card
            .try_update(|c| c.on_ingredient_key(&ev.key(), ev.is_composing()))
            .unwrap_or(false);
        if committed {
            ev.prevent_default();
        }
    };

    let on_remove = Callback::new(move |index: usize| card.update(|c| c.remove(index)));

    let on_search = move |_| {
        let query = card.with_untracked(SearchCardState::query);
        if query.is_empty() {
            log::debug!("search skipped: empty {:?} query", query.mode());
            return;
        }
        match serde_json::to_string(&query) {
            Ok(body) => log::debug!("search requested: mode={:?} {body}", query.mode()),
            Err(e) => log::warn!("search query encode failed: {e}"),
        }
    };

    view! {
        <div class="search-card">
            <div class="search-card__section">
                <span class="search-card__label">"Search Type"</span>
                <Disclosure
                    items=SearchMode::ALL.to_vec()
                    on_select=on_mode_select
                    class="disclosure search-card__mode"
                    button_class="search-card__mode-button"
                >
                    {move || mode.get().label()}
                    <ChevronDownIcon class="search-card__chevron"/>
                </Disclosure>
            </div>

            {move || match mode.get() {
                SearchMode::Ingredients => view! {
                    <div class="search-card__section">
                        <label class="search-card__label">{SearchMode::Ingredients.input_label()}</label>
                        <input
                            class="search-card__input"
                            type="text"
                            placeholder=SearchMode::Ingredients.placeholder()
                            prop:value=move || card.with(|c| c.draft.clone())
                            on:input=move |ev| card.update(|c| c.draft = event_target_value(&ev))
                            on:keydown=on_ingredient_keydown
                        />
                        <IngredientTags ingredients=ingredients.into() on_remove=on_remove/>
                    </div>
                }
                .into_any(),
                SearchMode::Text => view! {
                    <div class="search-card__section">
                        <label class="search-card__label">{SearchMode::Text.input_label()}</label>
                        <input
                            class="search-card__input"
                            type="text"
                            placeholder=SearchMode::Text.placeholder()
                            prop:value=move || card.with(|c| c.query_text.clone())
                            on:input=move |ev| card.update(|c| c.query_text = event_target_value(&ev))
                        />
                    </div>
                }
                .into_any(),
            }}

            <div class="search-card__actions">
                <button type="button" class="search-card__submit" on:click=on_search>
                    "Search Recipes"
                </button>
            </div>
        </div>
    }
}
