//! Tag list of entered ingredients, each with a remove button.

use leptos::prelude::*;

use crate::state::search::IngredientList;

/// Renders `ingredients` in insertion order. `on_remove` receives the index
/// of the clicked tag.
#[component]
pub fn IngredientTags(ingredients: Signal<IngredientList>, on_remove: Callback<usize>) -> impl IntoView {
    view! {
        <div class="ingredients" class:ingredients--empty=move || ingredients.with(IngredientList::is_empty)>
            {move || {
                ingredients
                    .get()
                    .items()
                    .iter()
                    .enumerate()
                    .map(|(index, ingredient)| {
                        view! {
                            <div class="ingredients__item">
                                <span class="ingredients__text">{ingredient.clone()}</span>
                                <button
                                    type="button"
                                    class="ingredients__remove"
                                    title=format!("Remove {ingredient}")
                                    on:click=move |_| on_remove.run(index)
                                >
                                    "✖"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
