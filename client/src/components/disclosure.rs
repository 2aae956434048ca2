//! Generic dropdown menu: a trigger button that reveals selectable items.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the header's sign-in menu and the search card's mode selector.
//! Open/closed and active-item tracking live in `DisclosureState`; this
//! component only wires DOM events to those transitions and hands the chosen
//! item to `on_select`.

#[cfg(test)]
#[path = "disclosure_test.rs"]
mod disclosure_test;

use leptos::prelude::*;

use crate::components::icons::MenuIconView;
use crate::state::disclosure::{DisclosureAction, DisclosureState, MenuEntry, MenuIcon};

/// Class list for one item, adding the `--active` modifier when highlighted.
pub(crate) fn item_class_for(base: &str, active: bool) -> String {
    if active { format!("{base} {base}--active") } else { base.to_owned() }
}

/// Dropdown menu over any `MenuEntry` item type.
///
/// `children` renders inside the trigger button. Choosing an item closes the
/// menu before `on_select` runs.
#[component]
pub fn Disclosure<T>(
    items: Vec<T>,
    on_select: Callback<T>,
    #[prop(into, default = "disclosure".to_owned())] class: String,
    #[prop(into, default = "disclosure__button".to_owned())] button_class: String,
    #[prop(into, default = "disclosure__items".to_owned())] items_class: String,
    #[prop(into, default = "disclosure__item".to_owned())] item_class: String,
    children: Children,
) -> impl IntoView
where
    T: MenuEntry + Clone + Send + Sync + 'static,
{
    let state = RwSignal::new(DisclosureState::default());
    let len = items.len();
    let entries: Vec<(usize, &'static str, Option<MenuIcon>)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| (index, item.label(), item.icon()))
        .collect();
    let items = StoredValue::new(items);

    let emit = move |index: usize| {
        if let Some(item) = items.with_value(|items| items.get(index).cloned()) {
            on_select.run(item);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match state.try_update(|s| s.on_key(&ev.key(), len)) {
        Some(DisclosureAction::Select(index)) => {
            ev.prevent_default();
            emit(index);
        }
        Some(DisclosureAction::Update) => ev.prevent_default(),
        Some(DisclosureAction::None) | None => {}
    };

    view! {
        <div class=class on:keydown=on_keydown>
            <button
                type="button"
                class=button_class
                aria-haspopup="menu"
                aria-expanded=move || if state.get().open { "true" } else { "false" }
                on:click=move |_| state.update(DisclosureState::toggle)
            >
                {children()}
            </button>
            <Show when=move || state.get().open>
                <div class="disclosure__backdrop" on:click=move |_| state.update(DisclosureState::close)></div>
                <div class=items_class.clone() role="menu">
                    {entries
                        .iter()
                        .map(|&(index, label, icon)| {
                            let base = item_class.clone();
                            view! {
                                <button
                                    type="button"
                                    role="menuitem"
                                    class=move || item_class_for(&base, state.get().active == Some(index))
                                    on:mouseenter=move |_| state.update(|s| s.hover(index, len))
                                    on:click=move |_| {
                                        if let Some(DisclosureAction::Select(chosen)) = state.try_update(|s| s.select(index, len)) {
                                            emit(chosen);
                                        }
                                    }
                                >
                                    {icon.map(|icon| view! { <MenuIconView icon=icon class="disclosure__icon"/> })}
                                    {label}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
