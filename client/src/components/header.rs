//! Top bar with the product title and the profile / sign-in menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sign-in is not wired to any identity provider yet. Choosing a provider
//! only logs the request and closes the menu.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::components::disclosure::Disclosure;
use crate::state::disclosure::{MenuEntry, MenuIcon};

pub const TITLE: &str = "Dishcovery";

/// Identity providers offered in the profile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SignInProvider {
    Google,
    Microsoft,
}

impl SignInProvider {
    /// Menu order.
    pub const ALL: [SignInProvider; 2] = [SignInProvider::Google, SignInProvider::Microsoft];
}

impl MenuEntry for SignInProvider {
    fn label(&self) -> &'static str {
        match self {
            Self::Google => "Sign in with Google",
            Self::Microsoft => "Sign in with Microsoft",
        }
    }

    fn icon(&self) -> Option<MenuIcon> {
        Some(match self {
            Self::Google => MenuIcon::Google,
            Self::Microsoft => MenuIcon::Microsoft,
        })
    }
}

#[component]
pub fn Header() -> impl IntoView {
    let on_sign_in = Callback::new(|provider: SignInProvider| {
        log::info!("sign-in requested: provider={provider:?}");
    });

    view! {
        <header class="header">
            <div class="header__inner">
                <h1 class="header__title">{TITLE}</h1>
                <Disclosure
                    items=SignInProvider::ALL.to_vec()
                    on_select=on_sign_in
                    class="disclosure header__menu"
                    button_class="header__menu-button"
                    items_class="disclosure__items header__menu-items"
                >
                    "Profile / Sign In"
                </Disclosure>
            </div>
        </header>
    }
}
