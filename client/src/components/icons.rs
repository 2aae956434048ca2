//! Inline SVG icons used by menus and the search card.

use leptos::prelude::*;

use crate::state::disclosure::MenuIcon;

/// Render the icon for a menu entry.
#[component]
pub fn MenuIconView(icon: MenuIcon, #[prop(into)] class: String) -> impl IntoView {
    match icon {
        MenuIcon::Google => view! { <GoogleIcon class=class/> }.into_any(),
        MenuIcon::Microsoft => view! { <MicrosoftIcon class=class/> }.into_any(),
    }
}

#[component]
pub fn GoogleIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 24 24" aria-hidden="true">
            <path
                fill="#4285F4"
                d="M22.56 12.25c0-.78-.07-1.53-.2-2.25H12v4.26h5.92c-.26 1.37-1.04 2.53-2.21 3.31v2.77h3.57c2.08-1.92 3.28-4.74 3.28-8.09z"
            ></path>
            <path
                fill="#34A853"
                d="M12 23c2.97 0 5.46-.98 7.28-2.66l-3.57-2.77c-.98.66-2.23 1.06-3.71 1.06-2.86 0-5.29-1.93-6.16-4.53H2.18v2.84C3.99 20.53 7.7 23 12 23z"
            ></path>
            <path
                fill="#FBBC05"
                d="M5.84 14.09c-.22-.66-.35-1.36-.35-2.09s.13-1.43.35-2.09V7.07H2.18C1.43 8.55 1 10.22 1 12s.43 3.45 1.18 4.93l2.85-2.22.81-.62z"
            ></path>
            <path
                fill="#EA4335"
                d="M12 5.38c1.62 0 3.06.56 4.21 1.64l3.15-3.15C17.45 2.09 14.97 1 12 1 7.7 1 3.99 3.47 2.18 7.07l3.66 2.84c.87-2.6 3.3-4.53 6.16-4.53z"
            ></path>
        </svg>
    }
}

#[component]
pub fn MicrosoftIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 23 23" aria-hidden="true">
            <rect x="1" y="1" width="10" height="10" fill="#F25022"></rect>
            <rect x="12" y="1" width="10" height="10" fill="#7FBA00"></rect>
            <rect x="1" y="12" width="10" height="10" fill="#00A4EF"></rect>
            <rect x="12" y="12" width="10" height="10" fill="#FFB900"></rect>
        </svg>
    }
}

#[component]
pub fn ChevronDownIcon(#[prop(into)] class: String) -> impl IntoView {
    view! {
        <svg class=class viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path
                fill-rule="evenodd"
                clip-rule="evenodd"
                d="M5.22 8.22a.75.75 0 0 1 1.06 0L10 11.94l3.72-3.72a.75.75 0 1 1 1.06 1.06l-4.25 4.25a.75.75 0 0 1-1.06 0L5.22 9.28a.75.75 0 0 1 0-1.06Z"
            ></path>
        </svg>
    }
}
