//! Landing page: header and search card over a full-page photo.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::header::Header;
use crate::components::search_card::SearchCard;

pub const BACKGROUND_IMAGE_URL: &str = "https://images.unsplash.com/photo-1504674900247-0877df9cc836?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

/// Inline style for the page background.
pub(crate) fn background_style(url: &str) -> String {
    format!("background-image: url('{url}')")
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page" style=background_style(BACKGROUND_IMAGE_URL)>
            <Header/>
            <main class="home-page__content">
                <SearchCard/>
            </main>
        </div>
    }
}
