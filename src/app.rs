/// Application root for the HBnB front end.
/// Resolves which page is being shown once, then renders that page only.
use leptos::logging::log;
use leptos::*;
use leptos_meta::provide_meta_context;

use crate::api::ApiClient;
use crate::config::Config;
use crate::notice::Notices;
use crate::pages::{
    add_review::AddReviewPage, index::IndexPage, login::LoginPage, place::PlacePage,
};
use crate::utils::location::current_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Index,
    PlaceDetails,
    AddReview,
}

impl Page {
    /// Picks the page from the last path segment, with or without `.html`.
    /// Anything unrecognised is the listing.
    pub fn from_path(path: &str) -> Self {
        let file = path.rsplit('/').next().unwrap_or_default();
        match file.strip_suffix(".html").unwrap_or(file) {
            "login" => Page::Login,
            "place" => Page::PlaceDetails,
            "add_review" => Page::AddReview,
            _ => Page::Index,
        }
    }
}

#[component]
pub fn App(#[prop(optional)] page: Option<Page>) -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new(Config::from_env()));
    Notices::provide();

    let page = page.unwrap_or_else(|| Page::from_path(&current_path()));
    log!("[APP] Rendering {:?}", page);

    match page {
        Page::Login => view! { <LoginPage /> }.into_view(),
        Page::Index => view! { <IndexPage /> }.into_view(),
        Page::PlaceDetails => view! { <PlacePage /> }.into_view(),
        Page::AddReview => view! { <AddReviewPage /> }.into_view(),
    }
}
