//! URL helpers: query parsing, link building and full-page navigation.
use leptos::logging::{error, warn};
use leptos::*;
use web_sys::UrlSearchParams;

/// Canonical query parameter carrying a place id.
pub const PLACE_ID_PARAM: &str = "place_id";
/// Older spelling still accepted on incoming URLs.
pub const DEPRECATED_PLACE_ID_PARAM: &str = "id";

/// First value of `key` in a `?a=1&b=2` query string, form-decoded by the
/// browser's `URLSearchParams`.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    UrlSearchParams::new_with_str(search).ok()?.get(key)
}

/// Place id from the query string, preferring `place_id` over the `id` alias.
pub fn place_id_from_query(search: &str) -> Option<String> {
    let params = UrlSearchParams::new_with_str(search).ok()?;
    let non_empty = |v: String| if v.is_empty() { None } else { Some(v) };

    if let Some(id) = params.get(PLACE_ID_PARAM).and_then(non_empty) {
        return Some(id);
    }
    let id = params.get(DEPRECATED_PLACE_ID_PARAM).and_then(non_empty)?;
    warn!(
        "[LOCATION] '{}' query parameter is deprecated, use '{}'",
        DEPRECATED_PLACE_ID_PARAM, PLACE_ID_PARAM
    );
    Some(id)
}

/// Link to `page` for one place, always using the canonical parameter.
pub fn place_href(page: &str, place_id: &str) -> String {
    format!("{}?{}={}", page, PLACE_ID_PARAM, urlencoding::encode(place_id))
}

pub fn current_path() -> String {
    gloo_utils::window().location().pathname().unwrap_or_default()
}

pub fn current_search() -> String {
    gloo_utils::window().location().search().unwrap_or_default()
}

/// Replaces full-page navigation for components rendered under it.
#[derive(Clone, Copy)]
pub struct Navigator(Callback<String>);

impl Navigator {
    pub fn new(navigate: impl Fn(String) + 'static) -> Self {
        Navigator(Callback::new(navigate))
    }

    pub fn provide(self) {
        provide_context(self);
    }
}

/// Navigates to `href`, through the `Navigator` in context when one was
/// provided, otherwise by loading the page.
pub fn navigate_to(href: &str) {
    if let Some(Navigator(navigate)) = use_context::<Navigator>() {
        navigate.call(href.to_string());
        return;
    }
    if let Err(err) = gloo_utils::window().location().set_href(href) {
        error!("[LOCATION] Navigation to {} failed: {:?}", href, err);
    }
}
