//! Access to the bearer token kept in the `token` cookie.
use leptos::logging::{error, log};
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::config::{INDEX_PAGE, TOKEN_COOKIE, TOKEN_MAX_AGE_SECS};
use crate::utils::location::navigate_to;

/// Finds `name` in a `document.cookie` style header.
///
/// Matches the cookie name exactly, so `xtoken=` never satisfies `token`.
/// An empty value counts as unset.
pub fn parse_cookie(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
        .filter(|value| !value.is_empty())
}

/// The `Set-Cookie` style string written after a successful login.
pub fn token_cookie(token: &str) -> String {
    format!(
        "{}={}; path=/; max-age={}; Secure",
        TOKEN_COOKIE,
        urlencoding::encode(token),
        TOKEN_MAX_AGE_SECS
    )
}

fn html_document() -> Option<HtmlDocument> {
    gloo_utils::document().dyn_into::<HtmlDocument>().ok()
}

pub fn get_token() -> Option<String> {
    let header = html_document()?.cookie().ok()?;
    parse_cookie(&header, TOKEN_COOKIE)
}

pub fn store_token(token: &str) {
    let Some(document) = html_document() else {
        error!("[SESSION] Document is not an HTML document, token not stored");
        return;
    };
    if let Err(err) = document.set_cookie(&token_cookie(token)) {
        error!("[SESSION] Failed to write token cookie: {:?}", err);
    }
}

/// Returns the token, or starts a redirect to the landing page and returns
/// `None`. Callers must stop on `None`.
pub fn require_token_or_redirect() -> Option<String> {
    let token = get_token();
    if token.is_none() {
        log!("[SESSION] No token, redirecting to {}", INDEX_PAGE);
        navigate_to(INDEX_PAGE);
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let header = "theme=dark; token=abc123; lang=en";
        assert_eq!(parse_cookie(header, "token"), Some("abc123".to_string()));
        assert_eq!(parse_cookie("token=first", "token"), Some("first".to_string()));
    }

    #[test]
    fn absent_or_empty_token_is_none() {
        assert_eq!(parse_cookie("", "token"), None);
        assert_eq!(parse_cookie("theme=dark", "token"), None);
        assert_eq!(parse_cookie("token=; theme=dark", "token"), None);
    }

    #[test]
    fn name_must_match_exactly() {
        assert_eq!(parse_cookie("xtoken=nope", "token"), None);
        assert_eq!(
            parse_cookie("xtoken=nope; token=yes", "token"),
            Some("yes".to_string())
        );
    }

    #[test]
    fn jwt_values_keep_their_padding_and_dots() {
        let jwt = "eyJhbGciOi.eyJzdWIiOiIxIn0.sig-_";
        let header = format!("token={}", jwt);
        assert_eq!(parse_cookie(&header, "token").as_deref(), Some(jwt));
    }

    #[test]
    fn token_cookie_carries_lifetime_path_and_secure_flag() {
        assert_eq!(
            token_cookie("abc123"),
            "token=abc123; path=/; max-age=86400; Secure"
        );
    }

    #[test]
    fn cookie_value_round_trips_through_encoding() {
        let written = token_cookie("a b;c");
        let value = written.split(';').next().unwrap();
        assert_eq!(parse_cookie(value, "token"), Some("a b;c".to_string()));
    }
}
