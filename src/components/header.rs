use leptos::*;

use crate::config::{INDEX_PAGE, LOGIN_PAGE};

/// Site header. The login link is only offered to anonymous visitors.
#[component]
pub fn Header(authenticated: bool) -> impl IntoView {
    view! {
        <header>
            <a href=INDEX_PAGE class="logo">{ "HBnB" }</a>
            <a
                id="login-link"
                href=LOGIN_PAGE
                class="login-button"
                style:display=if authenticated { "none" } else { "block" }
            >
                { "Login" }
            </a>
        </header>
    }
}
