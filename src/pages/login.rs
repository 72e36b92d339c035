use leptos::*;
use leptos_meta::Title;
use wasm_bindgen_futures::spawn_local;

use crate::actions::{self, Action};
use crate::api::ApiClient;
use crate::components::header::Header;
use crate::components::login_form::LoginForm;
use crate::config::INDEX_PAGE;
use crate::notice::{use_notices, NoticeBanner};
use crate::session::store_token;
use crate::utils::location::navigate_to;

#[component]
pub fn LoginPage() -> impl IntoView {
    let notices = use_notices();
    let client = use_context::<ApiClient>().unwrap_or_default();

    let on_submit = Callback::new(move |(email, password): (String, String)| {
        let client = client.clone();
        notices.clear();
        spawn_local(async move {
            match actions::login(&client, &email, &password).await {
                Ok(token) => {
                    store_token(&token);
                    navigate_to(INDEX_PAGE);
                }
                Err(err) => notices.error(Action::Login.describe(&err)),
            }
        });
    });

    view! {
        <Title text="HBnB - Login" />
        <Header authenticated=false />
        <NoticeBanner />
        <main>
            <LoginForm on_submit=on_submit />
        </main>
    }
}
