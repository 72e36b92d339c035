use leptos::*;
use leptos_meta::Title;
use wasm_bindgen_futures::spawn_local;

use crate::actions::{self, Action};
use crate::api::ApiClient;
use crate::components::header::Header;
use crate::components::places_list::PlacesList;
use crate::components::price_filter::{PriceFilter, PriceFilterSelect};
use crate::models::place::Place;
use crate::notice::{use_notices, NoticeBanner};
use crate::session::get_token;

/// Listing page. Places are only fetched for a logged-in visitor.
#[component]
pub fn IndexPage() -> impl IntoView {
    let notices = use_notices();
    let client = use_context::<ApiClient>().unwrap_or_default();
    let token = get_token();
    let authenticated = token.is_some();

    let (places, set_places) = create_signal(Vec::<Place>::new());
    let filter = create_rw_signal(PriceFilter::All);

    if authenticated {
        spawn_local(async move {
            match actions::load_places(&client, token.as_deref()).await {
                Ok(loaded) => set_places.set(loaded),
                Err(err) => notices.error(Action::LoadPlaces.describe(&err)),
            }
        });
    }

    view! {
        <Title text="HBnB - Places" />
        <Header authenticated=authenticated />
        <NoticeBanner />
        <main>
            <section id="filter">
                <PriceFilterSelect filter=filter />
            </section>
            <PlacesList places=places filter=filter />
        </main>
    }
}
