use leptos::*;
use leptos_meta::Title;
use wasm_bindgen_futures::spawn_local;

use crate::actions::{self, Action};
use crate::api::ApiClient;
use crate::components::header::Header;
use crate::components::place_details::PlaceDetails;
use crate::components::reviews_list::ReviewsList;
use crate::config::ADD_REVIEW_PAGE;
use crate::models::place::Place;
use crate::notice::{use_notices, NoticeBanner};
use crate::session::get_token;
use crate::utils::location::{current_search, place_href, place_id_from_query};

/// Place details and reviews are public; adding a review needs a login.
#[component]
pub fn PlacePage() -> impl IntoView {
    let notices = use_notices();
    let client = use_context::<ApiClient>().unwrap_or_default();
    let token = get_token();
    let authenticated = token.is_some();
    let place_id = place_id_from_query(&current_search());

    let add_review_href = place_id
        .as_deref()
        .map(|id| place_href(ADD_REVIEW_PAGE, id))
        .unwrap_or_else(|| ADD_REVIEW_PAGE.to_string());

    let (place, set_place) = create_signal(None::<Place>);

    spawn_local(async move {
        match actions::load_place(&client, token.as_deref(), place_id.as_deref()).await {
            Ok(loaded) => set_place.set(Some(loaded)),
            Err(err) => notices.error(Action::LoadPlace.describe(&err)),
        }
    });

    view! {
        <Title text="HBnB - Place" />
        <Header authenticated=authenticated />
        <NoticeBanner />
        <main>
            <section id="place-details">
                {move || place.get().map(|p| view! { <PlaceDetails place=p /> })}
            </section>
            <section id="reviews">
                {move || place.get().map(|p| view! { <ReviewsList reviews=p.reviews /> })}
            </section>
            <section id="add-review" style:display=if authenticated { "block" } else { "none" }>
                <a id="add-review-link" href=add_review_href class="details-button">{ "Add a review" }</a>
            </section>
        </main>
    }
}
