use leptos::html::Form;
use leptos::*;
use leptos_meta::Title;
use wasm_bindgen_futures::spawn_local;

use crate::actions::{self, Action, REVIEW_SUBMITTED};
use crate::api::ApiClient;
use crate::components::header::Header;
use crate::components::review_form::ReviewForm;
use crate::error::ClientError;
use crate::notice::{use_notices, NoticeBanner};
use crate::session::require_token_or_redirect;
use crate::utils::location::{current_search, place_id_from_query};

#[component]
pub fn AddReviewPage() -> impl IntoView {
    let Some(token) = require_token_or_redirect() else {
        // Navigation to the landing page is already under way.
        return ().into_view();
    };

    let notices = use_notices();
    let client = use_context::<ApiClient>().unwrap_or_default();
    let place_id = place_id_from_query(&current_search());
    if place_id.is_none() {
        notices.error(Action::SubmitReview.describe(&ClientError::MissingPlaceId));
    }

    let form_ref = create_node_ref::<Form>();

    let on_submit = Callback::new(move |(comment, rating): (String, String)| {
        let Some(place_id) = place_id.clone() else {
            notices.error(Action::SubmitReview.describe(&ClientError::MissingPlaceId));
            return;
        };
        let token = token.clone();
        let client = client.clone();
        notices.clear();
        spawn_local(async move {
            match actions::submit_review(&client, &token, &place_id, &comment, &rating).await {
                Ok(()) => {
                    notices.info(REVIEW_SUBMITTED);
                    if let Some(form) = form_ref.get_untracked() {
                        form.reset();
                    }
                }
                Err(err) => notices.error(Action::SubmitReview.describe(&err)),
            }
        });
    });

    view! {
        <Title text="HBnB - Add Review" />
        <Header authenticated=true />
        <NoticeBanner />
        <main>
            <section id="add-review">
                <h2>{ "Add a review" }</h2>
                <ReviewForm on_submit=on_submit form_ref=form_ref />
            </section>
        </main>
    }
    .into_view()
}
