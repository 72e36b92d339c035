use leptos::html::{Form, Select, Textarea};
use leptos::*;
use leptos::ev::SubmitEvent;

/// Review form. Values are read from the fields at submit time so that
/// `form_ref.reset()` from the caller clears everything.
#[component]
pub fn ReviewForm(
    on_submit: Callback<(String, String)>,
    form_ref: NodeRef<Form>,
) -> impl IntoView {
    let comment_ref = create_node_ref::<Textarea>();
    let rating_ref = create_node_ref::<Select>();

    let submit_review = move |ev: SubmitEvent| {
        ev.prevent_default();
        let comment = comment_ref.get().map(|c| c.value()).unwrap_or_default();
        let rating = rating_ref.get().map(|r| r.value()).unwrap_or_default();
        on_submit.call((comment, rating));
    };

    view! {
        <form id="review-form" node_ref=form_ref on:submit=submit_review>
            <label for="comment">{ "Your review" }</label>
            <textarea id="comment" name="comment" placeholder="Write your review here" node_ref=comment_ref />
            <label for="rating">{ "Rating" }</label>
            <select id="rating" name="rating" node_ref=rating_ref>
                <option value="">{ "Select a rating" }</option>
                {(1..=5).map(|r| view! { <option value=r.to_string()>{ r }</option> }).collect::<Vec<_>>()}
            </select>
            <button type="submit">{ "Submit Review" }</button>
        </form>
    }
}
