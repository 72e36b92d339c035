use leptos::*;
use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    let body = if reviews.is_empty() {
        view! { <p>{ "No reviews yet." }</p> }.into_view()
    } else {
        reviews
            .into_iter()
            .map(|review| view! { <ReviewCard review=review /> })
            .collect::<Vec<_>>()
            .into_view()
    };

    view! {
        <h3>{ "Reviews" }</h3>
        {body}
    }
}

#[component]
pub fn ReviewCard(review: Review) -> impl IntoView {
    let author = review.user.unwrap_or_else(|| "Anonymous".to_string());
    let rating = review
        .rating
        .map(|r| r.to_string())
        .unwrap_or_else(|| "-".to_string());

    view! {
        <div class="review-card">
            <p><strong>{ format!("{}:", author) }</strong>{ " " }{ review.comment.unwrap_or_default() }</p>
            <p>{ format!("Rating: {} / 5", rating) }</p>
        </div>
    }
}
