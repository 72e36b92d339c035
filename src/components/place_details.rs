use leptos::*;

use crate::models::place::{Place, PLACEHOLDER};

/// Fixed-layout summary of one place. Missing fields show a placeholder.
#[component]
pub fn PlaceDetails(place: Place) -> impl IntoView {
    let or_placeholder = |value: Option<String>| value.unwrap_or_else(|| PLACEHOLDER.to_string());
    let name = place.display_name().to_string();
    let price = format!("${}", place.price_text());
    let amenities = place.amenities_text();

    view! {
        <h2>{ name }</h2>
        <div class="place-info">
            <p class="host"><strong>{ "Host:" }</strong>{ " " }{ or_placeholder(place.host) }</p>
            <p class="price"><strong>{ "Price:" }</strong>{ " " }{ price }</p>
            <p class="description"><strong>{ "Description:" }</strong>{ " " }{ or_placeholder(place.description) }</p>
            <p class="amenities"><strong>{ "Amenities:" }</strong>{ " " }{ amenities }</p>
        </div>
    }
}
