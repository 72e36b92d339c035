/// Cards for the places listing.
/// Every card keeps its price in `data-price`; filtering only toggles
/// visibility, the cards themselves stay in the DOM.
use leptos::*;

use crate::components::price_filter::PriceFilter;
use crate::config::PLACE_PAGE;
use crate::models::place::Place;
use crate::utils::location::place_href;

#[component]
pub fn PlacesList(
    #[prop(into)] places: Signal<Vec<Place>>,
    #[prop(into)] filter: Signal<PriceFilter>,
) -> impl IntoView {
    view! {
        <section id="places-list">
            {move || places.get().into_iter().map(|place| view! {
                <PlaceCard place=place filter=filter />
            }).collect::<Vec<_>>()}
        </section>
    }
}

#[component]
pub fn PlaceCard(place: Place, filter: Signal<PriceFilter>) -> impl IntoView {
    let price = place.price_per_night;
    let data_price = price.map(|p| p.to_string()).unwrap_or_default();
    let display = move || if filter.get().admits(price) { "block" } else { "none" };

    view! {
        <div class="place-card" data-price=data_price style:display=display>
            <h3>{ place.display_name().to_string() }</h3>
            <p>{ format!("Price per night: ${}", place.price_text()) }</p>
            <a href=place_href(PLACE_PAGE, &place.id) class="details-button">{ "View Details" }</a>
        </div>
    }
}
