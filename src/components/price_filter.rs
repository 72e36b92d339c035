use leptos::logging::warn;
use leptos::*;

/// Values offered by the `#price-filter` select, in display order.
pub const PRICE_OPTIONS: [&str; 4] = ["All", "10", "50", "100"];

/// Maximum nightly price a card may have to stay visible.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PriceFilter {
    #[default]
    All,
    Max(f64),
}

impl PriceFilter {
    /// Parses a select value. Unrecognised input means no filtering.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            return PriceFilter::All;
        }
        match value.parse::<f64>() {
            Ok(max) if !max.is_nan() => PriceFilter::Max(max),
            _ => {
                warn!("[FILTER] Unrecognised price filter {:?}, showing all", value);
                PriceFilter::All
            }
        }
    }

    /// Whether a card with this price is shown. Unknown prices only pass `All`.
    pub fn admits(&self, price: Option<f64>) -> bool {
        match self {
            PriceFilter::All => true,
            PriceFilter::Max(max) => price.is_some_and(|price| price <= *max),
        }
    }
}

#[component]
pub fn PriceFilterSelect(filter: RwSignal<PriceFilter>) -> impl IntoView {
    view! {
        <label for="price-filter">{ "Max price:" }</label>
        <select
            id="price-filter"
            on:change=move |ev| filter.set(PriceFilter::parse(&event_target_value(&ev)))
        >
            {PRICE_OPTIONS
                .iter()
                .map(|option| view! { <option value=*option>{ *option }</option> })
                .collect::<Vec<_>>()}
        </select>
    }
}
