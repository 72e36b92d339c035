#![cfg(target_arch = "wasm32")]
use std::time::Duration;

use gloo_timers::future::sleep;
use hbnb_web::components::place_details::PlaceDetails;
use hbnb_web::components::reviews_list::ReviewsList;
use hbnb_web::models::place::Place;
use leptos::*;
use wasm_bindgen_test::*;

mod common;
use common::{mount_container, remove_container, review, select_all};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_missing_fields_render_placeholders() {
    let container = mount_container("details-placeholder-container");
    let place = Place {
        id: "42".into(),
        ..Default::default()
    };

    mount_to(container.clone(), move || view! { <PlaceDetails place=place /> });
    sleep(Duration::from_millis(50)).await;

    let heading = container.query_selector("h2").unwrap().unwrap();
    assert_eq!(heading.text_content().unwrap(), "Place");

    let text = container.text_content().unwrap();
    assert!(text.contains("Host: —"), "{}", text);
    assert!(text.contains("Price: $—"), "{}", text);
    assert!(text.contains("Description: —"), "{}", text);
    assert!(text.contains("Amenities: No amenities listed"), "{}", text);

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn test_full_record_renders_fields() {
    let container = mount_container("details-full-container");
    let place = Place {
        id: "42".into(),
        name: Some("Seaside Loft".into()),
        host: Some("Ada Lovelace".into()),
        price_per_night: Some(120.0),
        description: Some("Two rooms by the water".into()),
        amenities: vec!["wifi".into(), "parking".into()],
        reviews: Vec::new(),
    };

    mount_to(container.clone(), move || view! { <PlaceDetails place=place /> });
    sleep(Duration::from_millis(50)).await;

    let text = container.text_content().unwrap();
    assert!(text.contains("Seaside Loft"));
    assert!(text.contains("Host: Ada Lovelace"));
    assert!(text.contains("Price: $120"));
    assert!(text.contains("Amenities: wifi, parking"));

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn test_no_reviews_placeholder() {
    let container = mount_container("reviews-empty-container");

    mount_to(container.clone(), move || view! { <ReviewsList reviews=Vec::new() /> });
    sleep(Duration::from_millis(50)).await;

    assert!(select_all(&container, ".review-card").is_empty());
    let text = container.text_content().unwrap();
    assert!(text.contains("Reviews"));
    assert!(text.contains("No reviews yet."));

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn test_reviews_render_in_order_with_fallbacks() {
    let container = mount_container("reviews-container");
    let reviews = vec![
        review(Some("Bob"), "Lovely view", Some(5)),
        review(None, "Too noisy", None),
    ];

    mount_to(container.clone(), move || view! { <ReviewsList reviews=reviews /> });
    sleep(Duration::from_millis(50)).await;

    let cards = select_all(&container, ".review-card");
    assert_eq!(cards.len(), 2);

    let first = cards[0].text_content().unwrap();
    assert!(first.contains("Bob: Lovely view"), "{}", first);
    assert!(first.contains("Rating: 5 / 5"), "{}", first);

    let second = cards[1].text_content().unwrap();
    assert!(second.contains("Anonymous: Too noisy"), "{}", second);
    assert!(second.contains("Rating: - / 5"), "{}", second);
    assert!(!container.text_content().unwrap().contains("No reviews yet."));

    remove_container(&container);
}
