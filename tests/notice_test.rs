#![cfg(target_arch = "wasm32")]
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use hbnb_web::notice::{NoticeBanner, Notices};
use leptos::*;
use wasm_bindgen_test::*;

mod common;
use common::{mount_container, remove_container};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn test_banner_shows_latest_notice() {
    let container = mount_container("notice-container");
    let handle = Rc::new(Cell::new(None::<Notices>));

    let mounted = handle.clone();
    mount_to(container.clone(), move || {
        mounted.set(Some(Notices::provide()));
        view! { <NoticeBanner /> }
    });
    sleep(Duration::from_millis(50)).await;

    let banner = container.query_selector("#notice").unwrap().unwrap();
    assert!(banner.has_attribute("hidden"));

    let notices = handle.get().expect("notices provided during mount");
    notices.error("Error loading places.");
    sleep(Duration::from_millis(50)).await;
    assert!(!banner.has_attribute("hidden"));
    assert_eq!(banner.get_attribute("class").unwrap(), "notice error");
    assert!(banner.text_content().unwrap().contains("Error loading places."));

    notices.info("Review submitted successfully!");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(banner.get_attribute("class").unwrap(), "notice info");
    assert!(!banner.text_content().unwrap().contains("Error loading places."));

    notices.clear();
    sleep(Duration::from_millis(50)).await;
    assert!(banner.has_attribute("hidden"));

    remove_container(&container);
}
