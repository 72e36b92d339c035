#![allow(dead_code)]
use hbnb_web::models::place::Place;
use hbnb_web::models::review::Review;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Appends a fresh container to the body for one test to mount into.
pub fn mount_container(id: &str) -> HtmlElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    container.set_id(id);
    document.body().unwrap().append_child(&container).unwrap();
    container.unchecked_into::<HtmlElement>()
}

pub fn remove_container(container: &HtmlElement) {
    let document = web_sys::window().unwrap().document().unwrap();
    document.body().unwrap().remove_child(container).unwrap();
}

/// Elements under `container` matching `selector`, in document order.
pub fn select_all(container: &HtmlElement, selector: &str) -> Vec<HtmlElement> {
    let nodes = container.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.unchecked_into::<HtmlElement>())
        .collect()
}

pub fn display_of(element: &HtmlElement) -> String {
    element.style().get_property_value("display").unwrap()
}

pub fn place(id: &str, name: &str, price: f64) -> Place {
    Place {
        id: id.into(),
        name: Some(name.into()),
        price_per_night: Some(price),
        ..Default::default()
    }
}

pub fn review(user: Option<&str>, comment: &str, rating: Option<u8>) -> Review {
    Review {
        user: user.map(str::to_string),
        comment: Some(comment.into()),
        rating,
    }
}

fn html_document() -> web_sys::HtmlDocument {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .unchecked_into::<web_sys::HtmlDocument>()
}

pub fn set_cookie(cookie: &str) {
    html_document().set_cookie(cookie).unwrap();
}

pub fn cookie_header() -> String {
    html_document().cookie().unwrap()
}

pub fn clear_token() {
    set_cookie("token=; path=/; max-age=0");
}

/// Swaps the query string of the test page without reloading it.
pub fn set_search(search: &str) {
    let window = web_sys::window().unwrap();
    let path = window.location().pathname().unwrap();
    window
        .history()
        .unwrap()
        .replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&format!("{}{}", path, search)))
        .unwrap();
}
