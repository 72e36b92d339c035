#[cfg(feature = "csr")]
pub fn main() {
    // to run: `trunk serve --open`
    use hbnb_web::app::App;
    use leptos::*;

    console_error_panic_hook::set_once();
    hbnb_web::utils::panic_hook::init();

    mount_to_body(|| view! { <App /> });
}

#[cfg(not(feature = "csr"))]
pub fn main() {
    // no client-side entry point without `csr`
}
