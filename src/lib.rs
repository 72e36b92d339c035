pub mod actions;
pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod notice;
pub mod session;

pub mod components {
    pub mod header;
    pub mod login_form;
    pub mod place_details;
    pub mod places_list;
    pub mod price_filter;
    pub mod review_form;
    pub mod reviews_list;
}

pub mod models {
    pub mod auth;
    pub mod place;
    pub mod review;
}

pub mod pages {
    pub mod add_review;
    pub mod index;
    pub mod login;
    pub mod place;
}

pub mod utils {
    pub mod location;
    pub mod panic_hook;
}
