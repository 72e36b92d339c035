//! User actions, independent of the DOM.
//!
//! Each function validates its input, decides whether a request is issued at
//! all, and returns a typed result that the page components turn into a
//! notice with [`Action::describe`].
use leptos::logging::{error, log};

use crate::api::Backend;
use crate::error::ClientError;
use crate::models::auth::Credentials;
use crate::models::place::Place;
use crate::models::review::NewReview;

pub const MISSING_CREDENTIALS: &str = "Please enter both email and password.";
pub const MISSING_REVIEW_FIELDS: &str = "Please enter both a comment and a rating.";
pub const REVIEW_SUBMITTED: &str = "Review submitted successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Login,
    LoadPlaces,
    LoadPlace,
    SubmitReview,
}

impl Action {
    /// User-facing text for a failed action.
    pub fn describe(self, err: &ClientError) -> String {
        match (self, err) {
            (_, ClientError::Validation(message)) => message.clone(),
            (_, ClientError::MissingPlaceId) => "Missing place ID.".to_string(),
            (Action::Login, ClientError::Http { .. }) => {
                "Login failed. Please check your credentials.".to_string()
            }
            (Action::Login, ClientError::MissingToken) => "No token received.".to_string(),
            (Action::Login, _) => "An error occurred. Please try again later.".to_string(),
            (Action::LoadPlaces, _) => "Error loading places.".to_string(),
            (Action::LoadPlace, _) => "Error loading place details.".to_string(),
            (Action::SubmitReview, ClientError::Http { .. }) => format!(
                "Failed to submit review: {}",
                err.server_reason().unwrap_or_default()
            ),
            (Action::SubmitReview, _) => {
                "An error occurred while submitting the review.".to_string()
            }
        }
    }
}

/// Logs in and returns the access token. Blank fields never reach the server.
pub async fn login<B: Backend>(
    backend: &B,
    email: &str,
    password: &str,
) -> Result<String, ClientError> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err(ClientError::Validation(MISSING_CREDENTIALS.to_string()));
    }

    let credentials = Credentials {
        email: email.to_string(),
        password: password.to_string(),
    };
    let response = backend.login(&credentials).await.map_err(|err| {
        error!("[LOGIN] Login error: {}", err);
        err
    })?;

    match response.access_token.filter(|t| !t.is_empty()) {
        Some(token) => {
            log!("[LOGIN] Logged in as {}", email);
            Ok(token)
        }
        None => Err(ClientError::MissingToken),
    }
}

/// Places are only listed for a logged-in user; without a token the list is
/// empty and no request is made.
pub async fn load_places<B: Backend>(
    backend: &B,
    token: Option<&str>,
) -> Result<Vec<Place>, ClientError> {
    let Some(token) = token else {
        return Ok(Vec::new());
    };
    backend.places(token).await.map_err(|err| {
        error!("[PLACES] {}", err);
        err
    })
}

/// Place details are public; the token is only forwarded when present.
pub async fn load_place<B: Backend>(
    backend: &B,
    token: Option<&str>,
    place_id: Option<&str>,
) -> Result<Place, ClientError> {
    let place_id = place_id.ok_or(ClientError::MissingPlaceId)?;
    backend.place(token, place_id).await.map_err(|err| {
        error!("[PLACE] {}", err);
        err
    })
}

/// A rating is usable when it is an integer from 1 to 5.
pub fn parse_rating(raw: &str) -> Option<u8> {
    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|rating| (1..=5).contains(rating))
}

/// Posts a review. Needs a non-blank comment and a usable rating, otherwise
/// nothing is sent.
pub async fn submit_review<B: Backend>(
    backend: &B,
    token: &str,
    place_id: &str,
    comment: &str,
    rating: &str,
) -> Result<(), ClientError> {
    let comment = comment.trim();
    let rating = match parse_rating(rating) {
        Some(rating) if !comment.is_empty() => rating,
        _ => return Err(ClientError::Validation(MISSING_REVIEW_FIELDS.to_string())),
    };
    if place_id.is_empty() {
        return Err(ClientError::MissingPlaceId);
    }

    let review = NewReview {
        comment: comment.to_string(),
        rating,
    };
    backend
        .submit_review(token, place_id, &review)
        .await
        .map_err(|err| {
            error!("[REVIEW] Error submitting review: {}", err);
            err
        })?;
    log!("[REVIEW] Review for place {} submitted", place_id);
    Ok(())
}
