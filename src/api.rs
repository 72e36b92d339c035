use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::{error, log};

use crate::config::Config;
use crate::error::ClientError;
use crate::models::auth::{Credentials, ErrorBody, LoginResponse};
use crate::models::place::{decode_place_list, Place};
use crate::models::review::NewReview;

/// The REST backend as seen by the page logic.
///
/// `ApiClient` talks to the real server; tests substitute a recording mock.
#[allow(async_fn_in_trait)]
pub trait Backend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError>;

    async fn places(&self, token: &str) -> Result<Vec<Place>, ClientError>;

    async fn place(&self, token: Option<&str>, place_id: &str) -> Result<Place, ClientError>;

    async fn submit_review(
        &self,
        token: &str,
        place_id: &str,
        review: &NewReview,
    ) -> Result<(), ClientError>;
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn place_path(place_id: &str) -> String {
    format!("/api/places/{}", urlencoding::encode(place_id))
}

pub fn reviews_path(place_id: &str) -> String {
    format!("{}/reviews", place_path(place_id))
}

#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    config: Config,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn authorized(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => builder.header("Authorization", &bearer(token)),
            None => builder,
        }
    }

    /// Turns a non-success response into `ClientError::Http`, keeping the
    /// server's `message` when the body is an error object.
    async fn check(response: Response) -> Result<Response, ClientError> {
        if response.ok() {
            return Ok(response);
        }
        let status = response.status();
        let status_text = response.status_text();
        let message = response
            .text()
            .await
            .ok()
            .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
            .and_then(|body| body.message);
        error!("[API] {} {} ({:?})", status, status_text, message);
        Err(ClientError::Http {
            status,
            status_text,
            message,
        })
    }
}

impl Backend for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ClientError> {
        let url = self.config.endpoint("/api/login");
        log!("[API] POST {}", url);
        let response = Request::post(&url).json(credentials)?.send().await?;
        let response = Self::check(response).await?;
        Ok(response.json::<LoginResponse>().await?)
    }

    async fn places(&self, token: &str) -> Result<Vec<Place>, ClientError> {
        let url = self.config.endpoint("/api/places");
        log!("[API] GET {}", url);
        let response = Self::authorized(Request::get(&url), Some(token))
            .send()
            .await?;
        let body = Self::check(response).await?.text().await?;
        let places = decode_place_list(&body)?;
        log!("[API] Received {} places", places.len());
        Ok(places)
    }

    async fn place(&self, token: Option<&str>, place_id: &str) -> Result<Place, ClientError> {
        let url = self.config.endpoint(&place_path(place_id));
        log!("[API] GET {}", url);
        let response = Self::authorized(Request::get(&url), token).send().await?;
        Ok(Self::check(response).await?.json::<Place>().await?)
    }

    async fn submit_review(
        &self,
        token: &str,
        place_id: &str,
        review: &NewReview,
    ) -> Result<(), ClientError> {
        let url = self.config.endpoint(&reviews_path(place_id));
        log!("[API] POST {}", url);
        let response = Self::authorized(Request::post(&url), Some(token))
            .json(review)?
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_encode_place_id() {
        assert_eq!(place_path("42"), "/api/places/42");
        assert_eq!(reviews_path("42"), "/api/places/42/reviews");
        assert_eq!(place_path("a/b"), "/api/places/a%2Fb");
    }

    #[test]
    fn bearer_header_value() {
        assert_eq!(bearer("abc123"), "Bearer abc123");
    }
}
