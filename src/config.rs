/// Build-time configuration for the front end.
///
/// The backend host is baked into the bundle: set `HBNB_API_BASE` when
/// building to point at something other than the local development server.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Name of the cookie holding the bearer token.
pub const TOKEN_COOKIE: &str = "token";
/// Token cookie lifetime, in seconds (24 hours).
pub const TOKEN_MAX_AGE_SECS: u32 = 86_400;

pub const INDEX_PAGE: &str = "index.html";
pub const LOGIN_PAGE: &str = "login.html";
pub const PLACE_PAGE: &str = "place.html";
pub const ADD_REVIEW_PAGE: &str = "add_review.html";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::with_base(option_env!("HBNB_API_BASE").unwrap_or(DEFAULT_API_BASE))
    }

    pub fn with_base(base: &str) -> Self {
        Self {
            api_base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Absolute URL for an API path such as `/api/places`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
