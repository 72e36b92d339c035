use thiserror::Error;

/// Everything that can end a user action early.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("HTTP {status} {status_text}")]
    Http {
        status: u16,
        status_text: String,
        /// `message` field of the server's error body, when it sent one.
        message: Option<String>,
    },

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("no access token in login response")]
    MissingToken,

    #[error("missing place id")]
    MissingPlaceId,
}

impl ClientError {
    /// Server message if present, else the HTTP status text.
    pub fn server_reason(&self) -> Option<&str> {
        match self {
            ClientError::Http {
                status_text,
                message,
                ..
            } => Some(
                message
                    .as_deref()
                    .filter(|m| !m.is_empty())
                    .unwrap_or(status_text.as_str()),
            ),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ClientError {
    fn from(error: gloo_net::Error) -> Self {
        match error {
            gloo_net::Error::SerdeError(e) => ClientError::Decode(e.to_string()),
            other => ClientError::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(error: serde_json::Error) -> Self {
        ClientError::Decode(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_reason_prefers_message() {
        let err = ClientError::Http {
            status: 400,
            status_text: "BAD REQUEST".into(),
            message: Some("You cannot review your own place".into()),
        };
        assert_eq!(err.server_reason(), Some("You cannot review your own place"));

        let err = ClientError::Http {
            status: 500,
            status_text: "INTERNAL SERVER ERROR".into(),
            message: None,
        };
        assert_eq!(err.server_reason(), Some("INTERNAL SERVER ERROR"));
        assert_eq!(ClientError::MissingToken.server_reason(), None);
    }
}
