use thiserror::Error;

/// Failures talking to the events API
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response, or the body could not be read
    #[error("Network error: {0}")]
    Network(String),

    /// The API answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    /// The response body was not the expected JSON shape
    #[error("Unexpected response from events API: {0}")]
    Decode(String),

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),

    /// A create request is missing required fields
    #[error("Invalid event: {0}")]
    Validation(String),
}

impl ApiError {
    /// Text shown to the user, including the server's diagnostic for status errors
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { status, body } if !body.trim().is_empty() => {
                format!("HTTP error! status: {} ({})", status, body.trim())
            }
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;

    #[test]
    fn test_status_message_contains_code() {
        let err = ApiError::Status {
            status: 503,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
        assert_eq!(err.user_message(), "HTTP error! status: 503");
    }

    #[test]
    fn test_user_message_includes_body() {
        let err = ApiError::Status {
            status: 500,
            body: "{\"error\": \"boom\"}\n".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "HTTP error! status: 500 ({\"error\": \"boom\"})"
        );
    }
}
