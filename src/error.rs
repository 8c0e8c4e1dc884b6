// src/error.rs
// Error types for the model gateway and page delivery

use thiserror::Error;

/// Marker glyph the frontend looks for to tell a failure from a real answer
pub const ERROR_MARKER: &str = "⚠️";

/// Failure talking to the text-generation service
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("{0} is not set")]
    MissingConfig(&'static str),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("unexpected response format: {0}")]
    UnexpectedFormat(String),

    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for gateway results
pub type Result<T> = std::result::Result<T, GatewayError>;

impl GatewayError {
    /// Render the error the way the browser frontend expects it in a result field
    pub fn to_display_text(&self) -> String {
        match self {
            GatewayError::UnexpectedFormat(raw) => {
                format!("{} Unexpected response format: {}", ERROR_MARKER, raw)
            }
            other => format!("{} Error while generating response: {}", ERROR_MARKER, other),
        }
    }
}

/// Failure loading an HTML page from the templates directory
#[derive(Error, Debug)]
pub enum PageError {
    #[error("page not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_names_variable() {
        let err = GatewayError::MissingConfig("IBM_API_KEY");
        assert_eq!(err.to_string(), "IBM_API_KEY is not set");
    }

    #[test]
    fn test_api_error_display() {
        let err = GatewayError::Api {
            status: 401,
            body: "unauthorized".into(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("unauthorized"));
    }

    #[test]
    fn test_display_text_for_failures() {
        let err = GatewayError::Other("connection reset".into());
        assert_eq!(
            err.to_display_text(),
            "⚠️ Error while generating response: connection reset"
        );
    }

    #[test]
    fn test_display_text_for_unexpected_format() {
        let err = GatewayError::UnexpectedFormat("[1, 2]".into());
        assert_eq!(err.to_display_text(), "⚠️ Unexpected response format: [1, 2]");
    }

    #[test]
    fn test_display_text_starts_with_marker() {
        let err = GatewayError::Auth("token expired".into());
        assert!(err.to_display_text().starts_with(ERROR_MARKER));
    }

    #[test]
    fn test_page_not_found_display() {
        let err = PageError::NotFound("wellness.html".into());
        assert!(err.to_string().contains("wellness.html"));
    }
}
