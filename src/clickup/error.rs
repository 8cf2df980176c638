use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("Failed to connect to the ClickUp API")]
    #[diagnostic(
        code(clickup_mcp::api::connection_failed),
        help(
            "Check network connectivity. If CLICKUP_API_URL is set, make sure it points to a reachable host."
        )
    )]
    ConnectionFailed {
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid response from the ClickUp API: {message}")]
    #[diagnostic(code(clickup_mcp::api::invalid_response))]
    InvalidResponse { message: String },

    #[error("ClickUp API error ({status}): {message}")]
    #[diagnostic(code(clickup_mcp::api::api_error))]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            ApiError::ConnectionFailed { source: e }
        } else {
            ApiError::InvalidResponse {
                message: e.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::InvalidResponse {
            message: e.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
