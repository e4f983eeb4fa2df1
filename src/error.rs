use thiserror::Error;

/// Failure taxonomy for backend calls. Every variant renders as a
/// single human-readable line in the dashboard's error area.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API is not configured. Set api.base_url in config/default.toml or STOCK_AGENT_API_BASE.")]
    Unconfigured,

    /// Non-success status. The message carries the backend's own error
    /// text when it sent one, so Display shows it verbatim.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    #[error("Backend returned a non-JSON response. Check API URL and deployment logs.")]
    BadResponse,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
