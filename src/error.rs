use thiserror::Error;

/// Errors that can occur while fetching recipes from the API
#[derive(Error, Debug)]
pub enum FetchError {
    /// The constructed request URL could not be parsed. Not reachable
    /// through the fixed endpoint templates.
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// The request never produced a usable HTTP response
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the 2xx range
    #[error("Unexpected HTTP status {0}")]
    InvalidResponse(u16),

    /// The body did not decode as the expected `{ "meals": [...] }` envelope
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The lookup endpoint returned no recipe for the requested id
    #[error("No recipe found for id {0}")]
    NotFound(String),
}
