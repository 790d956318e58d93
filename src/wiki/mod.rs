//! MediaWiki API plumbing: endpoints, locale negotiation, search and markup cleanup.

pub mod client;
pub mod endpoint;
pub mod locale;
pub(crate) mod markup;
pub mod resolver;
pub mod types;

pub use client::{ArticleSearch, WikipediaClient};
pub use endpoint::EndpointConfig;
pub use resolver::Resolver;

/// Errors returned by a single MediaWiki API call.
#[derive(Debug, thiserror::Error)]
pub enum WikiError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Wikipedia API returned status {0}")]
    Status(u16),

    #[error("Wikipedia API error ({code}): {info}")]
    Api { code: String, info: String },

    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}
