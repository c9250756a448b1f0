use thiserror::Error;

/// Errors returned by the Herrenberg connector.
#[derive(Debug, Error)]
pub enum HerrenbergError {
    /// Network or TLS failure from the underlying HTTP client, or a non-2xx
    /// response from the feed host. Opaque to this connector; retrying is the
    /// caller's concern.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed bytes were not a valid ParkAPI document: invalid JSON, a
    /// missing or mistyped required field, an unparseable timestamp, or a
    /// value outside a closed vocabulary.
    #[error("malformed ParkAPI feed: {0}")]
    MalformedFeed(#[source] serde_json::Error),

    /// The configured feed URL could not be parsed.
    #[error("invalid feed URL \"{url}\": {reason}")]
    InvalidFeedUrl { url: String, reason: String },
}
