//! HTTP client for the stadtnavi ParkAPI feed.
//!
//! Wraps `reqwest` with connector-specific error handling and hands the raw
//! bytes to [`decode`] and [`normalize`]. The connector is deliberately thin:
//! no retries, no scheduling, no caching — the surrounding orchestrator owns
//! all of that.

use std::time::Duration;

use reqwest::{Client, Url};

use openparking_core::{DataPoint, Datasource};

use crate::decode::decode;
use crate::error::HerrenbergError;
use crate::normalize::normalize;

/// Human-readable source name.
pub const NAME: &str = "Herrenberg";
/// URL-safe source identifier.
pub const SLUG: &str = "herrenberg";
/// Informational URL for the source.
pub const INFO_URL: &str = "https://stadtnavi.de";

const DEFAULT_FEED_URL: &str = "https://api.stadtnavi.de/parkapi.json";

/// Connector for the Herrenberg ParkAPI feed.
///
/// Use [`Herrenberg::new`] for production or [`Herrenberg::with_feed_url`]
/// to point at a mock server in tests.
#[derive(Debug)]
pub struct Herrenberg {
    client: Client,
    feed_url: Url,
}

impl Herrenberg {
    /// Creates a connector pointed at the production feed.
    ///
    /// # Errors
    ///
    /// Returns [`HerrenbergError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, HerrenbergError> {
        Self::with_feed_url(timeout_secs, DEFAULT_FEED_URL)
    }

    /// Creates a connector with a custom feed URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`HerrenbergError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`HerrenbergError::InvalidFeedUrl`] if
    /// `feed_url` is not a valid URL.
    pub fn with_feed_url(timeout_secs: u64, feed_url: &str) -> Result<Self, HerrenbergError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("openparking/0.1 (parking-data-aggregation)")
            .build()?;

        let feed_url = Url::parse(feed_url).map_err(|e| HerrenbergError::InvalidFeedUrl {
            url: feed_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, feed_url })
    }

}

impl Datasource for Herrenberg {
    type Error = HerrenbergError;

    fn name(&self) -> &'static str {
        NAME
    }

    fn slug(&self) -> &'static str {
        SLUG
    }

    fn info_url(&self) -> &'static str {
        INFO_URL
    }

    /// Fetches the current feed and converts it into a canonical
    /// [`DataPoint`].
    ///
    /// # Errors
    ///
    /// - [`HerrenbergError::Http`] on network failure or non-2xx HTTP status.
    /// - [`HerrenbergError::MalformedFeed`] if the response is not a valid
    ///   ParkAPI document.
    async fn data(&self) -> Result<DataPoint, HerrenbergError> {
        let response = self.client.get(self.feed_url.clone()).send().await?;
        let bytes = response.error_for_status()?.bytes().await?;
        let feed = decode(&bytes)?;
        Ok(normalize(feed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_feed_url_is_rejected() {
        let err = Herrenberg::with_feed_url(30, "not a url").unwrap_err();
        assert!(matches!(err, HerrenbergError::InvalidFeedUrl { .. }));
    }

    #[test]
    fn identity_metadata_is_constant() {
        let source = Herrenberg::new(30).expect("client construction should not fail");
        assert_eq!(source.name(), "Herrenberg");
        assert_eq!(source.slug(), "herrenberg");
        assert_eq!(source.info_url(), "https://stadtnavi.de");
    }
}
