//! The interface every parking data connector exposes to the aggregation
//! system.

use std::future::Future;

use crate::model::DataPoint;

/// A single upstream parking data provider.
///
/// Implementations expose constant identity metadata plus one
/// fetch-and-convert operation. Connectors hold no cross-call state: every
/// [`data`](Datasource::data) call is an independent fetch of the current
/// feed, so a connector may be driven concurrently from multiple call sites.
pub trait Datasource {
    /// Connector-specific failure type for [`data`](Datasource::data).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Human-readable source name, e.g. `"Herrenberg"`.
    fn name(&self) -> &'static str;

    /// URL-safe identifier used by the aggregation system, e.g. `"herrenberg"`.
    fn slug(&self) -> &'static str;

    /// Informational URL describing the source.
    fn info_url(&self) -> &'static str;

    /// Fetch the source feed and convert it into a canonical [`DataPoint`].
    ///
    /// Retry and scheduling policy live with the caller, not the connector.
    fn data(&self) -> impl Future<Output = Result<DataPoint, Self::Error>> + Send;
}
