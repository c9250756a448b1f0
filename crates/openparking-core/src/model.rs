//! The canonical, source-agnostic parking data model.
//!
//! Every connector converts its upstream feed into these types. The model is
//! owned here, not by any one connector: connectors never extend it, they map
//! their foreign vocabularies onto it (and collapse what has no canonical
//! equivalent yet).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One complete snapshot of a source's lots at a point in time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPoint {
    /// When the feed document itself was downloaded from the source.
    ///
    /// Distinct from [`Lot::data_age`], which is when the underlying data
    /// last changed. Feeds are often redistributed unchanged, so the two
    /// routinely differ.
    pub timestamp: DateTime<Utc>,

    /// Per-lot outcomes, in the source's original order.
    ///
    /// The `Err` side is reserved for fine-grained per-record failure
    /// reporting; current connectors only produce `Ok` entries and drop
    /// records they cannot represent.
    pub lots: Vec<Result<Lot, LotError>>,
}

/// A single named parking facility with capacity and live status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lot {
    /// When the underlying data for this lot last changed at the source.
    pub data_age: DateTime<Utc>,
    pub name: String,
    pub coordinates: Coordinates,
    pub city: String,
    pub region: Option<String>,
    pub address: String,
    pub available: Availability,
    /// Total number of spaces.
    pub capacity: u32,
    pub state: LotState,
    pub kind: LotKind,
    /// Source detail page for this lot.
    pub detail_url: Option<String>,
    pub image_url: Option<String>,
    /// Free-text fee description, verbatim from the source.
    pub pricing: Option<String>,
    /// Free-text opening hours description, verbatim from the source.
    pub opening_hours: Option<String>,
    pub additional_information: Option<String>,
}

/// WGS84 position of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// How many spaces are currently free.
///
/// An enum rather than a bare count so that estimated or percentage-based
/// models from other sources can be added without touching existing
/// connectors. A lot is only emitted when its source reports live occupancy
/// data; "no data" is expressed by omission, never by a placeholder count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// An exact count of free spaces.
    Discrete(u32),
}

/// Operational state of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LotState {
    Open,
    Closed,
    /// The source reports no current state for this lot.
    NoData,
}

/// Physical category of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LotKind {
    /// A surface parking lot.
    Lot,
    /// A multi-storey parking structure.
    Structure,
    /// An underground garage.
    Underground,
}

/// Per-lot failure marker for connectors that can report partial results.
///
/// No connector constructs this yet; it keeps the per-lot `Result` shape in
/// [`DataPoint::lots`] stable for when partial-failure reporting lands.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum LotError {
    /// The source record was missing data the canonical model requires.
    #[error("lot \"{name}\": {reason}")]
    Incomplete { name: String, reason: String },
}
