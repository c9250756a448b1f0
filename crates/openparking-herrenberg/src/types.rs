//! Wire types for the stadtnavi ParkAPI feed (`parkapi.json`).
//!
//! ## Observed shape of the live feed
//!
//! ### Keys
//! All keys are snake_case (`last_downloaded`, `lot_type`, `opening_hours`)
//! and map directly onto the Rust field names.
//!
//! ### Timestamps
//! `last_downloaded` / `last_updated` use a custom format with a two-digit
//! year and mandatory milliseconds, e.g. `"23-01-15T08:30:00.000"`, and carry
//! no zone designator. They are civil time in Europe/Berlin regardless of
//! where this code runs; decoding converts them to UTC.
//!
//! ### Vocabularies
//! `lot_type` and `state` are closed vocabularies. An unrecognized value
//! (e.g. `"Sonstiges"`) fails the whole decode rather than passing through —
//! a new foreign category needs an explicit mapping decision, not a silent
//! default.
//!
//! ### `free`
//! Absent when the lot has no live occupancy data. This is a signal, not an
//! error: the normalizer drops such records. `total` by contrast is always
//! present; a record without it fails the decode.
//!
//! ### `forecast`
//! Always present in the live feed. The canonical model has no use for it
//! yet, so it is decoded and ignored.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level feed envelope.
#[derive(Debug, Deserialize)]
pub struct ParkApiResponse {
    /// Reference URL of the upstream data source.
    pub data_source: String,

    /// When the feed document was fetched by the publisher.
    #[serde(deserialize_with = "berlin_timestamp::deserialize")]
    pub last_downloaded: DateTime<Utc>,

    /// When the underlying lot data last changed.
    #[serde(deserialize_with = "berlin_timestamp::deserialize")]
    pub last_updated: DateTime<Utc>,

    /// Lot records in publisher order.
    pub lots: Vec<ParkApiLot>,
}

/// A single lot record from the feed.
#[derive(Debug, Deserialize)]
pub struct ParkApiLot {
    pub lot_type: ParkApiLotType,
    pub address: String,
    /// Display name, also used to identify the lot in diagnostics.
    pub name: String,
    /// Whether the publisher computes occupancy forecasts for this lot.
    /// Decoded for schema strictness, unused downstream.
    pub forecast: bool,
    pub state: ParkApiState,
    pub coords: Coords,
    #[serde(default)]
    pub url: Option<String>,
    /// Total capacity. Required.
    pub total: u32,
    /// Currently free spaces. Absent when the lot reports no live data.
    #[serde(default)]
    pub free: Option<u32>,
    #[serde(default)]
    pub opening_hours: Option<String>,
    #[serde(default)]
    pub fees: Option<String>,
}

/// Foreign lot categories, exact wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ParkApiLotType {
    #[serde(rename = "Parkplatz")]
    Parkplatz,
    #[serde(rename = "Parkhaus")]
    Parkhaus,
    #[serde(rename = "Tiefgarage")]
    Tiefgarage,
    #[serde(rename = "Park-Ride")]
    ParkAndRide,
    #[serde(rename = "Wohnmobilparkplatz")]
    Camper,
    #[serde(rename = "Park-Carpool")]
    Carpool,
}

/// Foreign lot states.
///
/// `Nodata` and `Unknown` are distinct on the wire but both mean "no usable
/// state"; the normalizer collapses them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParkApiState {
    Open,
    Closed,
    Nodata,
    Unknown,
}

/// Lot position as published by the feed.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Coords {
    pub lat: f64,
    pub lng: f64,
}

/// Deserializes the feed's zone-less timestamps as Europe/Berlin civil time.
mod berlin_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use chrono_tz::Europe::Berlin;
    use serde::{Deserialize, Deserializer};

    /// Two-digit year, literal `T`, mandatory milliseconds.
    const FORMAT: &str = "%y-%m-%dT%H:%M:%S%.3f";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;

        // chrono matches `%.3f` against an empty string when the dot is
        // absent; the feed's milliseconds are mandatory.
        if !raw.contains('.') {
            return Err(serde::de::Error::custom(format!(
                "timestamp \"{raw}\" does not match feed format: missing milliseconds"
            )));
        }

        let naive = NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(|e| {
            serde::de::Error::custom(format!("timestamp \"{raw}\" does not match feed format: {e}"))
        })?;

        // An ambiguous wall time (the autumn DST fold) resolves to the
        // earlier of the two instants. A nonexistent one (the spring gap)
        // cannot be decoded.
        naive
            .and_local_timezone(Berlin)
            .earliest()
            .map(|local| local.with_timezone(&Utc))
            .ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "timestamp \"{raw}\" does not exist in Europe/Berlin"
                ))
            })
    }
}
