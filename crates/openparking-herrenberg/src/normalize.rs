//! Normalization of decoded ParkAPI records into the canonical model.
//!
//! This is where the foreign vocabularies are mapped and per-record
//! incompleteness is handled. Normalization never fails: records the
//! canonical model cannot represent are dropped with a diagnostic, the rest
//! of the batch proceeds.

use chrono::{DateTime, Utc};
use openparking_core::{Availability, Coordinates, DataPoint, Lot, LotKind, LotState};

use crate::types::{ParkApiLot, ParkApiLotType, ParkApiResponse, ParkApiState};

/// Municipality this feed covers. Fixed for the source, not read from the feed.
const CITY: &str = "Herrenberg";

/// Converts a decoded feed into a canonical [`DataPoint`].
///
/// Lots keep their feed order. A lot without a free-count carries no live
/// occupancy data and is dropped (with a warning naming the lot) rather than
/// emitted with a placeholder availability.
#[must_use]
pub fn normalize(response: ParkApiResponse) -> DataPoint {
    let last_updated = response.last_updated;
    let lots = response
        .lots
        .into_iter()
        .filter_map(|lot| {
            let Some(free) = lot.free else {
                tracing::warn!(lot = %lot.name, "no free-count in feed, dropping lot");
                return None;
            };
            Some(Ok(canonical_lot(lot, free, last_updated)))
        })
        .collect();

    DataPoint {
        timestamp: response.last_downloaded,
        lots,
    }
}

fn canonical_lot(lot: ParkApiLot, free: u32, last_updated: DateTime<Utc>) -> Lot {
    Lot {
        data_age: last_updated,
        name: lot.name,
        coordinates: Coordinates {
            lat: lot.coords.lat,
            lng: lot.coords.lng,
        },
        city: CITY.to_string(),
        region: None,
        address: lot.address,
        available: Availability::Discrete(free),
        capacity: lot.total,
        state: canonical_state(lot.state),
        kind: canonical_kind(lot.lot_type),
        detail_url: lot.url,
        image_url: None,
        pricing: lot.fees,
        opening_hours: lot.opening_hours,
        additional_information: None,
    }
}

/// Maps the foreign lot category onto the canonical one.
fn canonical_kind(lot_type: ParkApiLotType) -> LotKind {
    match lot_type {
        ParkApiLotType::Parkplatz => LotKind::Lot,
        ParkApiLotType::Parkhaus => LotKind::Structure,
        ParkApiLotType::Tiefgarage => LotKind::Underground,
        // Not yet modeled canonically; these read best as plain lots until
        // the schema owner adds categories for them.
        ParkApiLotType::ParkAndRide | ParkApiLotType::Camper | ParkApiLotType::Carpool => {
            LotKind::Lot
        }
    }
}

/// Maps the foreign state onto the canonical one.
fn canonical_state(state: ParkApiState) -> LotState {
    match state {
        ParkApiState::Open => LotState::Open,
        ParkApiState::Closed => LotState::Closed,
        // Both wire values mean "no usable state".
        ParkApiState::Nodata | ParkApiState::Unknown => LotState::NoData,
    }
}
