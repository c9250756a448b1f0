//! Structural decoding of raw feed bytes into [`ParkApiResponse`].

use crate::error::HerrenbergError;
use crate::types::ParkApiResponse;

/// Decodes a raw ParkAPI document.
///
/// Decoding is all-or-nothing: any structural problem fails the whole feed,
/// no partial result is produced. Per-record incompleteness (a lot without a
/// free-count) is not a structural problem and is handled later by
/// [`normalize`](crate::normalize::normalize).
///
/// # Errors
///
/// Returns [`HerrenbergError::MalformedFeed`] if the bytes are not valid
/// JSON or do not match the feed schema.
pub fn decode(bytes: &[u8]) -> Result<ParkApiResponse, HerrenbergError> {
    serde_json::from_slice(bytes).map_err(HerrenbergError::MalformedFeed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lot_list_decodes() {
        let body = br#"{
            "data_source": "https://www.herrenberg.de",
            "last_downloaded": "23-01-15T08:30:00.000",
            "last_updated": "23-01-15T08:27:13.000",
            "lots": []
        }"#;
        let feed = decode(body).expect("empty feed should decode");
        assert!(feed.lots.is_empty());
    }

    #[test]
    fn invalid_json_is_malformed_feed() {
        let err = decode(b"not json at all").unwrap_err();
        assert!(matches!(err, HerrenbergError::MalformedFeed(_)));
    }

    #[test]
    fn missing_envelope_field_is_malformed_feed() {
        let body = br#"{ "lots": [] }"#;
        let err = decode(body).unwrap_err();
        assert!(matches!(err, HerrenbergError::MalformedFeed(_)));
    }
}
