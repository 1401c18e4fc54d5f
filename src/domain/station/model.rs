//! Station domain types

use serde::Serialize;

/// Charge type used by the dedicated "Type 2" listing.
pub const TYPE_2: &str = "Type 2";

/// One station as shown in price listings.
///
/// Every station query yields this shape so callers can render the rows of
/// any listing (or of a vehicle lookup) the same way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationListing {
    pub station_id: String,
    pub city: String,
    pub address: String,
    pub price: f64,
}

impl StationListing {
    pub fn new(
        station_id: impl Into<String>,
        city: impl Into<String>,
        address: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            city: city.into(),
            address: address.into(),
            price,
        }
    }
}

/// Physical location of a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationLocation {
    pub station_id: String,
    pub city: String,
    pub address: String,
}

/// Rows deleted by a station removal, per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RemovalSummary {
    pub links: u64,
    pub locations: u64,
    pub stations: u64,
}

impl RemovalSummary {
    pub fn is_noop(&self) -> bool {
        self.links == 0 && self.locations == 0 && self.stations == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_is_noop() {
        assert!(RemovalSummary::default().is_noop());
        let s = RemovalSummary {
            links: 0,
            locations: 1,
            stations: 1,
        };
        assert!(!s.is_noop());
    }

    #[test]
    fn listing_serializes_with_field_names() {
        let row = StationListing::new("B1", "Lyon", "1 rue de la Paix", 1.5);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["station_id"], "B1");
        assert_eq!(json["city"], "Lyon");
        assert_eq!(json["price"], 1.5);
    }
}
