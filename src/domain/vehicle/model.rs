//! Vehicle domain types

use serde::Serialize;

use crate::domain::station::StationListing;

/// Brand + model, the identity of a vehicle. Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VehicleKey {
    pub brand: String,
    pub model: String,
}

impl VehicleKey {
    pub fn new(brand: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
        }
    }
}

impl std::fmt::Display for VehicleKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.brand, self.model)
    }
}

/// A vehicle about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVehicle {
    pub key: VehicleKey,
    pub color: String,
}

/// What the caller supplies for a vehicle that is not registered yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDetails {
    pub color: String,
    pub charge_type: String,
}

/// Result of looking a vehicle up by brand and model.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleLookup {
    /// Registered; carries the stations linked to it.
    Known(Vec<StationListing>),
    Unknown,
}

impl VehicleLookup {
    pub fn is_known(&self) -> bool {
        matches!(self, VehicleLookup::Known(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationOutcome {
    pub vehicle: VehicleKey,
    /// Station identifiers the new vehicle was linked to.
    pub linked_stations: Vec<String>,
}
