//! Application services

mod station;
mod vehicle_registration;

pub use station::StationService;
pub use vehicle_registration::{VehicleDetailsSource, VehicleRegistrationService};
