pub mod company;
pub mod repositories;
pub mod station;
pub mod vehicle;

// Re-export commonly used types
pub use company::{CompanyContact, CompanyRepository};
pub use repositories::{DomainResult, RepositoryProvider};
pub use station::{RemovalSummary, StationListing, StationLocation, StationRepository, TYPE_2};
pub use vehicle::{
    NewVehicle, RegistrationOutcome, VehicleDetails, VehicleKey, VehicleLookup, VehicleRepository,
};

// Re-export DomainError from support for convenience
pub use crate::support::errors::DomainError;
