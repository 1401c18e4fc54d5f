//! Vehicle aggregate
//!
//! Vehicle models and their compatibility links to stations.

pub mod model;
pub mod repository;

pub use model::{NewVehicle, RegistrationOutcome, VehicleDetails, VehicleKey, VehicleLookup};
pub use repository::VehicleRepository;
