//! Station aggregate
//!
//! Charging stations ("bornes"), their 1:1 location and the listing rows
//! produced by station queries.

pub mod model;
pub mod repository;

pub use model::{RemovalSummary, StationListing, StationLocation, TYPE_2};
pub use repository::StationRepository;
