//! Database entities module

pub mod company;
pub mod compatibility;
pub mod location;
pub mod station;
pub mod station_price;
pub mod vehicle;
