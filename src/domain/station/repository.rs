//! Station repository interface

use async_trait::async_trait;

use super::model::{RemovalSummary, StationListing, StationLocation};
use crate::domain::DomainResult;

#[async_trait]
pub trait StationRepository: Send + Sync {
    /// All stations with their current price and address, in storage order.
    async fn list_with_price_and_address(&self) -> DomainResult<Vec<StationListing>>;

    /// Stations of exactly this charge type, current price unrounded.
    async fn find_by_charge_type(&self, charge_type: &str) -> DomainResult<Vec<StationListing>>;

    /// Distinct stations of this charge type, price rounded to 2 decimals.
    async fn find_distinct_by_charge_type(
        &self,
        charge_type: &str,
    ) -> DomainResult<Vec<StationListing>>;

    async fn find_location(&self, station_id: &str) -> DomainResult<Option<StationLocation>>;

    /// Overwrite address and city; returns the number of rows touched.
    async fn update_location(&self, station_id: &str, address: &str, city: &str)
        -> DomainResult<u64>;

    /// Delete links, location and station in one transaction.
    async fn remove(&self, station_id: &str) -> DomainResult<RemovalSummary>;
}
