//! Vehicle repository interface

use async_trait::async_trait;

use super::model::{NewVehicle, VehicleKey};
use crate::domain::station::StationListing;
use crate::domain::DomainResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Number of vehicle rows with exactly this brand and model.
    async fn count(&self, key: &VehicleKey) -> DomainResult<u64>;

    /// Stations reachable through the vehicle's compatibility links.
    async fn find_linked_stations(&self, key: &VehicleKey) -> DomainResult<Vec<StationListing>>;

    /// Insert the vehicle, then one compatibility link per station of
    /// `charge_type`, all in one transaction. Returns the linked station ids.
    async fn insert_with_links(
        &self,
        vehicle: NewVehicle,
        charge_type: &str,
    ) -> DomainResult<Vec<String>>;
}
