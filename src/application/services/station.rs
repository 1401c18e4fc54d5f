//! Station queries and maintenance workflows

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{
    CompanyContact, DomainResult, RemovalSummary, RepositoryProvider, StationListing,
    StationLocation, TYPE_2,
};

/// Read-only station listings plus the location-update and removal workflows.
pub struct StationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl StationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Every station with its current price and address, unfiltered.
    pub async fn list_stations_with_price_and_address(&self) -> DomainResult<Vec<StationListing>> {
        self.repos.stations().list_with_price_and_address().await
    }

    /// Stations whose charge type is exactly "Type 2".
    pub async fn list_type2_stations(&self) -> DomainResult<Vec<StationListing>> {
        self.repos.stations().find_by_charge_type(TYPE_2).await
    }

    /// Distinct stations of `charge_type`, price rounded to 2 decimals.
    pub async fn list_stations_by_charge_type(
        &self,
        charge_type: &str,
    ) -> DomainResult<Vec<StationListing>> {
        self.repos
            .stations()
            .find_distinct_by_charge_type(charge_type)
            .await
    }

    pub async fn get_company_contact_for_station(
        &self,
        station_id: &str,
    ) -> DomainResult<Vec<CompanyContact>> {
        self.repos
            .companies()
            .find_contact_for_station(station_id)
            .await
    }

    pub async fn get_location(&self, station_id: &str) -> DomainResult<Option<StationLocation>> {
        self.repos.stations().find_location(station_id).await
    }

    /// Overwrite a station's address and city. An unknown id changes nothing.
    pub async fn update_location(
        &self,
        station_id: &str,
        address: &str,
        city: &str,
    ) -> DomainResult<()> {
        let touched = self
            .repos
            .stations()
            .update_location(station_id, address, city)
            .await?;

        if touched == 0 {
            debug!("No location for station {}, nothing updated", station_id);
        } else {
            info!("Location of station {} set to {}, {}", station_id, address, city);
        }
        Ok(())
    }

    /// Remove a station with its location and compatibility links, atomically.
    pub async fn remove_station(&self, station_id: &str) -> DomainResult<RemovalSummary> {
        let summary = self.repos.stations().remove(station_id).await?;

        if summary.is_noop() {
            debug!("Station {} not found, nothing removed", station_id);
        } else {
            info!(
                station_id,
                links = summary.links,
                locations = summary.locations,
                stations = summary.stations,
                "Station removed"
            );
        }
        Ok(summary)
    }
}
