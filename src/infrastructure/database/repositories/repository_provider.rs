//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::company::CompanyRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::station::StationRepository;
use crate::domain::vehicle::VehicleRepository;

use super::company_repository::SeaOrmCompanyRepository;
use super::station_repository::SeaOrmStationRepository;
use super::vehicle_repository::SeaOrmVehicleRepository;

/// Unified repository provider backed by SeaORM.
///
/// Every repository shares the one store connection.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let rows = repos.stations().find_by_charge_type("Type 2").await?;
/// let contact = repos.companies().find_contact_for_station("B1").await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    stations: SeaOrmStationRepository,
    vehicles: SeaOrmVehicleRepository,
    companies: SeaOrmCompanyRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            stations: SeaOrmStationRepository::new(db.clone()),
            vehicles: SeaOrmVehicleRepository::new(db.clone()),
            companies: SeaOrmCompanyRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn stations(&self) -> &dyn StationRepository {
        &self.stations
    }

    fn vehicles(&self) -> &dyn VehicleRepository {
        &self.vehicles
    }

    fn companies(&self) -> &dyn CompanyRepository {
        &self.companies
    }
}
