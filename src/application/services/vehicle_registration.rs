//! Vehicle lookup and registration
//!
//! A vehicle is identified by brand and model. Known vehicles resolve to the
//! stations explicitly linked to them; unknown ones are registered and linked
//! to every station of the charge type the caller supplies.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    DomainResult, NewVehicle, RegistrationOutcome, RepositoryProvider, StationListing,
    VehicleDetails, VehicleKey, VehicleLookup,
};

/// Supplies colour and charge type for a vehicle that is not registered yet.
///
/// Only consulted on the unknown-vehicle path.
pub trait VehicleDetailsSource {
    fn vehicle_details(&mut self, key: &VehicleKey) -> DomainResult<VehicleDetails>;
}

impl<F> VehicleDetailsSource for F
where
    F: FnMut(&VehicleKey) -> DomainResult<VehicleDetails>,
{
    fn vehicle_details(&mut self, key: &VehicleKey) -> DomainResult<VehicleDetails> {
        self(key)
    }
}

pub struct VehicleRegistrationService {
    repos: Arc<dyn RepositoryProvider>,
}

impl VehicleRegistrationService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Known vehicles carry the stations reached through their links.
    pub async fn lookup(&self, key: &VehicleKey) -> DomainResult<VehicleLookup> {
        if self.repos.vehicles().count(key).await? > 0 {
            let stations = self.repos.vehicles().find_linked_stations(key).await?;
            Ok(VehicleLookup::Known(stations))
        } else {
            Ok(VehicleLookup::Unknown)
        }
    }

    /// Stations a new vehicle of this charge type would be linked to.
    pub async fn preview_stations_for_charge_type(
        &self,
        charge_type: &str,
    ) -> DomainResult<Vec<StationListing>> {
        self.repos.stations().find_by_charge_type(charge_type).await
    }

    /// Insert the vehicle and its links as one unit.
    pub async fn register_vehicle_with_links(
        &self,
        vehicle: NewVehicle,
        charge_type: &str,
    ) -> DomainResult<RegistrationOutcome> {
        let key = vehicle.key.clone();
        let linked_stations = self
            .repos
            .vehicles()
            .insert_with_links(vehicle, charge_type)
            .await?;

        info!(
            "Vehicle {} registered, linked to {} {:?} stations",
            key,
            linked_stations.len(),
            charge_type
        );

        Ok(RegistrationOutcome {
            vehicle: key,
            linked_stations,
        })
    }

    /// Full workflow: stations for a known vehicle, or register an unknown
    /// one with details from `source`.
    ///
    /// On registration the returned rows are the preview computed before
    /// anything was written.
    pub async fn register_vehicle(
        &self,
        key: &VehicleKey,
        source: &mut dyn VehicleDetailsSource,
    ) -> DomainResult<Vec<StationListing>> {
        if let VehicleLookup::Known(stations) = self.lookup(key).await? {
            return Ok(stations);
        }

        let VehicleDetails { color, charge_type } = source.vehicle_details(key)?;
        let preview = self.preview_stations_for_charge_type(&charge_type).await?;

        self.register_vehicle_with_links(
            NewVehicle {
                key: key.clone(),
                color,
            },
            &charge_type,
        )
        .await?;

        Ok(preview)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::infrastructure::database::seed::apply_script;
    use crate::infrastructure::database::testing::{fixture_db, sorted};
    use crate::infrastructure::SeaOrmRepositoryProvider;

    async fn service() -> VehicleRegistrationService {
        VehicleRegistrationService::new(Arc::new(SeaOrmRepositoryProvider::new(fixture_db().await)))
    }

    fn details(color: &str, charge_type: &str) -> VehicleDetails {
        VehicleDetails {
            color: color.to_string(),
            charge_type: charge_type.to_string(),
        }
    }

    fn ids(rows: Vec<StationListing>) -> Vec<String> {
        sorted(rows, |r| r.station_id.clone())
            .into_iter()
            .map(|r| r.station_id)
            .collect()
    }

    #[tokio::test]
    async fn known_vehicle_skips_the_details_source() {
        let svc = service().await;
        let mut asked = 0;
        let mut source = |_: &VehicleKey| -> DomainResult<VehicleDetails> {
            asked += 1;
            Ok(details("Noir", "CCS"))
        };

        let rows = svc
            .register_vehicle(&VehicleKey::new("Renault", "Zoe"), &mut source)
            .await
            .unwrap();

        assert_eq!(asked, 0);
        assert_eq!(ids(rows), vec!["B1"]);
    }

    #[tokio::test]
    async fn unknown_vehicle_is_registered_then_known() {
        let svc = service().await;
        let key = VehicleKey::new("Tesla", "Model3");
        let mut source =
            |_: &VehicleKey| -> DomainResult<VehicleDetails> { Ok(details("Blanc", "Type 2")) };

        let preview = svc.register_vehicle(&key, &mut source).await.unwrap();
        assert_eq!(
            preview,
            vec![StationListing::new("B1", "Lyon", "12 rue de la République", 1.5)]
        );

        // Second call takes the known branch and reads through the links.
        let mut never = |_: &VehicleKey| -> DomainResult<VehicleDetails> {
            panic!("details requested for a registered vehicle")
        };
        let again = svc.register_vehicle(&key, &mut never).await.unwrap();
        assert_eq!(again, preview);
        assert_eq!(svc.repos.vehicles().count(&key).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn links_are_an_explicit_set_not_a_live_filter() {
        let db = fixture_db().await;
        let svc = VehicleRegistrationService::new(Arc::new(SeaOrmRepositoryProvider::new(db.clone())));
        let key = VehicleKey::new("Kia", "EV6");

        let outcome = svc
            .register_vehicle_with_links(
                NewVehicle {
                    key: key.clone(),
                    color: "Gris".to_string(),
                },
                "CCS",
            )
            .await
            .unwrap();
        assert_eq!(outcome.linked_stations.len(), 2);

        // A CCS station opened after registration is not linked.
        apply_script(
            &db,
            "INSERT INTO BorneBases (numero_bornebase, typeRecharge_typebornebase, prixBase_borne, tauxIndexation_borne, periodes_borne, nom_entreprise) \
             VALUES ('B5', 'CCS', 2.50, 0.0, 0, 'VoltServices'); \
             INSERT INTO Locations (numero_bornebase, ville_location, adresse_location) \
             VALUES ('B5', 'Nantes', '3 quai de la Fosse');",
        )
        .await
        .unwrap();
        assert_eq!(
            ids(svc.preview_stations_for_charge_type("CCS").await.unwrap()),
            vec!["B2", "B3", "B5"]
        );

        match svc.lookup(&key).await.unwrap() {
            VehicleLookup::Known(rows) => assert_eq!(ids(rows), vec!["B2", "B3"]),
            VehicleLookup::Unknown => panic!("vehicle should be known"),
        }

        // Removing a linked station drops its link; the rest stays put.
        svc.repos.stations().remove("B3").await.unwrap();

        match svc.lookup(&key).await.unwrap() {
            VehicleLookup::Known(rows) => assert_eq!(ids(rows), vec!["B2"]),
            VehicleLookup::Unknown => panic!("vehicle should be known"),
        }
    }

    #[tokio::test]
    async fn preview_is_computed_before_persisting() {
        let svc = service().await;

        let preview = svc.preview_stations_for_charge_type("CCS").await.unwrap();
        assert_eq!(ids(preview), vec!["B2", "B3"]);
        assert!(!svc
            .lookup(&VehicleKey::new("Kia", "EV6"))
            .await
            .unwrap()
            .is_known());
    }

    #[tokio::test]
    async fn failing_source_writes_nothing() {
        let svc = service().await;
        let key = VehicleKey::new("Fiat", "500e");
        let mut source = |_: &VehicleKey| -> DomainResult<VehicleDetails> {
            Err(DomainError::Validation("input closed".to_string()))
        };

        let err = svc.register_vehicle(&key, &mut source).await.unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(svc.lookup(&key).await.unwrap(), VehicleLookup::Unknown);
    }

    #[tokio::test]
    async fn explicit_registration_of_known_vehicle_conflicts() {
        let svc = service().await;

        let err = svc
            .register_vehicle_with_links(
                NewVehicle {
                    key: VehicleKey::new("Renault", "Zoe"),
                    color: "Bleu".to_string(),
                },
                "Type 2",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
    }
}
