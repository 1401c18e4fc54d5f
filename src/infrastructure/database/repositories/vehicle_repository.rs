//! SeaORM implementation of VehicleRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QuerySelect, RelationTrait, Set, TransactionTrait,
};

use super::station_repository::{into_listings, StationListingRow};
use crate::domain::station::StationListing;
use crate::domain::vehicle::{NewVehicle, VehicleKey, VehicleRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{
    compatibility, location, station, station_price, vehicle,
};

pub struct SeaOrmVehicleRepository {
    db: DatabaseConnection,
}

impl SeaOrmVehicleRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VehicleRepository for SeaOrmVehicleRepository {
    async fn count(&self, key: &VehicleKey) -> DomainResult<u64> {
        let n = vehicle::Entity::find()
            .filter(vehicle::Column::Brand.eq(key.brand.as_str()))
            .filter(vehicle::Column::ModelName.eq(key.model.as_str()))
            .count(&self.db)
            .await?;
        Ok(n)
    }

    async fn find_linked_stations(&self, key: &VehicleKey) -> DomainResult<Vec<StationListing>> {
        let rows = compatibility::Entity::find()
            .select_only()
            .column_as(station_price::Column::Id, "station_id")
            .column_as(location::Column::City, "city")
            .column_as(location::Column::Address, "address")
            .column_as(station_price::Column::CurrentPrice, "price")
            .join(JoinType::InnerJoin, compatibility::Relation::StationPrice.def())
            .join(JoinType::InnerJoin, station_price::Relation::Location.def())
            .filter(compatibility::Column::Brand.eq(key.brand.as_str()))
            .filter(compatibility::Column::ModelName.eq(key.model.as_str()))
            .into_model::<StationListingRow>()
            .all(&self.db)
            .await?;
        Ok(into_listings(rows))
    }

    async fn insert_with_links(
        &self,
        new_vehicle: NewVehicle,
        charge_type: &str,
    ) -> DomainResult<Vec<String>> {
        let NewVehicle { key, color } = new_vehicle;
        debug!("Registering vehicle {} for charge type {:?}", key, charge_type);

        // Dropping `txn` on any early return rolls every write back.
        let txn = self.db.begin().await?;

        let existing = vehicle::Entity::find_by_id((key.brand.clone(), key.model.clone()))
            .one(&txn)
            .await?;
        if existing.is_some() {
            return Err(DomainError::Conflict(format!("Vehicle '{}' is already registered", key)));
        }

        // The vehicle row must exist before any link references it.
        vehicle::Entity::insert(vehicle::ActiveModel {
            brand: Set(key.brand.clone()),
            model_name: Set(key.model.clone()),
            color: Set(color),
        })
        .exec_without_returning(&txn)
        .await?;

        let station_ids: Vec<String> = station::Entity::find()
            .select_only()
            .column(station::Column::Id)
            .filter(station::Column::ChargeType.eq(charge_type))
            .into_tuple()
            .all(&txn)
            .await?;

        if !station_ids.is_empty() {
            let links = station_ids.iter().map(|station_id| compatibility::ActiveModel {
                brand: Set(key.brand.clone()),
                model_name: Set(key.model.clone()),
                station_id: Set(station_id.clone()),
            });
            compatibility::Entity::insert_many(links)
                .exec_without_returning(&txn)
                .await?;
        }

        txn.commit().await?;

        debug!("Vehicle {} linked to {} stations", key, station_ids.len());
        Ok(station_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::testing::{fixture_db, sorted};
    use sea_orm::ConnectionTrait;

    fn zoe() -> VehicleKey {
        VehicleKey::new("Renault", "Zoe")
    }

    fn tesla() -> NewVehicle {
        NewVehicle {
            key: VehicleKey::new("Tesla", "Model 3"),
            color: "Rouge".to_string(),
        }
    }

    async fn link_count(db: &DatabaseConnection, key: &VehicleKey) -> u64 {
        compatibility::Entity::find()
            .filter(compatibility::Column::Brand.eq(key.brand.as_str()))
            .filter(compatibility::Column::ModelName.eq(key.model.as_str()))
            .count(db)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn count_matches_case_sensitively() {
        let repo = SeaOrmVehicleRepository::new(fixture_db().await);

        assert_eq!(repo.count(&zoe()).await.unwrap(), 1);
        assert_eq!(repo.count(&VehicleKey::new("renault", "zoe")).await.unwrap(), 0);
        assert_eq!(repo.count(&VehicleKey::new("Renault", "Twingo")).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn linked_stations_go_through_links() {
        let repo = SeaOrmVehicleRepository::new(fixture_db().await);

        let rows = repo.find_linked_stations(&zoe()).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].station_id, "B1");
        assert_eq!(rows[0].city, "Lyon");
        assert_eq!(rows[0].address, "12 rue de la République");
    }

    #[tokio::test]
    async fn insert_links_every_station_of_the_charge_type() {
        let db = fixture_db().await;
        let repo = SeaOrmVehicleRepository::new(db.clone());
        let v = tesla();

        let mut linked = repo.insert_with_links(v.clone(), "CCS").await.unwrap();
        linked.sort();

        assert_eq!(linked, vec!["B2", "B3"]);
        assert_eq!(repo.count(&v.key).await.unwrap(), 1);
        assert_eq!(link_count(&db, &v.key).await, 2);

        let stored = vehicle::Entity::find_by_id(("Tesla".to_string(), "Model 3".to_string()))
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.color, "Rouge");

        let rows = sorted(repo.find_linked_stations(&v.key).await.unwrap(), |r| {
            r.station_id.clone()
        });
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].station_id, "B2");
        assert_eq!(rows[1].station_id, "B3");
    }

    #[tokio::test]
    async fn insert_with_unmatched_charge_type_creates_vehicle_only() {
        let db = fixture_db().await;
        let repo = SeaOrmVehicleRepository::new(db.clone());
        let v = tesla();

        let linked = repo.insert_with_links(v.clone(), "Type 3").await.unwrap();

        assert!(linked.is_empty());
        assert_eq!(repo.count(&v.key).await.unwrap(), 1);
        assert_eq!(link_count(&db, &v.key).await, 0);
    }

    #[tokio::test]
    async fn registering_twice_conflicts_and_writes_nothing() {
        let db = fixture_db().await;
        let repo = SeaOrmVehicleRepository::new(db.clone());

        let err = repo
            .insert_with_links(
                NewVehicle {
                    key: zoe(),
                    color: "Vert".to_string(),
                },
                "CCS",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(link_count(&db, &zoe()).await, 1);
        let stored = vehicle::Entity::find_by_id(("Renault".to_string(), "Zoe".to_string()))
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.color, "Bleu");
    }

    #[tokio::test]
    async fn failing_link_rolls_back_the_vehicle() {
        let db = fixture_db().await;
        db.execute_unprepared(
            "CREATE TRIGGER reject_b3_link BEFORE INSERT ON RechargeBases \
             WHEN NEW.numero_bornebase = 'B3' \
             BEGIN SELECT RAISE(ABORT, 'B3 is closed'); END;",
        )
        .await
        .unwrap();
        let repo = SeaOrmVehicleRepository::new(db.clone());
        let v = tesla();

        let err = repo.insert_with_links(v.clone(), "CCS").await.unwrap_err();

        assert!(matches!(err, DomainError::Storage(_)));
        assert_eq!(repo.count(&v.key).await.unwrap(), 0);
        assert_eq!(link_count(&db, &v.key).await, 0);
    }

    #[tokio::test]
    async fn link_to_missing_vehicle_is_rejected() {
        let db = fixture_db().await;

        let err = compatibility::Entity::insert(compatibility::ActiveModel {
            brand: Set("Ghost".to_string()),
            model_name: Set("None".to_string()),
            station_id: Set("B1".to_string()),
        })
        .exec_without_returning(&db)
        .await
        .unwrap_err();

        assert!(matches!(DomainError::from(err), DomainError::Integrity(_)));
    }
}
