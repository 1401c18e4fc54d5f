//! SeaORM implementation of StationRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QuerySelect, RelationTrait, Select, TransactionTrait,
};

use crate::domain::station::{RemovalSummary, StationListing, StationLocation, StationRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{compatibility, location, station, station_price};

pub struct SeaOrmStationRepository {
    db: DatabaseConnection,
}

impl SeaOrmStationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Row shapes ──────────────────────────────────────────────────

#[derive(Debug, FromQueryResult)]
pub(crate) struct StationListingRow {
    station_id: String,
    city: String,
    address: String,
    price: f64,
}

impl From<StationListingRow> for StationListing {
    fn from(r: StationListingRow) -> Self {
        StationListing {
            station_id: r.station_id,
            city: r.city,
            address: r.address,
            price: r.price,
        }
    }
}

pub(crate) fn into_listings(rows: Vec<StationListingRow>) -> Vec<StationListing> {
    rows.into_iter().map(StationListing::from).collect()
}

/// `Bornes ⋈ Locations` projected to (station_id, city, address); the caller
/// picks the price column.
fn priced_with_location() -> Select<station_price::Entity> {
    station_price::Entity::find()
        .select_only()
        .column_as(station_price::Column::Id, "station_id")
        .column_as(location::Column::City, "city")
        .column_as(location::Column::Address, "address")
        .join(JoinType::InnerJoin, station_price::Relation::Location.def())
}

// ── StationRepository impl ──────────────────────────────────────

#[async_trait]
impl StationRepository for SeaOrmStationRepository {
    async fn list_with_price_and_address(&self) -> DomainResult<Vec<StationListing>> {
        let rows = priced_with_location()
            .column_as(station_price::Column::CurrentPrice, "price")
            .into_model::<StationListingRow>()
            .all(&self.db)
            .await?;
        Ok(into_listings(rows))
    }

    async fn find_by_charge_type(&self, charge_type: &str) -> DomainResult<Vec<StationListing>> {
        let rows = priced_with_location()
            .column_as(station_price::Column::CurrentPrice, "price")
            .filter(station_price::Column::ChargeType.eq(charge_type))
            .into_model::<StationListingRow>()
            .all(&self.db)
            .await?;
        Ok(into_listings(rows))
    }

    async fn find_distinct_by_charge_type(
        &self,
        charge_type: &str,
    ) -> DomainResult<Vec<StationListing>> {
        let rows = priced_with_location()
            .column_as(Expr::cust(r#"ROUND("Bornes"."prixActuel_borne", 2)"#), "price")
            .distinct()
            .filter(station_price::Column::ChargeType.eq(charge_type))
            .into_model::<StationListingRow>()
            .all(&self.db)
            .await?;
        Ok(into_listings(rows))
    }

    async fn find_location(&self, station_id: &str) -> DomainResult<Option<StationLocation>> {
        let model = location::Entity::find_by_id(station_id.to_string())
            .one(&self.db)
            .await?;
        Ok(model.map(|m| StationLocation {
            station_id: m.station_id,
            city: m.city,
            address: m.address,
        }))
    }

    async fn update_location(
        &self,
        station_id: &str,
        address: &str,
        city: &str,
    ) -> DomainResult<u64> {
        debug!("Updating location of station {}", station_id);

        let res = location::Entity::update_many()
            .col_expr(location::Column::Address, Expr::value(address))
            .col_expr(location::Column::City, Expr::value(city))
            .filter(location::Column::StationId.eq(station_id))
            .exec(&self.db)
            .await?;
        Ok(res.rows_affected)
    }

    async fn remove(&self, station_id: &str) -> DomainResult<RemovalSummary> {
        debug!("Removing station {}", station_id);

        // Children before parent: links, then location, then the station.
        let txn = self.db.begin().await?;

        let links = compatibility::Entity::delete_many()
            .filter(compatibility::Column::StationId.eq(station_id))
            .exec(&txn)
            .await?
            .rows_affected;

        let locations = location::Entity::delete_many()
            .filter(location::Column::StationId.eq(station_id))
            .exec(&txn)
            .await?
            .rows_affected;

        let stations = station::Entity::delete_many()
            .filter(station::Column::Id.eq(station_id))
            .exec(&txn)
            .await?
            .rows_affected;

        txn.commit().await?;

        Ok(RemovalSummary {
            links,
            locations,
            stations,
        })
    }
}
