//! Compatibility link entity (`RechargeBases`)
//!
//! Many-to-many between vehicles and the stations they may charge at.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "RechargeBases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "marque_voiture")]
    pub brand: String,

    #[sea_orm(primary_key, auto_increment = false, column_name = "modele_voiture")]
    pub model_name: String,

    #[sea_orm(primary_key, auto_increment = false, column_name = "numero_bornebase")]
    pub station_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::vehicle::Entity",
        from = "(Column::Brand, Column::ModelName)",
        to = "(super::vehicle::Column::Brand, super::vehicle::Column::ModelName)"
    )]
    Vehicle,
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id"
    )]
    Station,
    /// Join path to the priced view
    #[sea_orm(
        belongs_to = "super::station_price::Entity",
        from = "Column::StationId",
        to = "super::station_price::Column::Id"
    )]
    StationPrice,
}

impl Related<super::vehicle::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Vehicle.def()
    }
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl Related<super::station_price::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StationPrice.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
