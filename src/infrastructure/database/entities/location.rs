//! Location entity (`Locations`), 1:1 with a station

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Locations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "numero_bornebase")]
    pub station_id: String,

    #[sea_orm(column_name = "ville_location")]
    pub city: String,

    #[sea_orm(column_name = "adresse_location")]
    pub address: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::station::Entity",
        from = "Column::StationId",
        to = "super::station::Column::Id"
    )]
    Station,
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Station.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
