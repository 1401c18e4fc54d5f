//! Station entity (`BorneBases`)
//!
//! Base pricing data only. The current price lives in the `Bornes` view,
//! see [`super::station_price`].

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "BorneBases")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "numero_bornebase")]
    pub id: String,

    /// Free-text classifier, e.g. "Type 2", "CCS", "CHAdeMO"
    #[sea_orm(column_name = "typeRecharge_typebornebase")]
    pub charge_type: String,

    #[sea_orm(column_name = "prixBase_borne")]
    pub base_price: f64,

    /// Indexation rate applied once per period
    #[sea_orm(column_name = "tauxIndexation_borne")]
    pub indexation_rate: f64,

    #[sea_orm(column_name = "periodes_borne")]
    pub periods: i32,

    #[sea_orm(column_name = "nom_entreprise")]
    pub company_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::company::Entity",
        from = "Column::CompanyName",
        to = "super::company::Column::Name"
    )]
    Company,
    #[sea_orm(has_one = "super::location::Entity")]
    Location,
    #[sea_orm(has_many = "super::compatibility::Entity")]
    CompatibilityLinks,
}

impl Related<super::company::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Company.def()
    }
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::compatibility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompatibilityLinks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
