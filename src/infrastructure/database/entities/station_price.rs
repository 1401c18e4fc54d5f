//! Priced station view (`Bornes`)
//!
//! Read-only. `prixActuel_borne` is computed by the view with the
//! host-registered `power` function, so every query touching this entity
//! needs a connection opened through `init_database`.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "Bornes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "numero_bornebase")]
    pub id: String,

    #[sea_orm(column_name = "typeRecharge_typebornebase")]
    pub charge_type: String,

    #[sea_orm(column_name = "nom_entreprise")]
    pub company_name: String,

    #[sea_orm(column_name = "prixActuel_borne")]
    pub current_price: f64,
}

// Join paths only; the view carries no constraints.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::Id",
        to = "super::location::Column::StationId"
    )]
    Location,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
