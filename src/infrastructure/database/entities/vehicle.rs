//! Vehicle entity (`Voitures`)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Voitures")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "marque_voiture")]
    pub brand: String,

    #[sea_orm(primary_key, auto_increment = false, column_name = "modele_voiture")]
    pub model_name: String,

    #[sea_orm(column_name = "couleur_voiture")]
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::compatibility::Entity")]
    CompatibilityLinks,
}

impl Related<super::compatibility::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompatibilityLinks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
