//! Company entity (`Entreprises`)

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Entreprises")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false, column_name = "nom_entreprise")]
    pub name: String,

    #[sea_orm(column_name = "courriel_entreprise")]
    pub email: String,

    #[sea_orm(column_name = "numTel_entreprise")]
    pub phone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::station::Entity")]
    Stations,
}

impl Related<super::station::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
