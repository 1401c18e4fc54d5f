//! Create Locations table (1:1 with BorneBases)

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_borne_bases::BorneBases;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Locations::NumeroBornebase)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Locations::VilleLocation).string().not_null())
                    .col(ColumnDef::new(Locations::AdresseLocation).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_locations_bornebase")
                            .from(Locations::Table, Locations::NumeroBornebase)
                            .to(BorneBases::Table, BorneBases::NumeroBornebase),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Locations {
    #[iden = "Locations"]
    Table,
    NumeroBornebase,
    VilleLocation,
    AdresseLocation,
}
