//! Create Entreprises table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Entreprises::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Entreprises::NomEntreprise)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Entreprises::CourrielEntreprise).string().not_null())
                    .col(ColumnDef::new(Entreprises::NumTelEntreprise).string().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Entreprises::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Entreprises {
    #[iden = "Entreprises"]
    Table,
    NomEntreprise,
    CourrielEntreprise,
    #[iden = "numTel_entreprise"]
    NumTelEntreprise,
}
