//! Create Voitures table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Voitures::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Voitures::MarqueVoiture).string().not_null())
                    .col(ColumnDef::new(Voitures::ModeleVoiture).string().not_null())
                    .col(ColumnDef::new(Voitures::CouleurVoiture).string().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_voitures")
                            .col(Voitures::MarqueVoiture)
                            .col(Voitures::ModeleVoiture),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Voitures::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Voitures {
    #[iden = "Voitures"]
    Table,
    MarqueVoiture,
    ModeleVoiture,
    CouleurVoiture,
}
