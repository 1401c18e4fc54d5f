//! Create RechargeBases table (vehicle <-> station compatibility)

use sea_orm_migration::prelude::*;

use super::m20240101_000002_create_borne_bases::BorneBases;
use super::m20240101_000004_create_voitures::Voitures;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RechargeBases::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RechargeBases::MarqueVoiture).string().not_null())
                    .col(ColumnDef::new(RechargeBases::ModeleVoiture).string().not_null())
                    .col(ColumnDef::new(RechargeBases::NumeroBornebase).string().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk_rechargebases")
                            .col(RechargeBases::MarqueVoiture)
                            .col(RechargeBases::ModeleVoiture)
                            .col(RechargeBases::NumeroBornebase),
                    )
                    // No cascades: removing a station must delete its links first.
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rechargebases_voiture")
                            .from(
                                RechargeBases::Table,
                                (RechargeBases::MarqueVoiture, RechargeBases::ModeleVoiture),
                            )
                            .to(
                                Voitures::Table,
                                (Voitures::MarqueVoiture, Voitures::ModeleVoiture),
                            ),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rechargebases_bornebase")
                            .from(RechargeBases::Table, RechargeBases::NumeroBornebase)
                            .to(BorneBases::Table, BorneBases::NumeroBornebase),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rechargebases_bornebase")
                    .table(RechargeBases::Table)
                    .col(RechargeBases::NumeroBornebase)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RechargeBases::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RechargeBases {
    #[iden = "RechargeBases"]
    Table,
    MarqueVoiture,
    ModeleVoiture,
    NumeroBornebase,
}
