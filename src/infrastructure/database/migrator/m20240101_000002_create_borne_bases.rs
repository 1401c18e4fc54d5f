//! Create BorneBases table

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_entreprises::Entreprises;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BorneBases::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BorneBases::NumeroBornebase)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BorneBases::TypeRechargeTypebornebase)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BorneBases::PrixBaseBorne).double().not_null())
                    .col(
                        ColumnDef::new(BorneBases::TauxIndexationBorne)
                            .double()
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(BorneBases::PeriodesBorne)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(BorneBases::NomEntreprise).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bornebases_entreprise")
                            .from(BorneBases::Table, BorneBases::NomEntreprise)
                            .to(Entreprises::Table, Entreprises::NomEntreprise),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bornebases_type_recharge")
                    .table(BorneBases::Table)
                    .col(BorneBases::TypeRechargeTypebornebase)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BorneBases::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum BorneBases {
    #[iden = "BorneBases"]
    Table,
    NumeroBornebase,
    #[iden = "typeRecharge_typebornebase"]
    TypeRechargeTypebornebase,
    #[iden = "prixBase_borne"]
    PrixBaseBorne,
    #[iden = "tauxIndexation_borne"]
    TauxIndexationBorne,
    PeriodesBorne,
    NomEntreprise,
}
