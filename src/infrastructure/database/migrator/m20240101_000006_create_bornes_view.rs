//! Create the Bornes view (stations with their current price)
//!
//! The price is indexed once per elapsed period:
//! `prixBase_borne * power(1 + tauxIndexation_borne, periodes_borne)`.
//! SQLite has no built-in `power`; the view only resolves on connections
//! that registered it (see `infrastructure::database::functions`).

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

const CREATE_VIEW: &str = r#"
CREATE VIEW IF NOT EXISTS Bornes AS
SELECT
    numero_bornebase,
    typeRecharge_typebornebase,
    nom_entreprise,
    prixBase_borne * power(1 + tauxIndexation_borne, periodes_borne) AS prixActuel_borne
FROM BorneBases
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(CREATE_VIEW)
            .await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP VIEW IF EXISTS Bornes")
            .await?;
        Ok(())
    }
}
