//! In-memory stores for unit tests

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;

use super::migrator::Migrator;
use super::seed::apply_script;
use super::{init_database, DatabaseConfig};

/// Four stations: one "Type 2", two "CCS", one "CHAdeMO".
/// Current prices: B1 1.50, B2 2.0 * 1.1^2, B3 1.50, B4 3.00.
/// Renault Zoe is registered and linked to B1 only.
pub const FIXTURE: &str = r#"
INSERT INTO Entreprises (nom_entreprise, courriel_entreprise, numTel_entreprise) VALUES
    ('ElectroMaint', 'contact@electromaint.fr', '0472102030'),
    ('VoltServices', 'support@voltservices.fr', '0144556677');

INSERT INTO BorneBases (numero_bornebase, typeRecharge_typebornebase, prixBase_borne, tauxIndexation_borne, periodes_borne, nom_entreprise) VALUES
    ('B1', 'Type 2', 1.50, 0.0, 0, 'ElectroMaint'),
    ('B2', 'CCS', 2.00, 0.1, 2, 'VoltServices'),
    ('B3', 'CCS', 1.00, 0.5, 1, 'VoltServices'),
    ('B4', 'CHAdeMO', 3.00, 0.0, 0, 'ElectroMaint');

INSERT INTO Locations (numero_bornebase, ville_location, adresse_location) VALUES
    ('B1', 'Lyon', '12 rue de la République'),
    ('B2', 'Paris', '5 avenue Foch'),
    ('B3', 'Toulouse', '8 place du Capitole'),
    ('B4', 'Marseille', '40 quai du Port');

INSERT INTO Voitures (marque_voiture, modele_voiture, couleur_voiture) VALUES
    ('Renault', 'Zoe', 'Bleu');

INSERT INTO RechargeBases (marque_voiture, modele_voiture, numero_bornebase) VALUES
    ('Renault', 'Zoe', 'B1');
"#;

/// Migrated, empty in-memory store.
pub async fn empty_db() -> DatabaseConnection {
    let db = init_database(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    Migrator::up(&db, None).await.expect("migrations");
    db
}

/// Migrated in-memory store loaded with [`FIXTURE`].
pub async fn fixture_db() -> DatabaseConnection {
    let db = empty_db().await;
    apply_script(&db, FIXTURE).await.expect("fixture");
    db
}

/// Sort listing rows by station id; listings carry no ordering guarantee.
pub fn sorted<T, F>(mut rows: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    rows.sort_by_key(|r| key(r));
    rows
}
