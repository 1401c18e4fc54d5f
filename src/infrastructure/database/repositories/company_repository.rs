//! SeaORM implementation of CompanyRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QuerySelect, RelationTrait,
};

use crate::domain::company::{CompanyContact, CompanyRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{company, station};

pub struct SeaOrmCompanyRepository {
    db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromQueryResult)]
struct CompanyContactRow {
    company_name: String,
    email: String,
    phone: String,
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn find_contact_for_station(
        &self,
        station_id: &str,
    ) -> DomainResult<Vec<CompanyContact>> {
        let rows = station::Entity::find()
            .select_only()
            .column_as(company::Column::Name, "company_name")
            .column_as(company::Column::Email, "email")
            .column_as(company::Column::Phone, "phone")
            .join(JoinType::InnerJoin, station::Relation::Company.def())
            .filter(station::Column::Id.eq(station_id))
            .into_model::<CompanyContactRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|r| CompanyContact {
                company_name: r.company_name,
                email: r.email,
                phone: r.phone,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::testing::fixture_db;

    #[tokio::test]
    async fn contact_of_maintaining_company() {
        let repo = SeaOrmCompanyRepository::new(fixture_db().await);

        let rows = repo.find_contact_for_station("B3").await.unwrap();
        assert_eq!(
            rows,
            vec![CompanyContact {
                company_name: "VoltServices".to_string(),
                email: "support@voltservices.fr".to_string(),
                phone: "0144556677".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn unknown_station_has_no_contact() {
        let repo = SeaOrmCompanyRepository::new(fixture_db().await);
        assert!(repo.find_contact_for_station("B99").await.unwrap().is_empty());
    }
}
