use async_trait::async_trait;

use super::model::CompanyContact;
use crate::domain::DomainResult;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_contact_for_station(&self, station_id: &str)
        -> DomainResult<Vec<CompanyContact>>;
}
