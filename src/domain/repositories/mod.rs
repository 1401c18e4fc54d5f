//! Repository access for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::company::CompanyRepository;
use super::station::StationRepository;
use super::vehicle::VehicleRepository;
use crate::support::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let rows = repos.stations().find_by_charge_type("Type 2").await?;
///     let known = repos.vehicles().count(&key).await? > 0;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn stations(&self) -> &dyn StationRepository;
    fn vehicles(&self) -> &dyn VehicleRepository;
    fn companies(&self) -> &dyn CompanyRepository;
}
