//! Company aggregate (station maintainers)

pub mod model;
pub mod repository;

pub use model::CompanyContact;
pub use repository::CompanyRepository;
