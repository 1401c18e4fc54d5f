use serde::Serialize;

/// Contact details of the company maintaining a station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyContact {
    pub company_name: String,
    pub email: String,
    pub phone: String,
}
