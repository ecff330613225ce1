//! Query DTOs - query string parameters of the insurance company endpoints

use super::pagination::{PaginationRequest, default_docs_per_page, default_page_number};
use serde::{Deserialize, Serialize};

/// Query parameters of `GET /insurance_company/finder`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FinderQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default = "default_page_number")]
    pub page_number: i64,
    #[serde(default = "default_docs_per_page")]
    pub docs_per_page: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl FinderQuery {
    pub fn pagination(&self) -> PaginationRequest {
        PaginationRequest::new(self.page_number, self.docs_per_page)
    }

    pub fn filter(&self) -> InsuranceCompanyFilterQuery {
        InsuranceCompanyFilterQuery {
            search: non_blank(&self.search),
            name: non_blank(&self.name),
            last_name: non_blank(&self.last_name),
            email: non_blank(&self.email),
            phone: non_blank(&self.phone),
            deleted: self.deleted,
        }
    }
}

// an empty or whitespace-only `?name=` means the filter was not supplied,
// any other term is kept as sent
fn non_blank(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}

/// Sparse filter over insurance companies
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct InsuranceCompanyFilterQuery {
    pub search: Option<String>,
    pub name: Option<String>,
    /// Accepted from the client, there is no discrete `last_name` filter
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// `false` selects the live view, `true` the deleted view
    pub deleted: bool,
}

/// Query parameters of `PUT /insurance_company/{id}/status`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StatusQuery {
    pub status: String,
}

/// Query parameters of `PUT /insurance_company/{id}/soft_delete`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SoftDeleteQuery {
    #[serde(default = "default_deleted")]
    pub deleted: bool,
}

fn default_deleted() -> bool {
    true
}
