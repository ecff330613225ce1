//! InsuranceCompany entity - document shape stored in the `insurance_company` collection

use super::Status;
use bson::oid::ObjectId;
use bson::{Bson, DateTime};
use serde::{Deserialize, Serialize};

/// Name of the collection holding the insurance companies
pub const COLLECTION_NAME: &str = "insurance_company";

/// Stored insurance company, as read back from the collection
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InsuranceCompany {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub insurer_custom_name: String,
    pub name: String,
    pub email: String,
    pub phones: String,
    pub fax: String,
    pub direction: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub business_line: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime>,
    #[serde(default)]
    pub updated_at: Option<DateTime>,
    /// Soft delete marker: `false` or missing when live, a datetime once deleted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_at: Option<Bson>,
}

/// Document inserted on creation, the `_id` is assigned by the store
#[derive(Serialize, Debug, Clone)]
pub struct NewInsuranceCompany {
    pub insurer_custom_name: String,
    pub name: String,
    pub email: String,
    pub phones: String,
    pub fax: String,
    pub direction: String,
    pub status: Status,
    pub business_line: Vec<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}
