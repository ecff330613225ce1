//! InsuranceCompany DTOs - Data Transfer Objects for insurance companies

use crate::entities::{InsuranceCompany, Status};
use bson::Bson;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Soft delete marker as exposed to the client
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DeleteMarker {
    Flag(bool),
    At(DateTime<Utc>),
    Other(serde_json::Value),
}

impl DeleteMarker {
    /// `None` when the stored marker is null, so it is left out of the output
    pub fn from_bson(value: Bson) -> Option<Self> {
        match value {
            Bson::Null => None,
            Bson::Boolean(flag) => Some(Self::Flag(flag)),
            Bson::DateTime(at) => Some(Self::At(at.to_chrono())),
            other => Some(Self::Other(other.into_relaxed_extjson())),
        }
    }
}

/// Normalized record returned to the client: the store `_id` becomes a string `id`
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InsuranceCompanyDTO {
    pub id: String,
    pub insurer_custom_name: String,
    pub name: String,
    pub email: String,
    pub phones: String,
    pub fax: String,
    pub direction: String,
    pub status: Status,
    pub business_line: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delete_at: Option<DeleteMarker>,
}

impl From<InsuranceCompany> for InsuranceCompanyDTO {
    fn from(value: InsuranceCompany) -> Self {
        Self {
            id: value.id.to_hex(),
            insurer_custom_name: value.insurer_custom_name,
            name: value.name,
            email: value.email,
            phones: value.phones,
            fax: value.fax,
            direction: value.direction,
            status: value.status,
            business_line: value.business_line,
            created_at: value.created_at.map(|at| at.to_chrono()),
            updated_at: value.updated_at.map(|at| at.to_chrono()),
            delete_at: value.delete_at.and_then(DeleteMarker::from_bson),
        }
    }
}

/// Body of `POST /insurance_company`
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateInsuranceCompanyDTO {
    #[validate(length(min = 1, message = "insurer_custom_name must not be empty"))]
    pub insurer_custom_name: String,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub email: String,
    pub phones: String,
    pub fax: String,
    pub direction: String,
    /// Accepted for compatibility, creation always stores `Pending`
    #[serde(default)]
    pub status: Option<Status>,
    pub business_line: Vec<String>,
}

/// Body of `PUT /insurance_company/{id}`, only the supplied fields are changed
///
/// Status and delete marker have their own endpoints and are not part of it.
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateInsuranceCompanyDTO {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "insurer_custom_name must not be empty"))]
    pub insurer_custom_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_line: Option<Vec<String>>,
}

/// Result of a status update
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusDTO {
    pub id: String,
    pub status: Status,
}

/// Confirmation of a permanent deletion
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeletedDTO {
    pub message: String,
}
