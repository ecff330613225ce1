//! InsuranceCompanyRepository - record service for the insurance companies

use super::filter::{DELETE_MARKER, build_filter};
use super::predicate::Predicate;
use super::traits::{Create, Delete, DocumentCollection, StoreError, StoreResult, Update};
use crate::dtos::{
    CreateInsuranceCompanyDTO, InsuranceCompanyDTO, InsuranceCompanyFilterQuery, PageResult,
    PaginationRequest, StatusDTO, UpdateInsuranceCompanyDTO, paginate,
};
use crate::entities::{InsuranceCompany, NewInsuranceCompany, Status};
use bson::oid::ObjectId;
use bson::{Bson, DateTime, Document, doc};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

// INSURANCE COMPANY REPO
pub struct InsuranceCompanyRepository {
    collection: Arc<dyn DocumentCollection>,
}

impl InsuranceCompanyRepository {
    pub fn new(collection: Arc<dyn DocumentCollection>) -> Self {
        Self { collection }
    }

    fn by_id(id: &ObjectId) -> Predicate {
        Predicate::eq("_id", *id)
    }

    /// Validates a stored document and renders its `_id` as the public `id`
    fn normalize(document: Document) -> StoreResult<InsuranceCompanyDTO> {
        let company: InsuranceCompany = bson::from_document(document)?;
        Ok(InsuranceCompanyDTO::from(company))
    }

    /// All records with the given identifier, zero or one in practice
    #[instrument(skip(self), fields(id = %id))]
    pub async fn find_by_id(&self, id: &ObjectId) -> StoreResult<Vec<InsuranceCompanyDTO>> {
        let documents = self.collection.find(&Self::by_id(id), 0, None).await?;
        debug!("Found {} documents", documents.len());
        documents.into_iter().map(Self::normalize).collect()
    }

    /// Counts the matches of `filter` and returns the requested page window
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        pagination: &PaginationRequest,
        filter: &InsuranceCompanyFilterQuery,
    ) -> StoreResult<PageResult<InsuranceCompanyDTO>> {
        let predicate = build_filter(filter);
        let total_items = self.collection.count(&predicate).await?;
        let documents = self
            .collection
            .find(&predicate, pagination.skip(), Some(pagination.limit()))
            .await?;
        let items = documents
            .into_iter()
            .map(Self::normalize)
            .collect::<StoreResult<Vec<_>>>()?;

        info!(
            "Page {} holds {} of {} matching insurance companies",
            pagination.page(),
            items.len(),
            total_items
        );
        Ok(paginate(
            pagination.page(),
            pagination.limit(),
            total_items,
            items,
        ))
    }

    #[instrument(skip(self), fields(id = %id, status = %status))]
    pub async fn update_status(&self, id: &ObjectId, status: Status) -> StoreResult<StatusDTO> {
        let fields = doc! { "status": status.as_str(), "updated_at": DateTime::now() };
        let updated = self
            .collection
            .find_one_and_set(&Self::by_id(id), fields)
            .await?
            .ok_or_else(|| {
                warn!("Insurance company not found");
                StoreError::NotFound
            })?;

        let company = Self::normalize(updated)?;
        info!("Status updated");
        Ok(StatusDTO {
            id: company.id,
            status: company.status,
        })
    }

    /// Sets the delete marker to now when `deleted`, back to `false` otherwise
    #[instrument(skip(self), fields(id = %id))]
    pub async fn soft_delete(&self, id: &ObjectId, deleted: bool) -> StoreResult<InsuranceCompanyDTO> {
        let now = DateTime::now();
        let marker = if deleted {
            Bson::DateTime(now)
        } else {
            Bson::Boolean(false)
        };

        let mut fields = Document::new();
        fields.insert(DELETE_MARKER, marker);
        fields.insert("updated_at", now);

        let updated = self
            .collection
            .find_one_and_set(&Self::by_id(id), fields)
            .await?
            .ok_or_else(|| {
                warn!("Insurance company not found");
                StoreError::NotFound
            })?;

        info!("Delete marker set");
        Self::normalize(updated)
    }
}

impl Create<InsuranceCompanyDTO, CreateInsuranceCompanyDTO> for InsuranceCompanyRepository {
    #[instrument(skip(self, data), fields(name = %data.name))]
    async fn create(&self, data: &CreateInsuranceCompanyDTO) -> StoreResult<InsuranceCompanyDTO> {
        let now = DateTime::now();
        if data.status.is_some_and(|status| status != Status::Pending) {
            debug!("Ignoring requested status {:?}", data.status);
        }

        let new_company = NewInsuranceCompany {
            insurer_custom_name: data.insurer_custom_name.clone(),
            name: data.name.clone(),
            email: data.email.clone(),
            phones: data.phones.clone(),
            fax: data.fax.clone(),
            direction: data.direction.clone(),
            status: Status::Pending,
            business_line: data.business_line.clone(),
            created_at: now,
            updated_at: now,
        };

        let id = self
            .collection
            .insert_one(bson::to_document(&new_company)?)
            .await?;

        let created = self
            .collection
            .find(&Self::by_id(&id), 0, Some(1))
            .await?
            .into_iter()
            .next()
            .ok_or(StoreError::ReadBack(id))?;

        info!(id = %id, "Insurance company created");
        Self::normalize(created)
    }
}

impl Update<InsuranceCompanyDTO, UpdateInsuranceCompanyDTO, ObjectId>
    for InsuranceCompanyRepository
{
    #[instrument(skip(self, data), fields(id = %id))]
    async fn update(
        &self,
        id: &ObjectId,
        data: &UpdateInsuranceCompanyDTO,
    ) -> StoreResult<InsuranceCompanyDTO> {
        let mut fields = bson::to_document(data)?;

        if fields.is_empty() {
            debug!("No fields to update, returning current insurance company");
            let current = self
                .collection
                .find(&Self::by_id(id), 0, Some(1))
                .await?
                .into_iter()
                .next()
                .ok_or_else(|| {
                    warn!("Insurance company not found");
                    StoreError::NotFound
                })?;
            return Self::normalize(current);
        }

        debug!("Updating fields {:?}", fields.keys().collect::<Vec<_>>());
        fields.insert("updated_at", DateTime::now());
        let updated = self
            .collection
            .find_one_and_set(&Self::by_id(id), fields)
            .await?
            .ok_or_else(|| {
                warn!("Insurance company not found");
                StoreError::NotFound
            })?;

        info!("Insurance company updated");
        Self::normalize(updated)
    }
}

impl Delete<ObjectId> for InsuranceCompanyRepository {
    /// Permanently removes the record, bypassing the soft delete marker
    #[instrument(skip(self), fields(id = %id))]
    async fn delete(&self, id: &ObjectId) -> StoreResult<()> {
        match self.collection.delete_one(&Self::by_id(id)).await? {
            0 => {
                warn!("Insurance company not found");
                Err(StoreError::NotFound)
            }
            _ => {
                info!("Insurance company deleted");
                Ok(())
            }
        }
    }
}
