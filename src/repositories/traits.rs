//! Common repository traits
//!
//! This module defines the store boundary and the generic interfaces used by
//! the repositories built on top of it.

use super::predicate::Predicate;
use async_trait::async_trait;
use bson::Document;
use bson::oid::ObjectId;

/// Errors raised by the store and by the repositories
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Insurance company not found")]
    NotFound,
    #[error("The store did not assign an ObjectId to the inserted document")]
    MissingId,
    #[error("Inserted document {0} could not be read back")]
    ReadBack(ObjectId),
    #[error("Database error: {0}")]
    Driver(#[from] mongodb::error::Error),
    #[error("Could not encode document: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("Could not decode document: {0}")]
    Decode(#[from] bson::de::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// A collection of BSON documents
///
/// Implementations must be safe for concurrent use; `find_one_and_set` is
/// atomic with respect to other calls on the same collection.
#[async_trait]
pub trait DocumentCollection: Send + Sync {
    /// Inserts a document and returns the identifier assigned to it
    async fn insert_one(&self, document: Document) -> StoreResult<ObjectId>;

    /// Documents matching `filter` in natural order, skipping `skip` and
    /// returning at most `limit` when given
    async fn find(
        &self,
        filter: &Predicate,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>>;

    async fn count(&self, filter: &Predicate) -> StoreResult<u64>;

    /// Sets `fields` on the first matching document and returns it after the update
    async fn find_one_and_set(
        &self,
        filter: &Predicate,
        fields: Document,
    ) -> StoreResult<Option<Document>>;

    /// Deletes the first matching document and returns how many were deleted
    async fn delete_one(&self, filter: &Predicate) -> StoreResult<u64>;
}

/// Trait for creating new entities in the store
///
/// # Type Parameters
/// * `Entity` - Type of the returned entity (with ID assigned by the store)
/// * `CreateDTO` - DTO for creation (without ID, will be automatically generated)
pub trait Create<Entity, CreateDTO> {
    /// Creates a new entity in the store
    ///
    /// # Returns
    /// * `Ok(Entity)` - Created entity with ID assigned by the store
    /// * `Err(StoreError)` - Error during insertion or while reading it back
    async fn create(&self, data: &CreateDTO) -> StoreResult<Entity>;
}

/// Trait for updating existing entities
///
/// # Type Parameters
/// * `Entity` - Type of the updated entity
/// * `UpdateDTO` - DTO for updating (optional fields for partial updates)
/// * `Id` - Type of the primary key
pub trait Update<Entity, UpdateDTO, Id> {
    /// Updates an existing entity in the store
    ///
    /// # Arguments
    /// * `id` - Primary key of the entity to update
    /// * `data` - DTO containing the fields to update (only `Some(_)` fields are modified)
    ///
    /// # Returns
    /// * `Ok(Entity)` - Updated entity
    /// * `Err(StoreError::NotFound)` - No entity with that ID
    async fn update(&self, id: &Id, data: &UpdateDTO) -> StoreResult<Entity>;
}

/// Trait for permanently deleting entities
///
/// # Type Parameters
/// * `Id` - Type of the primary key
pub trait Delete<Id> {
    /// # Returns
    /// * `Ok(())` - Deletion successful
    /// * `Err(StoreError::NotFound)` - No entity with that ID
    async fn delete(&self, id: &Id) -> StoreResult<()>;
}
