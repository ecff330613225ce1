//! Repositories module - data access for every collection of the project
//!
//! The store is reached through [`DocumentCollection`]; predicates built by the
//! repositories are store agnostic and rendered by each implementation.

pub mod filter;
pub mod insurance_company;
pub mod memory;
pub mod mongo;
pub mod predicate;
pub mod traits;

pub use filter::{build_filter, deleted_filter};
pub use insurance_company::InsuranceCompanyRepository;
pub use memory::MemoryCollection;
pub use mongo::MongoCollection;
pub use predicate::Predicate;
pub use traits::{Create, Delete, DocumentCollection, StoreError, StoreResult, Update};

use crate::core::Config;
use crate::entities::COLLECTION_NAME;
use std::sync::Arc;
use tracing::{info, warn};

/// URL scheme selecting the in-process collection
pub const MEMORY_URL_SCHEME: &str = "memory://";

/// Opens the insurance company collection described by the configuration
pub async fn connect_collection(config: &Config) -> StoreResult<Arc<dyn DocumentCollection>> {
    if config.database_url.starts_with(MEMORY_URL_SCHEME) {
        warn!("Using the in-memory store, data is lost on shutdown");
        return Ok(Arc::new(MemoryCollection::new()));
    }

    let collection = MongoCollection::connect(
        &config.database_url,
        &config.database_name,
        COLLECTION_NAME,
        config.max_connections,
    )
    .await?;
    info!("Collection {} ready", COLLECTION_NAME);
    Ok(Arc::new(collection))
}
