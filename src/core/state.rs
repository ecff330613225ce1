//! Application State - shared state of the application
//!
//! Holds the repositories and the configuration needed by the handlers.

use crate::repositories::{DocumentCollection, InsuranceCompanyRepository};
use std::sync::Arc;

/// State shared by every route and middleware
pub struct AppState {
    /// Repository for the insurance companies
    pub insurance_company: InsuranceCompanyRepository,

    /// Secret key for the JWT tokens
    pub jwt_secret: String,
}

impl AppState {
    /// Builds the state on top of the collection opened at startup
    ///
    /// # Arguments
    /// * `collection` - Insurance company collection, shared by every request
    /// * `jwt_secret` - Secret key used to verify the JWT tokens
    pub fn new(collection: Arc<dyn DocumentCollection>, jwt_secret: String) -> Self {
        Self {
            insurance_company: InsuranceCompanyRepository::new(collection),
            jwt_secret,
        }
    }
}
