//! Services module - HTTP handlers
//!
//! Each sub-module holds the endpoints of one resource.

pub mod insurance_company;

pub use insurance_company::{
    create_insurance_company, delete_insurance_company, get_insurance_company_by_id,
    insurance_company_finder, soft_delete_insurance_company, update_insurance_company,
    update_insurance_company_status,
};

use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

/// Root endpoint - health check
pub async fn root(State(_state): State<Arc<AppState>>) -> impl IntoResponse {
    (StatusCode::OK, "Server is running!")
}
