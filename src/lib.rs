//! Insurance company service - HTTP API over a document store

pub mod core;
pub mod dtos;
pub mod entities;
pub mod repositories;
pub mod services;

pub use crate::core::{AppError, AppState, auth, config};
pub use services::root;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Builds the main router of the application
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest(
            "/insurance_company",
            configure_insurance_company_routes(state.clone()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Routes of the insurance companies; everything but creation requires a token
fn configure_insurance_company_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    use crate::core::authentication_middleware;
    use crate::services::*;

    let public_routes = Router::new().route("/", post(create_insurance_company));

    let protected_routes = Router::new()
        .route("/finder", get(insurance_company_finder))
        .route(
            "/{insurance_company_id}",
            get(get_insurance_company_by_id)
                .put(update_insurance_company)
                .delete(delete_insurance_company),
        )
        .route(
            "/{insurance_company_id}/status",
            put(update_insurance_company_status),
        )
        .route(
            "/{insurance_company_id}/soft_delete",
            put(soft_delete_insurance_company),
        )
        .layer(middleware::from_fn_with_state(
            state,
            authentication_middleware,
        ));

    public_routes.merge(protected_routes)
}
