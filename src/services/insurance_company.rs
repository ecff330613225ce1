//! Insurance company services - HTTP handlers of `/insurance_company`

use crate::core::{AppError, AppState};
use crate::dtos::{
    ApiResponse, CreateInsuranceCompanyDTO, DeletedDTO, FinderQuery, InsuranceCompanyDTO,
    PageResult, SoftDeleteQuery, StatusDTO, StatusQuery, UpdateInsuranceCompanyDTO,
};
use crate::entities::Status;
use crate::repositories::{Create, Delete, Update};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Path, Query, State};
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use validator::Validate;

fn parse_id(insurance_company_id: &str) -> Result<ObjectId, AppError> {
    Ok(ObjectId::parse_str(insurance_company_id)?)
}

#[instrument(skip(state, payload))]
pub async fn create_insurance_company(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateInsuranceCompanyDTO>, JsonRejection>,
) -> Result<ApiResponse<InsuranceCompanyDTO>, AppError> {
    debug!("Creating insurance company");
    // 1. Read and validate the body
    // 2. Store the record, the status is always Pending
    // 3. Return the record read back from the store
    let Json(body) = payload?;
    body.validate()?;

    let created = state.insurance_company.create(&body).await?;
    info!("Insurance company {} created", created.id);
    Ok(ApiResponse::success("Data saved successfully.", created))
}

#[instrument(skip(state, query))]
pub async fn insurance_company_finder(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FinderQuery>, QueryRejection>, // /insurance_company/finder?search=...&page_number=...
) -> Result<ApiResponse<PageResult<InsuranceCompanyDTO>>, AppError> {
    let Query(params) = query?;
    let pagination = params.pagination();
    pagination.validate()?;

    let filter = params.filter();
    debug!(?filter, "Searching insurance companies");
    if filter.search.is_none() && filter.last_name.is_some() {
        debug!("last_name has no discrete filter and is ignored");
    }

    let page = state.insurance_company.search(&pagination, &filter).await?;
    Ok(ApiResponse::success("Data retrieved successfully.", page))
}

#[instrument(skip(state), fields(insurance_company_id = %insurance_company_id))]
pub async fn get_insurance_company_by_id(
    State(state): State<Arc<AppState>>,
    Path(insurance_company_id): Path<String>,
) -> Result<ApiResponse<Vec<InsuranceCompanyDTO>>, AppError> {
    let id = parse_id(&insurance_company_id)?;
    let companies = state.insurance_company.find_by_id(&id).await?;
    debug!("Found {} insurance companies", companies.len());
    Ok(ApiResponse::success("Data retrieved successfully.", companies))
}

#[instrument(skip(state, payload), fields(insurance_company_id = %insurance_company_id))]
pub async fn update_insurance_company(
    State(state): State<Arc<AppState>>,
    Path(insurance_company_id): Path<String>,
    payload: Result<Json<UpdateInsuranceCompanyDTO>, JsonRejection>,
) -> Result<ApiResponse<InsuranceCompanyDTO>, AppError> {
    let id = parse_id(&insurance_company_id)?;
    let Json(body) = payload?;
    body.validate()?;

    let company = state.insurance_company.update(&id, &body).await?;
    Ok(ApiResponse::success("Data updated successfully.", company))
}

#[instrument(skip(state, query), fields(insurance_company_id = %insurance_company_id))]
pub async fn update_insurance_company_status(
    State(state): State<Arc<AppState>>,
    Path(insurance_company_id): Path<String>,
    query: Result<Query<StatusQuery>, QueryRejection>, // ?status=Active
) -> Result<ApiResponse<StatusDTO>, AppError> {
    let id = parse_id(&insurance_company_id)?;
    let Query(params) = query?;
    let status: Status = params.status.parse()?;

    let updated = state.insurance_company.update_status(&id, status).await?;
    Ok(ApiResponse::success("Data updated successfully.", updated))
}

#[instrument(skip(state, query), fields(insurance_company_id = %insurance_company_id))]
pub async fn soft_delete_insurance_company(
    State(state): State<Arc<AppState>>,
    Path(insurance_company_id): Path<String>,
    query: Result<Query<SoftDeleteQuery>, QueryRejection>, // ?deleted=true|false
) -> Result<ApiResponse<InsuranceCompanyDTO>, AppError> {
    let id = parse_id(&insurance_company_id)?;
    let Query(params) = query?;

    let company = state
        .insurance_company
        .soft_delete(&id, params.deleted)
        .await?;
    Ok(ApiResponse::success("Data updated successfully.", company))
}

#[instrument(skip(state), fields(insurance_company_id = %insurance_company_id))]
pub async fn delete_insurance_company(
    State(state): State<Arc<AppState>>,
    Path(insurance_company_id): Path<String>,
) -> Result<ApiResponse<DeletedDTO>, AppError> {
    let id = parse_id(&insurance_company_id)?;
    state.insurance_company.delete(&id).await?;
    Ok(ApiResponse::success(
        "Data deleted successfully.",
        DeletedDTO {
            message: "Insurance company deleted successfully".to_string(),
        },
    ))
}
