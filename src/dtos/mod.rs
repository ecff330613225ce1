//! DTOs module - Data Transfer Objects
//!
//! DTOs separate the external (API) representation from the stored entities.

pub mod insurance_company;
pub mod pagination;
pub mod query;
pub mod response;

pub use insurance_company::{
    CreateInsuranceCompanyDTO, DeleteMarker, DeletedDTO, InsuranceCompanyDTO, StatusDTO,
    UpdateInsuranceCompanyDTO,
};
pub use pagination::{PageResult, PaginationRequest, paginate};
pub use query::{FinderQuery, InsuranceCompanyFilterQuery, SoftDeleteQuery, StatusQuery};
pub use response::{ApiResponse, StatusTag};
