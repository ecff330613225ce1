//! Entities module - domain entities
//!
//! Each entity mirrors the document shape persisted in a collection of the store.

pub mod enums;
pub mod insurance_company;

pub use enums::{Status, UnknownStatus};
pub use insurance_company::{COLLECTION_NAME, InsuranceCompany, NewInsuranceCompany};
