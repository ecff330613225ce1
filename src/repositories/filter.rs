//! Filter builder for the insurance company finder

use super::predicate::Predicate;
use crate::dtos::InsuranceCompanyFilterQuery;

/// Fields searched by the free-text `search` term
pub const SEARCH_FIELDS: [&str; 4] = ["first_name", "last_name", "email", "phone"];

/// Soft delete marker field
pub const DELETE_MARKER: &str = "delete_at";

/// Builds the finder predicate.
///
/// A `search` term produces an OR over [`SEARCH_FIELDS`] and the discrete
/// filters are ignored. Without it, each supplied discrete filter (`name`,
/// `email`, `phone`) must match. The soft delete view is always added.
pub fn build_filter(filter: &InsuranceCompanyFilterQuery) -> Predicate {
    let mut clauses = Vec::new();

    if let Some(term) = &filter.search {
        clauses.push(Predicate::Or(
            SEARCH_FIELDS
                .iter()
                .map(|field| Predicate::contains(*field, term.as_str()))
                .collect(),
        ));
    } else {
        let discrete = [
            ("name", &filter.name),
            ("email", &filter.email),
            ("phone", &filter.phone),
        ];
        clauses.extend(
            discrete
                .into_iter()
                .filter_map(|(field, value)| {
                    value.as_deref().map(|term| Predicate::contains(field, term))
                }),
        );
    }

    clauses.push(deleted_filter(filter.deleted));
    Predicate::And(clauses)
}

/// Live view: marker `!= false`. Deleted view: marker missing or null.
///
/// This is inverted compared to the marker values written by a soft delete
/// (a timestamp when deleted, `false` when restored) and is kept as the
/// stored data expects it.
pub fn deleted_filter(deleted: bool) -> Predicate {
    if deleted {
        Predicate::is_null(DELETE_MARKER)
    } else {
        Predicate::ne(DELETE_MARKER, false)
    }
}
