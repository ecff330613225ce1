//! Store-agnostic predicates
//!
//! A predicate renders to a MongoDB filter document and can also be evaluated
//! directly against a BSON document. Evaluation follows MongoDB semantics for
//! missing fields: `$ne` matches them and `$eq: null` matches them.

use bson::{Bson, Document, doc};

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Every clause must hold, an empty list matches everything
    And(Vec<Predicate>),
    /// At least one clause must hold, an empty list matches nothing
    Or(Vec<Predicate>),
    /// Case-insensitive substring match, the term is taken literally
    Contains { field: String, term: String },
    Eq { field: String, value: Bson },
    Ne { field: String, value: Bson },
    /// Field is missing or null
    IsNull { field: String },
}

impl Predicate {
    pub fn contains(field: impl Into<String>, term: impl Into<String>) -> Self {
        Predicate::Contains {
            field: field.into(),
            term: term.into(),
        }
    }

    pub fn eq(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Predicate::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn ne(field: impl Into<String>, value: impl Into<Bson>) -> Self {
        Predicate::Ne {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn is_null(field: impl Into<String>) -> Self {
        Predicate::IsNull {
            field: field.into(),
        }
    }

    /// MongoDB filter document
    pub fn to_document(&self) -> Document {
        match self {
            Predicate::And(clauses) => match clauses.as_slice() {
                [] => Document::new(),
                [single] => single.to_document(),
                _ => doc! { "$and": Self::documents(clauses) },
            },
            // `$or` rejects an empty array, `$nor: [{}]` is the filter that matches nothing
            Predicate::Or(clauses) if clauses.is_empty() => doc! { "$nor": [{}] },
            Predicate::Or(clauses) => doc! { "$or": Self::documents(clauses) },
            Predicate::Contains { field, term } => field_condition(
                field,
                doc! { "$regex": regex::escape(term), "$options": "i" },
            ),
            Predicate::Eq { field, value } => field_condition(field, doc! { "$eq": value.clone() }),
            Predicate::Ne { field, value } => field_condition(field, doc! { "$ne": value.clone() }),
            Predicate::IsNull { field } => field_condition(field, doc! { "$eq": Bson::Null }),
        }
    }

    fn documents(clauses: &[Predicate]) -> Vec<Bson> {
        clauses
            .iter()
            .map(|clause| Bson::Document(clause.to_document()))
            .collect()
    }

    /// Evaluates the predicate against a stored document
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Predicate::And(clauses) => clauses.iter().all(|clause| clause.matches(document)),
            Predicate::Or(clauses) => clauses.iter().any(|clause| clause.matches(document)),
            Predicate::Contains { field, term } => {
                let needle = term.to_lowercase();
                candidates(document, field).any(|value| match value {
                    Bson::String(s) => s.to_lowercase().contains(&needle),
                    _ => false,
                })
            }
            Predicate::Eq { field, value } => equals(document, field, value),
            Predicate::Ne { field, value } => !equals(document, field, value),
            Predicate::IsNull { field } => equals(document, field, &Bson::Null),
        }
    }
}

fn field_condition(field: &str, condition: Document) -> Document {
    let mut document = Document::new();
    document.insert(field, condition);
    document
}

// the field itself plus, for arrays, each element
fn candidates<'a>(document: &'a Document, field: &str) -> impl Iterator<Item = &'a Bson> {
    let value = document.get(field);
    let elements = match value {
        Some(Bson::Array(items)) => items.as_slice(),
        _ => &[],
    };
    value.into_iter().chain(elements.iter())
}

fn equals(document: &Document, field: &str, expected: &Bson) -> bool {
    match document.get(field) {
        None => *expected == Bson::Null,
        Some(_) => candidates(document, field).any(|value| value == expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_renders_escaped_case_insensitive_regex() {
        let rendered = Predicate::contains("name", "a.b*").to_document();
        assert_eq!(
            rendered,
            doc! { "name": { "$regex": "a\\.b\\*", "$options": "i" } }
        );
    }

    #[test]
    fn and_flattens_trivial_cases() {
        assert_eq!(Predicate::And(Vec::new()).to_document(), Document::new());

        let single = Predicate::And(vec![Predicate::ne("delete_at", false)]);
        assert_eq!(single.to_document(), doc! { "delete_at": { "$ne": false } });

        let pair = Predicate::And(vec![
            Predicate::eq("status", "Active"),
            Predicate::is_null("delete_at"),
        ]);
        assert_eq!(
            pair.to_document(),
            doc! { "$and": [
                { "status": { "$eq": "Active" } },
                { "delete_at": { "$eq": Bson::Null } },
            ] }
        );
    }

    #[test]
    fn contains_matches_substrings_ignoring_case() {
        let document = doc! { "name": "Johnson Mutual", "business_line": ["Auto", "HOME"] };

        assert!(Predicate::contains("name", "jOhN").matches(&document));
        assert!(Predicate::contains("name", "mutual").matches(&document));
        assert!(!Predicate::contains("name", "acme").matches(&document));
        assert!(Predicate::contains("business_line", "home").matches(&document));
        assert!(!Predicate::contains("email", "j").matches(&document));
        assert!(!Predicate::contains("name", "J.hn").matches(&document));
    }

    #[test]
    fn missing_fields_follow_store_semantics() {
        let live = doc! { "name": "x" };
        let undeleted = doc! { "name": "x", "delete_at": false };
        let deleted = doc! { "name": "x", "delete_at": bson::DateTime::now() };
        let nulled = doc! { "name": "x", "delete_at": Bson::Null };

        let not_false = Predicate::ne("delete_at", false);
        assert!(not_false.matches(&live));
        assert!(!not_false.matches(&undeleted));
        assert!(not_false.matches(&deleted));
        assert!(not_false.matches(&nulled));

        let null = Predicate::is_null("delete_at");
        assert!(null.matches(&live));
        assert!(null.matches(&nulled));
        assert!(!null.matches(&undeleted));
        assert!(!null.matches(&deleted));
    }

    #[test]
    fn empty_or_matches_nothing() {
        let nothing = Predicate::Or(Vec::new());
        assert!(!nothing.matches(&doc! {}));
        assert_eq!(nothing.to_document(), doc! { "$nor": [{}] });
    }
}
