//! MemoryCollection - in-process DocumentCollection
//!
//! Used for local development (`DATABASE_URL=memory://`) and by the tests.
//! Filters are evaluated with [`Predicate::matches`].

use super::predicate::Predicate;
use super::traits::{DocumentCollection, StoreResult};
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Bson, Document};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryCollection {
    documents: RwLock<Vec<Document>>,
}

impl MemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores documents as they are, e.g. legacy records missing fields
    pub async fn seed(&self, documents: impl IntoIterator<Item = Document>) {
        self.documents.write().await.extend(documents);
    }
}

#[cfg(test)]
impl MemoryCollection {
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentCollection for MemoryCollection {
    async fn insert_one(&self, document: Document) -> StoreResult<ObjectId> {
        let id = match document.get("_id") {
            Some(Bson::ObjectId(id)) => *id,
            _ => ObjectId::new(),
        };

        let mut stored = Document::new();
        stored.insert("_id", id);
        for (key, value) in document {
            if key != "_id" {
                stored.insert(key, value);
            }
        }

        self.documents.write().await.push(stored);
        Ok(id)
    }

    async fn find(
        &self,
        filter: &Predicate,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>> {
        let documents = self.documents.read().await;
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = limit.map_or(usize::MAX, |limit| {
            usize::try_from(limit).unwrap_or(usize::MAX)
        });

        Ok(documents
            .iter()
            .filter(|document| filter.matches(document))
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &Predicate) -> StoreResult<u64> {
        let documents = self.documents.read().await;
        Ok(documents
            .iter()
            .filter(|document| filter.matches(document))
            .count() as u64)
    }

    async fn find_one_and_set(
        &self,
        filter: &Predicate,
        fields: Document,
    ) -> StoreResult<Option<Document>> {
        let mut documents = self.documents.write().await;
        let Some(document) = documents.iter_mut().find(|document| filter.matches(document)) else {
            return Ok(None);
        };
        for (key, value) in fields {
            document.insert(key, value);
        }
        Ok(Some(document.clone()))
    }

    async fn delete_one(&self, filter: &Predicate) -> StoreResult<u64> {
        let mut documents = self.documents.write().await;
        match documents.iter().position(|document| filter.matches(document)) {
            Some(index) => {
                documents.remove(index);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
