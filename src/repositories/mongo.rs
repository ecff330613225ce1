//! MongoCollection - DocumentCollection backed by a MongoDB collection

use super::predicate::Predicate;
use super::traits::{DocumentCollection, StoreError, StoreResult};
use async_trait::async_trait;
use bson::oid::ObjectId;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::options::{ClientOptions, FindOptions, ReturnDocument};
use mongodb::{Client, Collection};
use tracing::{debug, info, instrument};

pub struct MongoCollection {
    collection: Collection<Document>,
}

impl MongoCollection {
    pub fn new(collection: Collection<Document>) -> Self {
        Self { collection }
    }

    /// Connects to the server, checks it answers a ping and opens `collection` in `database`
    #[instrument(skip(url))]
    pub async fn connect(
        url: &str,
        database: &str,
        collection: &str,
        max_pool_size: u32,
    ) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(url).await?;
        options.max_pool_size = Some(max_pool_size);
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());

        let client = Client::with_options(options)?;
        let database = client.database(database);
        database.run_command(doc! { "ping": 1 }).await?;
        info!("Connected to MongoDB");

        Ok(Self::new(database.collection::<Document>(collection)))
    }
}

/// Skip and limit are sent as signed 64-bit integers, larger values are capped
fn find_options(skip: u64, limit: Option<u64>) -> FindOptions {
    let mut options = FindOptions::default();
    options.skip = Some(skip.min(i64::MAX as u64));
    options.limit = limit.map(|limit| i64::try_from(limit).unwrap_or(i64::MAX));
    options
}

#[async_trait]
impl DocumentCollection for MongoCollection {
    async fn insert_one(&self, document: Document) -> StoreResult<ObjectId> {
        let result = self.collection.insert_one(document).await?;
        result.inserted_id.as_object_id().ok_or(StoreError::MissingId)
    }

    async fn find(
        &self,
        filter: &Predicate,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<Vec<Document>> {
        let filter = filter.to_document();
        debug!(%filter, skip, ?limit, "find");
        let documents: Vec<Document> = self
            .collection
            .find(filter)
            .with_options(find_options(skip, limit))
            .await?
            .try_collect()
            .await?;
        Ok(documents)
    }

    async fn count(&self, filter: &Predicate) -> StoreResult<u64> {
        let count = self.collection.count_documents(filter.to_document()).await?;
        Ok(count)
    }

    async fn find_one_and_set(
        &self,
        filter: &Predicate,
        fields: Document,
    ) -> StoreResult<Option<Document>> {
        let updated = self
            .collection
            .find_one_and_update(filter.to_document(), doc! { "$set": fields })
            .return_document(ReturnDocument::After)
            .await?;
        Ok(updated)
    }

    async fn delete_one(&self, filter: &Predicate) -> StoreResult<u64> {
        let result = self.collection.delete_one(filter.to_document()).await?;
        Ok(result.deleted_count)
    }
}
