//! MongoDB thread repository.
//!
//! Implements `ThreadRepository` from postbox-core over the "messages"
//! collection. Filter and sort construction is factored into pure helpers
//! so the document shapes are unit-testable without a live store.

use futures_util::TryStreamExt;
use mongodb::bson::{Document, doc};
use postbox_core::repository::thread::ThreadRepository;
use postbox_types::error::RepositoryError;
use postbox_types::thread::{MessageThread, ThreadPage, ThreadQuery};

use super::client::StoreClient;
use super::map_store_error;

/// MongoDB-backed implementation of `ThreadRepository`.
pub struct MongoThreadRepository {
    store: StoreClient,
}

impl MongoThreadRepository {
    /// Create a new repository backed by the given store handle.
    pub fn new(store: StoreClient) -> Self {
        Self { store }
    }
}

/// Build the find/count filter for a query.
///
/// Empty search text means no filter. Non-empty text becomes a `$text`
/// search; the quote-wrapping makes the index match the words as one
/// phrase instead of OR-ing the terms.
fn query_filter(query: &ThreadQuery) -> Document {
    if query.search_text.is_empty() {
        doc! {}
    } else {
        doc! { "$text": { "$search": format!("\"{}\"", query.search_text) } }
    }
}

/// Sort specification: most recent thread activity first.
fn sort_spec() -> Document {
    doc! { "date": -1 }
}

impl ThreadRepository for MongoThreadRepository {
    async fn insert(&self, thread: &MessageThread) -> Result<(), RepositoryError> {
        self.store
            .threads()
            .insert_one(thread)
            .await
            .map_err(map_store_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MessageThread>, RepositoryError> {
        self.store
            .threads()
            .find_one(doc! { "id": id })
            .await
            .map_err(map_store_error)
    }

    async fn replace(&self, id: &str, thread: &MessageThread) -> Result<(), RepositoryError> {
        // A keyed replace, not an upsert: the match count is ignored, so
        // replacing a missing document reports success.
        self.store
            .threads()
            .replace_one(doc! { "id": id }, thread)
            .await
            .map_err(map_store_error)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.store
            .threads()
            .delete_one(doc! { "id": id })
            .await
            .map_err(map_store_error)?;
        Ok(())
    }

    async fn query(&self, query: &ThreadQuery) -> Result<ThreadPage, RepositoryError> {
        let filter = query_filter(query);

        let cursor = self
            .store
            .threads()
            .find(filter.clone())
            .sort(sort_spec())
            .skip(query.offset)
            .limit(query.limit)
            .await
            .map_err(map_store_error)?;

        let threads: Vec<MessageThread> = cursor.try_collect().await.map_err(map_store_error)?;

        // The count runs over the same filter but ignores the skip/limit
        // window. It is a second read, not a snapshot shared with the find
        // above, so the two can disagree under concurrent writes.
        let total_matches = self
            .store
            .threads()
            .count_documents(filter)
            .await
            .map_err(map_store_error)?;

        Ok(ThreadPage {
            threads,
            total_matches,
        })
    }
}
