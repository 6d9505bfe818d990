//! Text index setup for full-text thread search.
//!
//! `$text` queries require a text index over the searchable message fields.
//! The running service treats the index as an external setup precondition
//! and never checks it per request; this helper backs `postbox init-store`.

use mongodb::IndexModel;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use postbox_types::error::RepositoryError;

use super::client::StoreClient;
use super::map_store_error;

/// Name of the text index over message sender/content.
pub const TEXT_INDEX_NAME: &str = "messages_text";

/// Build the index model for the "messages" collection text index.
pub fn text_index_model() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "messages.sender": "text", "messages.content": "text" })
        .options(IndexOptions::builder().name(TEXT_INDEX_NAME.to_string()).build())
        .build()
}

/// Create the text index. Creating an index that already exists is a no-op
/// on the store side.
pub async fn ensure_text_index(store: &StoreClient) -> Result<(), RepositoryError> {
    store
        .threads()
        .create_index(text_index_model())
        .await
        .map_err(map_store_error)?;

    tracing::info!(index = TEXT_INDEX_NAME, "text index ensured");
    Ok(())
}
