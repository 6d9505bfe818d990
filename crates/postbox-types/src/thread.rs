//! Message thread and query types.
//!
//! A thread is an ordered conversation of message entries. Threads live in
//! the "messages" collection, keyed by the application-level `id` field;
//! the store's native `_id` is ignored on deserialization.

use serde::{Deserialize, Serialize};

/// A message conversation entity composed of an ordered list of messages.
///
/// `id` and both timestamps are server-assigned -- callers never control
/// them. `date` is the thread-level sort key, refreshed from message
/// activity on every create and update, and drives descending query order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageThread {
    /// Opaque unique identifier (UUID text), immutable after creation.
    #[serde(default)]
    pub id: String,

    /// Unix-seconds sort key mirroring the latest message activity.
    #[serde(default)]
    pub date: i64,

    /// Conversation entries in insertion order. Never empty once a thread
    /// exists.
    pub messages: Vec<Message>,
}

/// A single entry within a thread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub content: String,

    /// Unix-seconds timestamp. Set server-side for the first message at
    /// creation and for the last message at update.
    #[serde(default)]
    pub date: i64,
}

/// Pagination window plus optional full-text filter over threads.
///
/// An empty `search_text` means "no text filter". Results are ordered by
/// thread `date` descending (most recent activity first).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadQuery {
    #[serde(default)]
    pub search_text: String,

    /// Number of matching documents to skip.
    #[serde(default)]
    pub offset: u64,

    /// Maximum number of documents to return.
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

impl Default for ThreadQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            offset: 0,
            limit: default_limit(),
        }
    }
}

/// One page of query results plus the total match count.
///
/// `total_matches` counts every document satisfying the filter, independent
/// of the offset/limit window. The page and the count come from two separate
/// store reads, so under concurrent writes they can disagree by a small
/// margin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadPage {
    pub threads: Vec<MessageThread>,
    pub total_matches: u64,
}
