//! Thread service: ID/timestamp policy, boundary validation, store access.

use postbox_types::error::ThreadError;
use postbox_types::thread::{MessageThread, ThreadPage, ThreadQuery};
use uuid::Uuid;

use crate::repository::thread::ThreadRepository;

/// Service owning the thread lifecycle over a `ThreadRepository`.
///
/// Generic over the repository trait so postbox-core never depends on
/// postbox-infra. The service is stateless; concurrent callers share it
/// freely.
pub struct ThreadService<R: ThreadRepository> {
    repo: R,
}

impl<R: ThreadRepository> ThreadService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new thread.
    ///
    /// Assigns a fresh unique `id` and stamps the first message's `date`
    /// (and the thread-level sort key) with the current time; caller-
    /// supplied values for all three are overwritten. A thread with no
    /// messages is rejected with `EmptyMessages` before any store access.
    pub async fn create(&self, mut thread: MessageThread) -> Result<MessageThread, ThreadError> {
        let first = thread
            .messages
            .first_mut()
            .ok_or(ThreadError::EmptyMessages)?;

        let now = chrono::Utc::now().timestamp();
        first.date = now;
        thread.date = now;
        thread.id = Uuid::new_v4().to_string();

        self.repo.insert(&thread).await?;
        Ok(thread)
    }

    /// Get a thread by ID.
    pub async fn get(&self, id: &str) -> Result<MessageThread, ThreadError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ThreadError::NotFound)
    }

    /// Replace the thread document stored under `id`.
    ///
    /// Stamps the *last* message's `date` (and the thread-level sort key)
    /// with the current time, then performs a full-document replace keyed
    /// by `id`. The replace does not verify that a document with `id`
    /// previously existed; replacing zero documents is reported as success.
    /// The stored document keeps `id` as its key regardless of what the
    /// caller put in the thread body.
    pub async fn update(
        &self,
        id: &str,
        mut thread: MessageThread,
    ) -> Result<MessageThread, ThreadError> {
        let last = thread
            .messages
            .last_mut()
            .ok_or(ThreadError::EmptyMessages)?;

        let now = chrono::Utc::now().timestamp();
        last.date = now;
        thread.date = now;
        thread.id = id.to_string();

        self.repo.replace(id, &thread).await?;
        Ok(thread)
    }

    /// Delete a thread document. Deleting a missing thread is a success.
    pub async fn delete(&self, id: &str) -> Result<(), ThreadError> {
        self.repo.delete(id).await?;
        Ok(())
    }

    /// Query threads with pagination and optional full-text search.
    ///
    /// Non-empty search text is validated against the permitted character
    /// class before any store access; empty text means "no filter" and
    /// skips validation.
    pub async fn query(&self, query: &ThreadQuery) -> Result<ThreadPage, ThreadError> {
        if !query.search_text.is_empty() {
            validate_search_text(&query.search_text)?;
        }

        Ok(self.repo.query(query).await?)
    }
}

/// Check every character of `text` against the permitted class
/// `[A-Za-z@. ]` (ASCII letters, '@', '.', space). The whole string must
/// match; anything else is rejected.
fn validate_search_text(text: &str) -> Result<(), ThreadError> {
    let permitted = |c: char| c.is_ascii_alphabetic() || c == '@' || c == '.' || c == ' ';
    if text.chars().all(permitted) {
        Ok(())
    } else {
        Err(ThreadError::InvalidSearchText(
            "search text may contain only letters, '@', '.', and spaces".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postbox_types::error::RepositoryError;
    use postbox_types::thread::Message;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory repository backing the service tests.
    #[derive(Default)]
    struct MockThreadRepo {
        docs: Mutex<HashMap<String, MessageThread>>,
        queries: Mutex<Vec<ThreadQuery>>,
        unavailable: bool,
    }

    impl ThreadRepository for MockThreadRepo {
        async fn insert(&self, thread: &MessageThread) -> Result<(), RepositoryError> {
            if self.unavailable {
                return Err(RepositoryError::Unavailable("no route to store".to_string()));
            }
            self.docs
                .lock()
                .unwrap()
                .insert(thread.id.clone(), thread.clone());
            Ok(())
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<MessageThread>, RepositoryError> {
            Ok(self.docs.lock().unwrap().get(id).cloned())
        }

        async fn replace(&self, id: &str, thread: &MessageThread) -> Result<(), RepositoryError> {
            let mut docs = self.docs.lock().unwrap();
            // Matching zero documents is still a success, like the real store.
            if docs.contains_key(id) {
                docs.insert(id.to_string(), thread.clone());
            }
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
            self.docs.lock().unwrap().remove(id);
            Ok(())
        }

        async fn query(&self, query: &ThreadQuery) -> Result<ThreadPage, RepositoryError> {
            self.queries.lock().unwrap().push(query.clone());

            let mut threads: Vec<MessageThread> =
                self.docs.lock().unwrap().values().cloned().collect();
            threads.sort_by_key(|t| std::cmp::Reverse(t.date));
            let total_matches = threads.len() as u64;
            let threads = threads
                .into_iter()
                .skip(query.offset as usize)
                .take(query.limit.max(0) as usize)
                .collect();

            Ok(ThreadPage {
                threads,
                total_matches,
            })
        }
    }

    fn msg(sender: &str, content: &str, date: i64) -> Message {
        Message {
            sender: sender.to_string(),
            content: content.to_string(),
            date,
        }
    }

    fn thread_with(messages: Vec<Message>) -> MessageThread {
        MessageThread {
            id: String::new(),
            date: 0,
            messages,
        }
    }

    fn service() -> ThreadService<MockThreadRepo> {
        ThreadService::new(MockThreadRepo::default())
    }

    #[tokio::test]
    async fn test_create_assigns_unique_ids() {
        let svc = service();

        let a = svc
            .create(thread_with(vec![msg("alice", "hi", 0)]))
            .await
            .unwrap();
        let b = svc
            .create(thread_with(vec![msg("bob", "yo", 0)]))
            .await
            .unwrap();

        assert_eq!(a.id.len(), 36);
        assert!(!b.id.is_empty());
        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn test_create_stamps_first_message_date() {
        let svc = service();
        let before = chrono::Utc::now().timestamp();

        let created = svc
            .create(thread_with(vec![msg("alice", "hi", 0)]))
            .await
            .unwrap();

        let after = chrono::Utc::now().timestamp();
        assert!(created.messages[0].date >= before && created.messages[0].date <= after);
        assert_eq!(created.date, created.messages[0].date);
        assert_eq!(created.messages.len(), 1);
    }

    #[tokio::test]
    async fn test_create_overwrites_caller_supplied_id() {
        let svc = service();
        let mut thread = thread_with(vec![msg("alice", "hi", 0)]);
        thread.id = "caller-chosen".to_string();

        let created = svc.create(thread).await.unwrap();
        assert_ne!(created.id, "caller-chosen");
    }

    #[tokio::test]
    async fn test_create_empty_messages_rejected() {
        let svc = service();

        let err = svc.create(thread_with(vec![])).await.unwrap_err();
        assert!(matches!(err, ThreadError::EmptyMessages));
        assert!(svc.repo.docs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_after_create_returns_same_id() {
        let svc = service();

        let created = svc
            .create(thread_with(vec![msg("alice", "hi", 0)]))
            .await
            .unwrap();
        let fetched = svc.get(&created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.messages, created.messages);
    }

    #[tokio::test]
    async fn test_get_missing_is_not_found() {
        let svc = service();
        let err = svc.get("nope").await.unwrap_err();
        assert!(matches!(err, ThreadError::NotFound));
    }

    #[tokio::test]
    async fn test_update_stamps_last_message_date_only() {
        let svc = service();

        let created = svc
            .create(thread_with(vec![msg("alice", "hi", 0)]))
            .await
            .unwrap();
        let first_date = created.messages[0].date;

        let mut updated_body = created.clone();
        updated_body.messages.push(msg("bob", "hello back", 0));

        let updated = svc.update(&created.id, updated_body).await.unwrap();

        assert_eq!(updated.messages.len(), 2);
        assert_eq!(updated.messages[0].date, first_date);
        assert!(updated.messages[1].date >= first_date);
        assert_eq!(updated.date, updated.messages[1].date);
    }

    #[tokio::test]
    async fn test_update_keeps_requested_id() {
        let svc = service();

        let created = svc
            .create(thread_with(vec![msg("alice", "hi", 0)]))
            .await
            .unwrap();

        let mut body = created.clone();
        body.id = "something-else".to_string();

        let updated = svc.update(&created.id, body).await.unwrap();
        assert_eq!(updated.id, created.id);
    }

    #[tokio::test]
    async fn test_update_missing_thread_is_success() {
        // A replace against a non-matching filter is a no-op success at the
        // store level; no existence check is performed.
        let svc = service();

        let result = svc
            .update("ghost", thread_with(vec![msg("alice", "hi", 0)]))
            .await;

        assert!(result.is_ok());
        assert!(svc.repo.docs.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_empty_messages_rejected() {
        let svc = service();
        let err = svc.update("any", thread_with(vec![])).await.unwrap_err();
        assert!(matches!(err, ThreadError::EmptyMessages));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let svc = service();

        let created = svc
            .create(thread_with(vec![msg("alice", "hi", 0)]))
            .await
            .unwrap();
        svc.delete(&created.id).await.unwrap();

        let err = svc.get(&created.id).await.unwrap_err();
        assert!(matches!(err, ThreadError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_twice_succeeds() {
        let svc = service();

        let created = svc
            .create(thread_with(vec![msg("alice", "hi", 0)]))
            .await
            .unwrap();

        svc.delete(&created.id).await.unwrap();
        svc.delete(&created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_query_accepts_permitted_search_text() {
        let svc = service();

        let query = ThreadQuery {
            search_text: "hello@world".to_string(),
            ..ThreadQuery::default()
        };

        assert!(svc.query(&query).await.is_ok());
        assert_eq!(svc.repo.queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_query_rejects_bad_search_text_before_store() {
        let svc = service();

        let query = ThreadQuery {
            search_text: "hello<script>".to_string(),
            ..ThreadQuery::default()
        };

        let err = svc.query(&query).await.unwrap_err();
        assert!(matches!(err, ThreadError::InvalidSearchText(_)));
        // Rejected before any repository call.
        assert!(svc.repo.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_empty_search_skips_validation() {
        let svc = service();

        let page = svc.query(&ThreadQuery::default()).await.unwrap();
        assert_eq!(page.total_matches, 0);
        assert_eq!(svc.repo.queries.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_query_returns_all_sorted_desc() {
        let svc = service();

        for content in ["one", "two", "three"] {
            svc.create(thread_with(vec![msg("alice", content, 0)]))
                .await
                .unwrap();
        }

        let page = svc.query(&ThreadQuery::default()).await.unwrap();
        assert_eq!(page.total_matches, 3);
        assert_eq!(page.threads.len(), 3);
        let dates: Vec<i64> = page.threads.iter().map(|t| t.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by_key(|d| std::cmp::Reverse(*d));
        assert_eq!(dates, sorted);
    }

    #[tokio::test]
    async fn test_query_total_ignores_window() {
        let svc = service();

        for content in ["one", "two", "three"] {
            svc.create(thread_with(vec![msg("alice", content, 0)]))
                .await
                .unwrap();
        }

        let query = ThreadQuery {
            offset: 1,
            limit: 1,
            ..ThreadQuery::default()
        };
        let page = svc.query(&query).await.unwrap();

        assert_eq!(page.threads.len(), 1);
        assert_eq!(page.total_matches, 3);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_as_storage_error() {
        let svc = ThreadService::new(MockThreadRepo {
            unavailable: true,
            ..MockThreadRepo::default()
        });

        let err = svc
            .create(thread_with(vec![msg("alice", "hi", 0)]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ThreadError::Storage(RepositoryError::Unavailable(_))
        ));
    }

    #[test]
    fn test_validate_search_text_character_class() {
        assert!(validate_search_text("hello world").is_ok());
        assert!(validate_search_text("a@b.c").is_ok());
        assert!(validate_search_text("hello123").is_err());
        assert!(validate_search_text("semi;colon").is_err());
        assert!(validate_search_text("caf\u{e9}").is_err());
    }
}
