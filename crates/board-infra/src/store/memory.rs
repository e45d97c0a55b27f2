//! In-memory post store - the working set lives in process memory only.
//!
//! Every operation waits a configurable latency before completing, standing in
//! for a network round trip. Data is lost on process restart.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use board_core::DomainError;
use board_core::domain::{Comment, NewComment, Post, PostId};
use board_core::ports::PostStore;
use board_core::seed;

/// Normalized `(post, content, author)` of a submission still in flight.
type SubmissionKey = (PostId, String, String);

/// In-memory post store configuration.
#[derive(Debug, Clone)]
pub struct InMemoryPostStoreConfig {
    /// Delay applied to every list and add operation.
    pub latency: Duration,
}

impl Default for InMemoryPostStoreConfig {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(200),
        }
    }
}

impl InMemoryPostStoreConfig {
    pub fn from_env() -> Self {
        Self {
            latency: Duration::from_millis(
                std::env::var("STORE_LATENCY_MS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(200),
            ),
        }
    }
}

/// In-memory post store using an async RwLock over the post list.
///
/// Each instance owns its own copy of the data, so independent stores never
/// observe each other's writes.
///
/// Identical submissions (same post, content and author after trimming) are
/// not allowed to overlap: while one is waiting out its latency, a second one
/// fails with [`DomainError::Duplicate`] and stores nothing.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
    initial: Vec<Post>,
    in_flight: Mutex<HashSet<SubmissionKey>>,
    config: InMemoryPostStoreConfig,
}

impl InMemoryPostStore {
    /// Create a store holding the seed dataset.
    pub fn new(config: InMemoryPostStoreConfig) -> Self {
        Self::with_posts(config, seed::posts())
    }

    /// Create a store holding `posts`; [`PostStore::reset`] returns to them.
    pub fn with_posts(config: InMemoryPostStoreConfig, posts: Vec<Post>) -> Self {
        Self {
            posts: RwLock::new(posts.clone()),
            initial: posts,
            in_flight: Mutex::new(HashSet::new()),
            config,
        }
    }

    pub fn latency(&self) -> Duration {
        self.config.latency
    }

    async fn simulate_latency(&self) {
        if !self.config.latency.is_zero() {
            tokio::time::sleep(self.config.latency).await;
        }
    }
}

impl Default for InMemoryPostStore {
    fn default() -> Self {
        Self::new(InMemoryPostStoreConfig::default())
    }
}

/// Marks a submission as in flight until dropped, including when the caller
/// abandons the future during the latency wait.
struct InFlightGuard<'a> {
    set: &'a Mutex<HashSet<SubmissionKey>>,
    key: SubmissionKey,
}

impl<'a> InFlightGuard<'a> {
    fn acquire(set: &'a Mutex<HashSet<SubmissionKey>>, key: SubmissionKey) -> Option<Self> {
        let inserted = set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone());
        inserted.then_some(Self { set, key })
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.set
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.key);
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list_posts(&self) -> Vec<Post> {
        // Copy before the delay so the snapshot reflects call time
        let posts = self.posts.read().await.to_vec();
        tracing::debug!(count = posts.len(), "Listing posts");

        self.simulate_latency().await;
        posts
    }

    async fn add_comment(
        &self,
        post_id: PostId,
        input: NewComment,
    ) -> Result<Comment, DomainError> {
        let (content, author) = input.normalize().inspect_err(|e| {
            tracing::warn!(post_id, error = %e, "Rejected comment");
        })?;

        let _guard = InFlightGuard::acquire(
            &self.in_flight,
            (post_id, content.clone(), author.clone()),
        )
        .ok_or_else(|| {
            tracing::warn!(post_id, author = %author, "Identical comment already in flight");
            DomainError::Duplicate("Duplicate submission is already in flight".to_string())
        })?;

        // Lookup, id assignment and append happen under one write lock
        let comment = {
            let mut posts = self.posts.write().await;
            let post = posts
                .iter_mut()
                .find(|p| p.id == post_id)
                .ok_or_else(|| {
                    tracing::warn!(post_id, "Comment targets unknown post");
                    DomainError::post_not_found(post_id)
                })?;

            let comment = Comment::new(post.next_comment_id(), content, author, Utc::now());
            post.comments.push(comment.clone());
            comment
        };

        tracing::debug!(
            post_id,
            comment_id = comment.id,
            author = %comment.author,
            "Comment added"
        );

        self.simulate_latency().await;
        Ok(comment)
    }

    async fn reset(&self) {
        let mut posts = self.posts.write().await;
        *posts = self.initial.clone();
        tracing::info!("Post store reset to initial dataset");
    }
}
