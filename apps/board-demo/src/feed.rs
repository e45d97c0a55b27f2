//! Client-side copy of the post list.
//!
//! The feed fetches once, then keeps its own copy in sync by merging each
//! comment the store hands back instead of re-fetching.

use std::time::Duration;

use board_core::DomainError;
use board_core::domain::{Comment, NewComment, Post, PostId};
use board_core::ports::PostStore;

/// What the feed currently has to show.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedState {
    Loading,
    Failed(String),
    Ready(Vec<Post>),
}

pub struct PostFeed {
    state: FeedState,
    load_timeout: Duration,
}

impl PostFeed {
    pub fn new(load_timeout: Duration) -> Self {
        Self {
            state: FeedState::Loading,
            load_timeout,
        }
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        match &self.state {
            FeedState::Ready(posts) => posts,
            _ => &[],
        }
    }

    pub fn contains(&self, post_id: PostId) -> bool {
        self.posts().iter().any(|p| p.id == post_id)
    }

    /// Fetch the post list, replacing whatever the feed held.
    pub async fn load(&mut self, store: &dyn PostStore) {
        self.state = FeedState::Loading;

        self.state = match tokio::time::timeout(self.load_timeout, store.list_posts()).await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Feed loaded");
                FeedState::Ready(posts)
            }
            Err(_) => {
                tracing::error!(timeout = ?self.load_timeout, "Timed out loading posts");
                FeedState::Failed("Timed out loading posts".to_string())
            }
        };
    }

    /// Submit a comment and merge the stored copy into the matching post.
    ///
    /// On error the feed is left untouched.
    pub async fn add_comment(
        &mut self,
        store: &dyn PostStore,
        post_id: PostId,
        input: NewComment,
    ) -> Result<Comment, DomainError> {
        let created = store.add_comment(post_id, input).await?;

        if let FeedState::Ready(posts) = &mut self.state {
            if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
                post.comments.push(created.clone());
            }
        }

        Ok(created)
    }
}
