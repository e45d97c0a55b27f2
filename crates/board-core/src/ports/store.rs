use async_trait::async_trait;

use crate::domain::{Comment, NewComment, Post, PostId};
use crate::error::DomainError;

/// Post store trait - abstraction over post/comment storage backends.
///
/// Every value returned is an owned copy; mutating it never reaches the store.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts with their current comments, in seed order.
    async fn list_posts(&self) -> Vec<Post>;

    /// Append a comment to a post and return the stored comment.
    ///
    /// Content is trimmed and must be non-empty; a blank or missing author
    /// becomes "Anonymous". Fails without mutating anything.
    async fn add_comment(
        &self,
        post_id: PostId,
        input: NewComment,
    ) -> Result<Comment, DomainError>;

    /// Restore the seed dataset, discarding every change.
    async fn reset(&self);
}
