use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Comment, CommentId};

/// Post identifier, assigned at seed time and never changed.
pub type PostId = u64;

/// Post entity - a blog post together with its comment thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
    /// Display order is insertion order.
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a post with no comments.
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author: author.into(),
            timestamp,
            comments: Vec::new(),
        }
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }

    /// The id the next comment on this post receives: one past the highest
    /// existing id, or 1 for an empty thread.
    pub fn next_comment_id(&self) -> CommentId {
        self.comments
            .iter()
            .map(|c| c.id)
            .max()
            .map_or(1, |max| max + 1)
    }
}
