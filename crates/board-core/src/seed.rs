//! Canonical starting dataset for a board.
//!
//! Stores copy this on construction and on reset. The data is rebuilt on every
//! call so a caller can never reach a shared instance.

use chrono::{DateTime, Utc};

use crate::domain::{Comment, Post};

fn at(unix_seconds: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(unix_seconds, 0).unwrap_or_default()
}

/// A fresh copy of the seed posts, in display order.
pub fn posts() -> Vec<Post> {
    vec![
        // 2024-01-15T10:30:00Z
        Post::new(
            1,
            "First Post",
            "This is the content of the first post",
            "John Doe",
            at(1_705_314_600),
        )
        // 2024-01-15T11:00:00Z
        .with_comment(Comment::new(1, "Great post!", "Jane Smith", at(1_705_316_400))),
        // 2024-02-20T09:15:00Z
        Post::new(
            2,
            "Second Post",
            "Welcome to the demo app.",
            "Alice Johnson",
            at(1_708_420_500),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_timestamps() {
        let posts = posts();
        assert_eq!(posts[0].timestamp.to_rfc3339(), "2024-01-15T10:30:00+00:00");
        assert_eq!(
            posts[0].comments[0].timestamp.to_rfc3339(),
            "2024-01-15T11:00:00+00:00"
        );
        assert_eq!(posts[1].timestamp.to_rfc3339(), "2024-02-20T09:15:00+00:00");
    }

    #[test]
    fn test_seed_shape() {
        let posts = posts();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].title, "First Post");
        assert_eq!(posts[0].comments.len(), 1);
        assert_eq!(posts[1].id, 2);
        assert!(posts[1].comments.is_empty());
    }

    #[test]
    fn test_each_call_is_independent() {
        let mut first = posts();
        first[0].comments.clear();
        assert_eq!(posts()[0].comments.len(), 1);
    }
}
