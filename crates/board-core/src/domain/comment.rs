use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Comment identifier, unique within its parent post only.
pub type CommentId = u64;

/// Author used when a comment is submitted without a name.
pub const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Comment entity - a reply attached to a single post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

impl Comment {
    pub fn new(
        id: CommentId,
        content: impl Into<String>,
        author: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            author: author.into(),
            timestamp,
        }
    }
}

/// Input for adding a comment, as submitted by a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl NewComment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            author: None,
        }
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Trim both fields and resolve the default author.
    ///
    /// Returns `(content, author)`. Fails if the trimmed content is empty.
    pub fn normalize(&self) -> Result<(String, String), DomainError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(DomainError::Validation(
                "Comment content cannot be empty".to_string(),
            ));
        }

        let author = self
            .author
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(ANONYMOUS_AUTHOR);

        Ok((content.to_string(), author.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_content_and_author() {
        let input = NewComment::new("  hello \n").with_author("  Bob ");
        let (content, author) = input.normalize().unwrap();
        assert_eq!(content, "hello");
        assert_eq!(author, "Bob");
    }

    #[test]
    fn test_normalize_defaults_author() {
        let (_, author) = NewComment::new("hello").normalize().unwrap();
        assert_eq!(author, ANONYMOUS_AUTHOR);

        let (_, author) = NewComment::new("hello")
            .with_author("   ")
            .normalize()
            .unwrap();
        assert_eq!(author, ANONYMOUS_AUTHOR);
    }

    #[test]
    fn test_normalize_rejects_blank_content() {
        for content in ["", "   ", "\t\n"] {
            let err = NewComment::new(content).normalize().unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
            assert!(err.to_string().contains("cannot be empty"));
        }
    }

    #[test]
    fn test_timestamp_serializes_as_iso8601() {
        let ts = DateTime::parse_from_rfc3339("2024-01-15T11:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let json = serde_json::to_value(Comment::new(1, "Great post!", "Jane Smith", ts)).unwrap();
        assert_eq!(json["timestamp"], "2024-01-15T11:00:00Z");
    }
}
