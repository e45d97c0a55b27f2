//! Comment form state for a single post.
//!
//! Submission is two-phase: [`CommentForm::begin_submit`] validates and marks
//! the form pending, [`CommentForm::finish`] applies the store's answer. A
//! pending form refuses to submit again.

use board_core::DomainError;
use board_core::domain::{Comment, NewComment};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Comment cannot be empty")]
    Empty,

    #[error("A comment is already being posted")]
    Pending,
}

#[derive(Debug, Clone, Default)]
pub struct CommentForm {
    pub content: String,
    pub author: String,
    error: Option<String>,
    pending: bool,
}

impl CommentForm {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Validate the fields and produce the store input.
    pub fn begin_submit(&mut self) -> Result<NewComment, FormError> {
        if self.pending {
            return Err(FormError::Pending);
        }

        let content = self.content.trim();
        if content.is_empty() {
            self.error = Some(FormError::Empty.to_string());
            return Err(FormError::Empty);
        }

        let mut input = NewComment::new(content);
        let author = self.author.trim();
        if !author.is_empty() {
            input = input.with_author(author);
        }

        self.error = None;
        self.pending = true;
        Ok(input)
    }

    /// Apply the outcome of a submission started with `begin_submit`.
    ///
    /// Success clears the content and keeps the author for the next comment;
    /// failure keeps the content and shows the error inline.
    pub fn finish(&mut self, outcome: Result<&Comment, &DomainError>) {
        self.pending = false;
        match outcome {
            Ok(_) => self.content.clear(),
            Err(e) => self.error = Some(e.to_string()),
        }
    }
}
