//! Plain-text rendering of the feed.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::{DateTime, Utc};

use board_core::domain::{Comment, Post, PostId};

use crate::feed::FeedState;
use crate::form::CommentForm;

fn when(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

/// Render the whole feed, including any inline form errors.
pub fn feed(state: &FeedState, forms: &BTreeMap<PostId, CommentForm>) -> String {
    match state {
        FeedState::Loading => "Loading posts…\n".to_string(),
        FeedState::Failed(message) => format!("Error: {message}\n"),
        FeedState::Ready(posts) => {
            let mut out = String::from("# Posts\n");
            for post in posts {
                out.push('\n');
                out.push_str(&self::post(post, forms.get(&post.id)));
            }
            out
        }
    }
}

pub fn post(post: &Post, form: Option<&CommentForm>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", post.id, post.title);
    let _ = writeln!(out, "By {} • {}", post.author, when(&post.timestamp));
    let _ = writeln!(out, "{}", post.content);
    out.push_str("  Comments\n");

    if post.comments.is_empty() {
        out.push_str("    No comments yet\n");
    }
    for c in &post.comments {
        out.push_str(&comment(c));
    }

    if form.is_some_and(CommentForm::is_pending) {
        out.push_str("  Posting…\n");
    }
    if let Some(error) = form.and_then(CommentForm::error) {
        let _ = writeln!(out, "  ! {error}");
    }
    out
}

pub fn comment(comment: &Comment) -> String {
    format!(
        "    {}\n      By {} • {}\n",
        comment.content,
        comment.author,
        when(&comment.timestamp)
    )
}
