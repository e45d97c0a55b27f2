//! Line-oriented command interface over a [`PostFeed`].

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use board_core::DomainError;
use board_core::domain::{Comment, NewComment, PostId};
use board_core::ports::PostStore;
use thiserror::Error;

use crate::feed::{FeedState, PostFeed};
use crate::form::CommentForm;
use crate::render;

pub const HELP: &str = "\
Commands:
  list                         show all posts
  json                         print all posts as JSON
  comment <post_id> <text>     post a comment as the current author
  author [name]                set (or clear) the author for new comments
  reload                       fetch posts from the store again
  reset                        restore the store to its initial posts
  help                         show this message
  quit                         exit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Json,
    Comment { post_id: PostId, content: String },
    Author(Option<String>),
    Reload,
    Reset,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0} (try `help`)")]
    Unknown(String),

    #[error("Usage: comment <post_id> <text>")]
    CommentUsage,

    #[error("Invalid post id: {0}")]
    InvalidPostId(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match name {
            "list" | "ls" => Ok(Command::List),
            "json" => Ok(Command::Json),
            "comment" => {
                // Text may be blank; the form reports that inline
                let (id, content) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if id.is_empty() {
                    return Err(CommandError::CommentUsage);
                }
                let post_id = id
                    .parse()
                    .map_err(|_| CommandError::InvalidPostId(id.to_string()))?;
                Ok(Command::Comment {
                    post_id,
                    content: content.trim().to_string(),
                })
            }
            "author" => Ok(Command::Author(
                Some(rest.to_string()).filter(|a| !a.is_empty()),
            )),
            "reload" => Ok(Command::Reload),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// Interactive session: one feed plus one comment form per post.
pub struct Console {
    store: Arc<dyn PostStore>,
    feed: PostFeed,
    forms: BTreeMap<PostId, CommentForm>,
    author: String,
}

impl Console {
    pub fn new(store: Arc<dyn PostStore>, load_timeout: Duration, author: Option<String>) -> Self {
        Self {
            store,
            feed: PostFeed::new(load_timeout),
            forms: BTreeMap::new(),
            author: author.unwrap_or_default(),
        }
    }

    /// Load the feed and render it.
    pub async fn start(&mut self) -> String {
        self.feed.load(self.store.as_ref()).await;
        render::feed(self.feed.state(), &self.forms)
    }

    /// Run one command. Returns `None` when the session should end.
    pub async fn execute(&mut self, command: Command) -> anyhow::Result<Option<String>> {
        let output = match command {
            Command::List => render::feed(self.feed.state(), &self.forms),
            Command::Json => match self.feed.state() {
                FeedState::Ready(posts) => serde_json::to_string_pretty(posts)? + "\n",
                state => render::feed(state, &self.forms),
            },
            Command::Comment { post_id, content } => self.comment(post_id, content).await,
            Command::Author(author) => {
                self.author = author.unwrap_or_default();
                if self.author.is_empty() {
                    "Posting as Anonymous\n".to_string()
                } else {
                    format!("Posting as {}\n", self.author)
                }
            }
            Command::Reload => self.start().await,
            Command::Reset => {
                self.store.reset().await;
                self.forms.clear();
                self.start().await
            }
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(None),
        };
        Ok(Some(output))
    }

    async fn comment(&mut self, post_id: PostId, content: String) -> String {
        if !matches!(self.feed.state(), FeedState::Ready(_)) {
            return "Error: Posts are not loaded (try `reload`)\n".to_string();
        }

        // Forms exist only for posts the feed shows; anything else goes
        // straight to the store so it can report the problem.
        if !self.feed.contains(post_id) {
            let mut input = NewComment::new(content);
            if !self.author.trim().is_empty() {
                input = input.with_author(self.author.clone());
            }
            let outcome = self
                .feed
                .add_comment(self.store.as_ref(), post_id, input)
                .await;
            return Self::reply(post_id, outcome);
        }

        let form = self.forms.entry(post_id).or_default();
        form.content = content;
        form.author = self.author.clone();

        let input = match form.begin_submit() {
            Ok(input) => input,
            Err(e) => return format!("Error: {e}\n"),
        };

        let outcome = self
            .feed
            .add_comment(self.store.as_ref(), post_id, input)
            .await;

        if let Some(form) = self.forms.get_mut(&post_id) {
            form.finish(outcome.as_ref());
        }
        Self::reply(post_id, outcome)
    }

    fn reply(post_id: PostId, outcome: Result<Comment, DomainError>) -> String {
        match outcome {
            Ok(comment) => format!("Posted comment #{} on post {}\n", comment.id, post_id),
            Err(e) => {
                tracing::info!(post_id, error = %e, "Comment not posted");
                format!("Error: {e}\n")
            }
        }
    }
}
