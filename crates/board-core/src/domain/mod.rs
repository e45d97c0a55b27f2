//! Domain entities - the core business objects.

mod comment;
mod post;

pub use comment::{Comment, CommentId, NewComment, ANONYMOUS_AUTHOR};
pub use post::{Post, PostId};
