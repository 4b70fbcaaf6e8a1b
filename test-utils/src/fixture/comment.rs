//! Comment fixtures for creating in-memory test data.

use entity::comment;

use crate::fixture::{default_timestamp, user::DEFAULT_USERNAME};

/// Default test comment author.
pub const DEFAULT_AUTHOR: &str = DEFAULT_USERNAME;

/// Default test comment body.
pub const DEFAULT_BODY: &str = "Great article, thanks for sharing!";

/// Creates a comment entity model with default values.
///
/// The comment belongs to article `1`, has no votes and is dated 2020-01-01.
pub fn entity() -> comment::Model {
    comment::Model {
        comment_id: 1,
        article_id: 1,
        author: DEFAULT_AUTHOR.to_string(),
        body: DEFAULT_BODY.to_string(),
        votes: 0,
        created_at: default_timestamp(),
    }
}
