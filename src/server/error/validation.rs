use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request validation failures detected before or instead of a database write.
///
/// Each variant maps to a fixed HTTP status and client-facing message. The
/// message is the `Display` output, so it is safe to return verbatim.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// The article referenced by the request does not exist.
    #[error("Article not found")]
    ArticleNotFound,

    /// The comment referenced by the request does not exist.
    #[error("Comment not found")]
    CommentNotFound,

    /// The `topic` filter names a topic that does not exist.
    #[error("Topic not found")]
    TopicNotFound,

    /// The `author` filter names a user that does not exist.
    #[error("Author not found")]
    AuthorNotFound,

    /// The username supplied for a new comment does not match any user.
    #[error("Username not found")]
    InvalidUsername,

    /// `username` or `body` is absent or empty in a new comment.
    #[error("Username and body are required")]
    MissingFields,

    /// A vote update body without `inc_votes`.
    #[error("inc_votes is required")]
    MissingVotes,

    /// `inc_votes` is present but is not a 32-bit integer.
    #[error("inc_votes must be an integer")]
    InvalidVotes,

    /// Applying `inc_votes` would take the vote count outside the 32-bit range.
    #[error("inc_votes would take votes out of range")]
    VotesOutOfRange,

    /// The query string could not be decoded, e.g. a repeated parameter.
    #[error("Invalid query string")]
    InvalidQuery,

    /// A path identifier that does not parse as an integer id.
    #[error("Invalid {resource} id")]
    InvalidId {
        /// Which kind of identifier failed, e.g. "article"
        resource: &'static str,
    },

    #[error("Invalid sort_by query")]
    InvalidSortBy,

    #[error("Invalid order query")]
    InvalidOrder,
}

impl ValidationError {
    /// HTTP status the error is reported with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ArticleNotFound
            | Self::CommentNotFound
            | Self::TopicNotFound
            | Self::AuthorNotFound
            | Self::InvalidUsername => StatusCode::NOT_FOUND,
            Self::MissingFields
            | Self::MissingVotes
            | Self::InvalidVotes
            | Self::VotesOutOfRange
            | Self::InvalidQuery
            | Self::InvalidId { .. }
            | Self::InvalidSortBy
            | Self::InvalidOrder => StatusCode::BAD_REQUEST,
        }
    }
}

/// Converts validation errors into `{ "msg": ... }` responses with the status
/// returned by [`ValidationError::status`].
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(ErrorDto {
                msg: self.to_string(),
            }),
        )
            .into_response()
    }
}
