//! Comment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::comment::{CommentDto, CreateCommentDto};

/// Reply attached to an article.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            comment_id: entity.comment_id,
            article_id: entity.article_id,
            author: entity.author,
            body: entity.body,
            votes: entity.votes,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            comment_id: self.comment_id,
            article_id: self.article_id,
            author: self.author,
            body: self.body,
            votes: self.votes,
            created_at: self.created_at,
        }
    }
}

/// Unvalidated fields of a new comment as received from the client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCommentPayload {
    pub username: Option<String>,
    pub body: Option<String>,
}

impl NewCommentPayload {
    pub fn from_dto(dto: CreateCommentDto) -> Self {
        Self {
            username: dto.username,
            body: dto.body,
        }
    }
}

/// Validated parameters for inserting a comment.
///
/// Only produced by the comment validation pipeline, after the article and the
/// author have both been confirmed to exist.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCommentParam {
    pub article_id: i32,
    pub username: String,
    pub body: String,
}
