//! Existence and payload checks run before mutating queries.
//!
//! New comments go through a short-circuiting pipeline whose order is observable by
//! clients:
//!
//! 1. The target article must exist (`ArticleNotFound`)
//! 2. `username` and `body` must both be present and non-empty (`MissingFields`)
//! 3. `username` must belong to a known user (`InvalidUsername`)
//!
//! So a payload missing its username, sent to an unknown article, reports the
//! missing article.
//!
//! The existence checks are separate round trips from the write that follows; a row
//! removed between check and write surfaces as a database error or a "not found"
//! result from the write itself.

use sea_orm::DatabaseConnection;
use serde_json::Value;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository, user::UserRepository},
    error::{validation::ValidationError, AppError},
    model::comment::{CreateCommentParam, NewCommentPayload},
};

pub struct Validator<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> Validator<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Fails with `ArticleNotFound` unless the article exists.
    pub async fn require_article(&self, article_id: i32) -> Result<(), AppError> {
        if !ArticleRepository::new(self.db).exists(article_id).await? {
            return Err(ValidationError::ArticleNotFound.into());
        }

        Ok(())
    }

    /// Fails with `CommentNotFound` unless the comment exists.
    pub async fn require_comment(&self, comment_id: i32) -> Result<(), AppError> {
        if !CommentRepository::new(self.db).exists(comment_id).await? {
            return Err(ValidationError::CommentNotFound.into());
        }

        Ok(())
    }

    /// Fails with `InvalidUsername` unless a user with this username exists.
    pub async fn require_username(&self, username: &str) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists(username).await? {
            return Err(ValidationError::InvalidUsername.into());
        }

        Ok(())
    }

    /// Runs the full new-comment pipeline and returns insert-ready parameters.
    ///
    /// # Arguments
    /// - `article_id` - Article the comment is posted to
    /// - `payload` - Raw username/body from the request
    ///
    /// # Returns
    /// - `Ok(CreateCommentParam)` - All checks passed
    /// - `Err(AppError::ValidationErr)` - The first failing check, in pipeline order
    /// - `Err(AppError::DbErr)` - An existence query failed
    pub async fn validate_new_comment(
        &self,
        article_id: i32,
        payload: NewCommentPayload,
    ) -> Result<CreateCommentParam, AppError> {
        self.require_article(article_id).await?;

        let (username, body) = required_comment_fields(payload)?;

        self.require_username(&username).await?;

        Ok(CreateCommentParam {
            article_id,
            username,
            body,
        })
    }
}

/// Extracts `username` and `body`, requiring both to be non-empty.
pub fn required_comment_fields(
    payload: NewCommentPayload,
) -> Result<(String, String), ValidationError> {
    match (payload.username, payload.body) {
        (Some(username), Some(body)) if !username.is_empty() && !body.is_empty() => {
            Ok((username, body))
        }
        _ => Err(ValidationError::MissingFields),
    }
}

/// Validates the `inc_votes` value of a vote update.
///
/// # Returns
/// - `Ok(i32)` - The signed delta to apply
/// - `Err(ValidationError::MissingVotes)` - No `inc_votes` was supplied
/// - `Err(ValidationError::InvalidVotes)` - `inc_votes` is not an integer in `i32` range
pub fn vote_delta(inc_votes: Option<&Value>) -> Result<i32, ValidationError> {
    let value = inc_votes.ok_or(ValidationError::MissingVotes)?;

    value
        .as_i64()
        .and_then(|n| i32::try_from(n).ok())
        .ok_or(ValidationError::InvalidVotes)
}
