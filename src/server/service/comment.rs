//! Comment service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::comment::CommentRepository,
    error::{validation::ValidationError, AppError},
    model::comment::{Comment, NewCommentPayload},
    service::validation::Validator,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the comments of an article, newest first.
    ///
    /// An existing article without comments yields an empty list; an unknown article
    /// fails with `ArticleNotFound`.
    pub async fn get_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, AppError> {
        Validator::new(self.db).require_article(article_id).await?;

        let repo = CommentRepository::new(self.db);

        Ok(repo.get_by_article_id(article_id).await?)
    }

    /// Validates and stores a new comment on an article.
    ///
    /// See [`Validator::validate_new_comment`] for the order in which failures are
    /// reported.
    pub async fn create(
        &self,
        article_id: i32,
        payload: NewCommentPayload,
    ) -> Result<Comment, AppError> {
        let param = Validator::new(self.db)
            .validate_new_comment(article_id, payload)
            .await?;

        let repo = CommentRepository::new(self.db);

        Ok(repo.create(param).await?)
    }

    /// Deletes a comment once it is confirmed to exist.
    ///
    /// # Returns
    /// - `Ok(())` - The comment was removed
    /// - `Err(ValidationError::CommentNotFound)` - No comment with that ID, including one
    ///   removed between the existence check and the delete
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, comment_id: i32) -> Result<(), AppError> {
        Validator::new(self.db).require_comment(comment_id).await?;

        let repo = CommentRepository::new(self.db);

        if !repo.delete(comment_id).await? {
            return Err(ValidationError::CommentNotFound.into());
        }

        Ok(())
    }
}
