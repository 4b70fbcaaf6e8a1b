//! Comment data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::comment::{Comment, CreateCommentParam};

/// Repository providing database operations for comments.
pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    /// Creates a new CommentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all comments for an article, newest first.
    ///
    /// Comments sharing a timestamp are ordered by descending ID so the result is
    /// deterministic.
    ///
    /// # Arguments
    /// - `article_id` - ID of the article whose comments to fetch
    ///
    /// # Returns
    /// - `Ok(Vec<Comment>)` - Comments for the article; empty if it has none
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_article_id(&self, article_id: i32) -> Result<Vec<Comment>, DbErr> {
        let comments = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ArticleId.eq(article_id))
            .order_by_desc(entity::comment::Column::CreatedAt)
            .order_by_desc(entity::comment::Column::CommentId)
            .all(self.db)
            .await?;

        Ok(comments.into_iter().map(Comment::from_entity).collect())
    }

    /// Inserts a comment and returns the stored row.
    ///
    /// The comment starts with zero votes and is stamped with the current time.
    ///
    /// # Arguments
    /// - `param` - Validated article ID, author username and body
    ///
    /// # Returns
    /// - `Ok(Comment)` - The created comment including its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateCommentParam) -> Result<Comment, DbErr> {
        let comment = entity::comment::ActiveModel {
            article_id: ActiveValue::Set(param.article_id),
            author: ActiveValue::Set(param.username),
            body: ActiveValue::Set(param.body),
            votes: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(comment))
    }

    /// Deletes a comment by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was removed
    /// - `Ok(false)` - No comment with that ID existed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, comment_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks whether a comment with the given ID exists.
    pub async fn exists(&self, comment_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Comment::find()
            .filter(entity::comment::Column::CommentId.eq(comment_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
