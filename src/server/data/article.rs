//! Article data repository for database operations.
//!
//! Every read goes through the comment-count aggregation in [`super::aggregate`], so
//! returned articles always carry an integer `comment_count`.

use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::aggregate,
    model::article::{Article, ArticleSortBy, ArticleWithCount, GetArticlesParam, VoteUpdate},
};

/// Repository providing database operations for articles.
pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    /// Creates a new ArticleRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets an article by ID together with its comment count.
    ///
    /// # Arguments
    /// - `article_id` - ID of the article to fetch
    ///
    /// # Returns
    /// - `Ok(Some(Article))` - Article found
    /// - `Ok(None)` - No article with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, article_id: i32) -> Result<Option<Article>, DbErr> {
        let row = aggregate::with_comment_count(entity::prelude::Article::find())
            .filter(entity::article::Column::ArticleId.eq(article_id))
            .into_model::<ArticleWithCount>()
            .one(self.db)
            .await?;

        Ok(row.map(Article::from_with_count))
    }

    /// Gets all articles matching the filters, sorted as requested.
    ///
    /// Filters are applied as given; checking that the topic or author exists is the
    /// caller's responsibility. Ties on the sort column are broken by `article_id` in
    /// the same direction.
    ///
    /// # Arguments
    /// - `param` - Optional topic/author filters plus sort column and direction
    ///
    /// # Returns
    /// - `Ok(Vec<Article>)` - Matching articles, possibly empty
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, param: &GetArticlesParam) -> Result<Vec<Article>, DbErr> {
        let mut query = aggregate::with_comment_count(entity::prelude::Article::find());

        if let Some(topic) = &param.topic {
            query = query.filter(entity::article::Column::Topic.eq(topic.as_str()));
        }

        if let Some(author) = &param.author {
            query = query.filter(entity::article::Column::Author.eq(author.as_str()));
        }

        let order = param.order.into_order();
        query = match param.sort_by {
            ArticleSortBy::CommentCount => {
                query.order_by(aggregate::comment_count_expr(), order.clone())
            }
            ArticleSortBy::ArticleId => {
                query.order_by(entity::article::Column::ArticleId, order.clone())
            }
            ArticleSortBy::Title => query.order_by(entity::article::Column::Title, order.clone()),
            ArticleSortBy::Topic => query.order_by(entity::article::Column::Topic, order.clone()),
            ArticleSortBy::Author => query.order_by(entity::article::Column::Author, order.clone()),
            ArticleSortBy::CreatedAt => {
                query.order_by(entity::article::Column::CreatedAt, order.clone())
            }
            ArticleSortBy::Votes => query.order_by(entity::article::Column::Votes, order.clone()),
        };

        if param.sort_by != ArticleSortBy::ArticleId {
            query = query.order_by(entity::article::Column::ArticleId, order);
        }

        let rows = query
            .into_model::<ArticleWithCount>()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(Article::from_with_count).collect())
    }

    /// Checks whether an article with the given ID exists.
    ///
    /// # Returns
    /// - `Ok(true)` - Article exists
    /// - `Ok(false)` - No such article
    /// - `Err(DbErr)` - Database error during count query
    pub async fn exists(&self, article_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Article::find()
            .filter(entity::article::Column::ArticleId.eq(article_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adjusts an article's vote count by a signed delta.
    ///
    /// The increment is a single `UPDATE articles SET votes = votes + $1` statement, so
    /// concurrent increments on the same row never lose updates. The statement only
    /// matches while the new count stays within `i32`, computed in 64-bit arithmetic, so
    /// an overflowing delta leaves the row untouched. The article is then re-read with
    /// its comment count.
    ///
    /// # Arguments
    /// - `article_id` - ID of the article to update
    /// - `delta` - Amount to add to the current vote count (may be negative)
    ///
    /// # Returns
    /// - `Ok(VoteUpdate::Updated(Article))` - The updated article
    /// - `Ok(VoteUpdate::NotFound)` - No article with that ID
    /// - `Ok(VoteUpdate::OutOfRange)` - The new count would overflow; nothing was written
    /// - `Err(DbErr)` - Database error during update or re-read
    pub async fn increment_votes(&self, article_id: i32, delta: i32) -> Result<VoteUpdate, DbErr> {
        let delta = i64::from(delta);

        let result = entity::prelude::Article::update_many()
            .col_expr(
                entity::article::Column::Votes,
                Expr::col(entity::article::Column::Votes).add(delta),
            )
            .filter(entity::article::Column::ArticleId.eq(article_id))
            .filter(
                Expr::col(entity::article::Column::Votes)
                    .add(delta)
                    .between(i64::from(i32::MIN), i64::from(i32::MAX)),
            )
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return if self.exists(article_id).await? {
                Ok(VoteUpdate::OutOfRange)
            } else {
                Ok(VoteUpdate::NotFound)
            };
        }

        Ok(self
            .get_by_id(article_id)
            .await?
            .map_or(VoteUpdate::NotFound, VoteUpdate::Updated))
    }
}
