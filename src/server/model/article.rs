//! Article domain models and query parameters.
//!
//! Articles are always read together with their derived `comment_count`, which is
//! never stored and is computed by the repository on every read.

use chrono::{DateTime, Utc};
use sea_orm::{sea_query::Order, FromQueryResult};

use crate::{
    model::article::{ArticleDto, ArticleListItemDto},
    server::error::validation::ValidationError,
};

/// Article row joined with its aggregated comment count.
///
/// Produced by the comment-count aggregation query; `comment_count` is decoded
/// straight into an integer.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct ArticleWithCount {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// Article with its comment count.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

impl Article {
    /// Converts an aggregated row to an article domain model at the repository boundary.
    pub fn from_with_count(row: ArticleWithCount) -> Self {
        Self {
            article_id: row.article_id,
            title: row.title,
            topic: row.topic,
            author: row.author,
            body: row.body,
            created_at: row.created_at,
            votes: row.votes,
            article_img_url: row.article_img_url,
            comment_count: row.comment_count,
        }
    }

    /// Converts to the full DTO used by single-article responses.
    pub fn into_dto(self) -> ArticleDto {
        ArticleDto {
            article_id: self.article_id,
            title: self.title,
            topic: self.topic,
            author: self.author,
            body: self.body,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: self.article_img_url,
            comment_count: self.comment_count,
        }
    }

    /// Converts to the listing DTO, which omits the body.
    pub fn into_list_item_dto(self) -> ArticleListItemDto {
        ArticleListItemDto {
            article_id: self.article_id,
            title: self.title,
            topic: self.topic,
            author: self.author,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: self.article_img_url,
            comment_count: self.comment_count,
        }
    }
}

/// Outcome of applying a vote delta to an article.
#[derive(Debug, Clone, PartialEq)]
pub enum VoteUpdate {
    /// The delta was applied; carries the re-read article.
    Updated(Article),
    /// No article with that ID.
    NotFound,
    /// The article exists but the new count would not fit in the votes column.
    OutOfRange,
}

/// Column an article listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleSortBy {
    ArticleId,
    Title,
    Topic,
    Author,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl ArticleSortBy {
    /// Parses the `sort_by` query value; `None` selects the default (`created_at`).
    pub fn parse(value: Option<&str>) -> Result<Self, ValidationError> {
        let Some(value) = value else {
            return Ok(Self::default());
        };

        match value {
            "article_id" => Ok(Self::ArticleId),
            "title" => Ok(Self::Title),
            "topic" => Ok(Self::Topic),
            "author" => Ok(Self::Author),
            "created_at" => Ok(Self::CreatedAt),
            "votes" => Ok(Self::Votes),
            "comment_count" => Ok(Self::CommentCount),
            _ => Err(ValidationError::InvalidSortBy),
        }
    }
}

/// Direction of an article listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parses the `order` query value case-insensitively; `None` selects `desc`.
    pub fn parse(value: Option<&str>) -> Result<Self, ValidationError> {
        match value.map(str::to_ascii_lowercase).as_deref() {
            None => Ok(Self::default()),
            Some("asc") => Ok(Self::Asc),
            Some("desc") => Ok(Self::Desc),
            Some(_) => Err(ValidationError::InvalidOrder),
        }
    }

    pub fn into_order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

/// Filter and sort options for listing articles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetArticlesParam {
    pub topic: Option<String>,
    pub author: Option<String>,
    pub sort_by: ArticleSortBy,
    pub order: SortOrder,
}
