use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Full article including its body, returned by single-article reads.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleDto {
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

/// Article as it appears in listings, without the body.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ArticleListItemDto {
    pub article_id: i32,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    pub votes: i32,
    pub article_img_url: String,
    pub comment_count: i64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ArticleResponseDto {
    pub article: ArticleDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ArticleListDto {
    pub articles: Vec<ArticleListItemDto>,
}

/// Body of `PATCH /api/articles/{article_id}`.
///
/// `inc_votes` is kept as a raw JSON value so that a present but non-integer
/// value can be told apart from a missing one.
#[derive(Serialize, Deserialize, Default, Debug, ToSchema)]
pub struct UpdateArticleVotesDto {
    #[schema(value_type = Option<i32>)]
    pub inc_votes: Option<serde_json::Value>,
}
