use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CommentDto {
    pub comment_id: i32,
    pub article_id: i32,
    pub author: String,
    pub body: String,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CommentResponseDto {
    pub comment: CommentDto,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CommentListDto {
    pub comments: Vec<CommentDto>,
}

/// Body of `POST /api/articles/{article_id}/comments`.
///
/// Both fields are optional at the deserialization level; completeness is
/// checked by the comment validation pipeline. Unknown fields are ignored.
#[derive(Serialize, Deserialize, Default, Clone, Debug, ToSchema)]
pub struct CreateCommentDto {
    pub username: Option<String>,
    pub body: Option<String>,
}
