use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentListDto, CommentResponseDto, CreateCommentDto},
    },
    server::{
        error::AppError,
        model::comment::NewCommentPayload,
        service::comment::CommentService,
        state::AppState,
        util::parse::{parse_body_or_default, parse_id},
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get the comments on an article.
///
/// Comments are returned newest first. An existing article without comments yields an
/// empty list.
///
/// # Returns
/// - `200 OK` - `{ "comments": [...] }`
/// - `400 Bad Request` - Article ID is not an integer
/// - `404 Not Found` - No article with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved comments", body = CommentListDto),
        (status = 400, description = "Invalid article id", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&article_id, "article")?;

    let service = CommentService::new(&state.db);

    let comments = service.get_by_article_id(article_id).await?;

    Ok((
        StatusCode::OK,
        Json(CommentListDto {
            comments: comments.into_iter().map(|c| c.into_dto()).collect(),
        }),
    ))
}

/// Post a comment on an article.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Raw article ID path segment
/// - `body` - JSON body `{ "username": ..., "body": ... }`
///
/// # Returns
/// - `201 Created` - `{ "comment": {...} }`
/// - `400 Bad Request` - Invalid article ID, or `username`/`body` missing or blank
/// - `404 Not Found` - Article or username does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    tag = COMMENT_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully created comment", body = CommentResponseDto),
        (status = 400, description = "Invalid article id or missing fields", body = ErrorDto),
        (status = 404, description = "Article or username not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_article_comment(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&article_id, "article")?;
    let dto: CreateCommentDto = parse_body_or_default(&body);

    let service = CommentService::new(&state.db);

    let comment = service
        .create(article_id, NewCommentPayload::from_dto(dto))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CommentResponseDto {
            comment: comment.into_dto(),
        }),
    ))
}

/// Delete a comment by ID.
///
/// # Returns
/// - `204 No Content` - Comment deleted
/// - `400 Bad Request` - Comment ID is not an integer
/// - `404 Not Found` - No comment with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 400, description = "Invalid comment id", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let comment_id = parse_id(&comment_id, "comment")?;

    let service = CommentService::new(&state.db);

    service.delete(comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
