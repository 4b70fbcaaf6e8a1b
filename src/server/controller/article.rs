use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        article::{ArticleListDto, ArticleResponseDto, UpdateArticleVotesDto},
    },
    server::{
        error::{validation::ValidationError, AppError},
        model::article::{ArticleSortBy, GetArticlesParam, SortOrder},
        service::article::ArticleService,
        state::AppState,
        util::parse::{parse_body_or_default, parse_id},
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

/// Raw query string for the article listing.
///
/// Sort values are kept as strings so that unsupported values are reported through the
/// usual error body rather than an extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleQueryParams {
    pub topic: Option<String>,
    pub author: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

/// Get a single article by ID.
///
/// Returns the full article including its body and comment count.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Raw article ID path segment
///
/// # Returns
/// - `200 OK` - `{ "article": {...} }`
/// - `400 Bad Request` - Article ID is not an integer
/// - `404 Not Found` - No article with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved article", body = ArticleResponseDto),
        (status = 400, description = "Invalid article id", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_by_id(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&article_id, "article")?;

    let service = ArticleService::new(&state.db);

    let article = service.get_by_id(article_id).await?;

    Ok((
        StatusCode::OK,
        Json(ArticleResponseDto {
            article: article.into_dto(),
        }),
    ))
}

/// Get articles, optionally filtered and sorted.
///
/// Articles in the listing omit the body. Unknown topics and authors are reported as not
/// found rather than yielding an empty list.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Optional `topic`, `author`, `sort_by` and `order` query parameters
///
/// # Returns
/// - `200 OK` - `{ "articles": [...] }`
/// - `400 Bad Request` - Undecodable query string, or unsupported `sort_by` or `order`
/// - `404 Not Found` - Topic or author does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    params(
        ("topic" = Option<String>, Query, description = "Only articles with this topic slug"),
        ("author" = Option<String>, Query, description = "Only articles by this username"),
        ("sort_by" = Option<String>, Query, description = "Column to sort by, defaults to created_at"),
        ("order" = Option<String>, Query, description = "asc or desc, defaults to desc")
    ),
    responses(
        (status = 200, description = "Successfully retrieved articles", body = ArticleListDto),
        (status = 400, description = "Invalid query string, sort_by or order", body = ErrorDto),
        (status = 404, description = "Topic or author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(
    State(state): State<AppState>,
    params: Result<Query<ArticleQueryParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(|e| {
        tracing::debug!("Rejected article query string: {}", e);
        ValidationError::InvalidQuery
    })?;
    let sort_by = ArticleSortBy::parse(params.sort_by.as_deref())?;
    let order = SortOrder::parse(params.order.as_deref())?;

    let service = ArticleService::new(&state.db);

    let articles = service
        .get_all(GetArticlesParam {
            topic: params.topic,
            author: params.author,
            sort_by,
            order,
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(ArticleListDto {
            articles: articles
                .into_iter()
                .map(|a| a.into_list_item_dto())
                .collect(),
        }),
    ))
}

/// Change an article's vote count.
///
/// Adds `inc_votes` to the stored vote count; negative values decrement it.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `article_id` - Raw article ID path segment
/// - `body` - JSON body `{ "inc_votes": <integer> }`
///
/// # Returns
/// - `200 OK` - `{ "article": {...} }` with the updated vote count
/// - `400 Bad Request` - Invalid article ID, or `inc_votes` missing or not an integer
/// - `404 Not Found` - No article with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    tag = ARTICLE_TAG,
    params(
        ("article_id" = i32, Path, description = "Article ID")
    ),
    request_body = UpdateArticleVotesDto,
    responses(
        (status = 200, description = "Successfully updated votes", body = ArticleResponseDto),
        (status = 400, description = "Invalid article id or vote increment", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_article_votes(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let article_id = parse_id(&article_id, "article")?;
    let payload: UpdateArticleVotesDto = parse_body_or_default(&body);

    let service = ArticleService::new(&state.db);

    let article = service.update_votes(article_id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ArticleResponseDto {
            article: article.into_dto(),
        }),
    ))
}
