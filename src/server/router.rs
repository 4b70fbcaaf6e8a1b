use std::{any::Any, collections::BTreeMap};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::{
        path::{Operation, ParameterIn},
        OpenApi as OpenApiDoc,
    },
    OpenApi,
};

use crate::{
    model::api::{EndpointDto, ErrorDto},
    server::{
        controller::{
            api::{get_endpoints, get_openapi},
            article::{get_article_by_id, get_articles, patch_article_votes},
            comment::{delete_comment, get_article_comments, post_article_comment},
            topic::get_topics,
            user::get_users,
        },
        error::{AppError, INTERNAL_SERVER_ERROR_MSG},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "News API", description = "Articles, topics, users and comments"),
    paths(
        crate::server::controller::api::get_endpoints,
        crate::server::controller::api::get_openapi,
        crate::server::controller::topic::get_topics,
        crate::server::controller::article::get_articles,
        crate::server::controller::article::get_article_by_id,
        crate::server::controller::article::patch_article_votes,
        crate::server::controller::comment::get_article_comments,
        crate::server::controller::comment::post_article_comment,
        crate::server::controller::comment::delete_comment,
        crate::server::controller::user::get_users,
    ),
    tags(
        (name = "api", description = "API description"),
        (name = "topic", description = "Article topics"),
        (name = "article", description = "Articles and votes"),
        (name = "comment", description = "Article comments"),
        (name = "user", description = "Users"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(get_endpoints))
        .route("/api/openapi.json", get(get_openapi))
        .route("/api/topics", get(get_topics))
        .route("/api/articles", get(get_articles))
        .route(
            "/api/articles/{article_id}",
            get(get_article_by_id).patch(patch_article_votes),
        )
        .route(
            "/api/articles/{article_id}/comments",
            get(get_article_comments).post(post_article_comment),
        )
        .route("/api/comments/{comment_id}", delete(delete_comment))
        .route("/api/users", get(get_users))
        .fallback(handler_404)
        .method_not_allowed_fallback(handler_404)
}

/// Builds the complete application with state and middleware layers applied.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Describes every documented endpoint, keyed by `"<METHOD> <path>"`.
///
/// Descriptions come from each operation's summary, and the listed queries are the
/// operation's query parameters.
pub fn endpoint_descriptions() -> BTreeMap<String, EndpointDto> {
    describe_endpoints(&ApiDoc::openapi())
}

fn describe_endpoints(doc: &OpenApiDoc) -> BTreeMap<String, EndpointDto> {
    let mut endpoints = BTreeMap::new();

    for (path, item) in &doc.paths.paths {
        let operations = [
            ("GET", &item.get),
            ("POST", &item.post),
            ("PATCH", &item.patch),
            ("PUT", &item.put),
            ("DELETE", &item.delete),
        ];

        for (method, operation) in operations {
            if let Some(operation) = operation {
                endpoints.insert(format!("{method} {path}"), describe_operation(operation));
            }
        }
    }

    endpoints
}

fn describe_operation(operation: &Operation) -> EndpointDto {
    let description = operation
        .summary
        .clone()
        .or_else(|| operation.description.clone())
        .unwrap_or_default();

    let queries = operation
        .parameters
        .iter()
        .flatten()
        .filter(|p| matches!(p.parameter_in, ParameterIn::Query))
        .map(|p| p.name.clone())
        .collect();

    EndpointDto {
        description,
        queries,
    }
}

async fn handler_404() -> AppError {
    AppError::NotFound("Not Found".to_string())
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto {
            msg: INTERNAL_SERVER_ERROR_MSG.to_string(),
        }),
    )
        .into_response()
}
