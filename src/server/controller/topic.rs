use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, topic::TopicDto},
    server::{error::AppError, service::topic::TopicService, state::AppState},
};

/// Tag for grouping topic endpoints in OpenAPI documentation
pub static TOPIC_TAG: &str = "topic";

/// Get all topics.
///
/// Returns every topic as a bare JSON array.
///
/// # Returns
/// - `200 OK` - Array of topics
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/topics",
    tag = TOPIC_TAG,
    responses(
        (status = 200, description = "Successfully retrieved topics", body = Vec<TopicDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = TopicService::new(&state.db);

    let topics = service.get_all().await?;

    let topics_dto: Vec<TopicDto> = topics.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(topics_dto)))
}
