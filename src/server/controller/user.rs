use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, user::UserListDto},
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get all users.
///
/// Returns every user projected to username, name and avatar URL.
///
/// # Returns
/// - `200 OK` - `{ "users": [...] }`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = UserListDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);

    let users = user_service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(UserListDto {
            users: users.into_iter().map(|u| u.into_dto()).collect(),
        }),
    ))
}
