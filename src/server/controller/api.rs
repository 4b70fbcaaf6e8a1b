use axum::{http::StatusCode, response::IntoResponse, Json};
use utoipa::OpenApi;

use crate::{
    model::api::EndpointsDto,
    server::router::{endpoint_descriptions, ApiDoc},
};

/// Tag for grouping API description endpoints in OpenAPI documentation
pub static API_TAG: &str = "api";

/// List every available endpoint.
///
/// Returns a description of each endpoint along with the query parameters it accepts,
/// derived from the OpenAPI document.
///
/// # Returns
/// - `200 OK` - Endpoint descriptions keyed by `"<METHOD> <path>"`
#[utoipa::path(
    get,
    path = "/api",
    tag = API_TAG,
    responses(
        (status = 200, description = "Endpoint descriptions", body = EndpointsDto)
    ),
)]
pub async fn get_endpoints() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(EndpointsDto {
            endpoints: endpoint_descriptions(),
        }),
    )
}

/// Serve the OpenAPI document.
#[utoipa::path(
    get,
    path = "/api/openapi.json",
    tag = API_TAG,
    responses(
        (status = 200, description = "OpenAPI 3 document")
    ),
)]
pub async fn get_openapi() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
