use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub msg: String,
}

/// Description of a single endpoint as listed by `GET /api`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct EndpointDto {
    pub description: String,
    /// Names of the query parameters the endpoint accepts.
    pub queries: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct EndpointsDto {
    /// Keyed by `"<METHOD> <path>"`, e.g. `"GET /api/topics"`.
    pub endpoints: BTreeMap<String, EndpointDto>,
}
