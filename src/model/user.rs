use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UserDto {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct UserListDto {
    pub users: Vec<UserDto>,
}
