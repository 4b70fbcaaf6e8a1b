use crate::model::user::UserDto;

/// Registered user, referenced as the author of articles and comments.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            username: entity.username,
            name: entity.name,
            avatar_url: entity.avatar_url,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            username: self.username,
            name: self.name,
            avatar_url: self.avatar_url,
        }
    }
}
