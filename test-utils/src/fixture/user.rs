//! User fixtures for creating in-memory test data.

use entity::user;

/// Default test username.
pub const DEFAULT_USERNAME: &str = "butter_bridge";

/// Default test display name.
pub const DEFAULT_NAME: &str = "jonny";

/// Default test avatar URL.
pub const DEFAULT_AVATAR_URL: &str =
    "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg";

/// Creates a user entity model with default values.
///
/// # Default Values
/// - username: `"butter_bridge"`
/// - name: `"jonny"`
/// - avatar_url: a static image URL
pub fn entity() -> user::Model {
    user::Model {
        username: DEFAULT_USERNAME.to_string(),
        name: DEFAULT_NAME.to_string(),
        avatar_url: DEFAULT_AVATAR_URL.to_string(),
    }
}
