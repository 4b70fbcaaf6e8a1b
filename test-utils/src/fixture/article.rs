//! Article fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating article entity models without database insertion.

use chrono::{DateTime, Utc};
use entity::article;

use crate::fixture::{default_timestamp, topic::DEFAULT_SLUG, user::DEFAULT_USERNAME};

/// Default test article title.
pub const DEFAULT_TITLE: &str = "Living in the shadow of a great man";

/// Default test article body.
pub const DEFAULT_BODY: &str = "I find this existence challenging";

/// Default test article image URL.
pub const DEFAULT_IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

/// Creates an article entity model with default values.
///
/// # Default Values
/// - article_id: `1`
/// - topic: `"coding"`
/// - author: `"butter_bridge"`
/// - votes: `0`
/// - created_at: 2020-01-01T00:00:00Z
pub fn entity() -> article::Model {
    entity_builder().build()
}

/// Creates an article entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let article = fixture::article::entity_builder()
///     .title("Sony Vaio; or, The Laptop")
///     .votes(100)
///     .build();
/// ```
pub fn entity_builder() -> ArticleEntityBuilder {
    ArticleEntityBuilder::default()
}

/// Builder for creating customized article entity models.
pub struct ArticleEntityBuilder {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: DateTime<Utc>,
    votes: i32,
}

impl Default for ArticleEntityBuilder {
    fn default() -> Self {
        Self {
            article_id: 1,
            title: DEFAULT_TITLE.to_string(),
            topic: DEFAULT_SLUG.to_string(),
            author: DEFAULT_USERNAME.to_string(),
            body: DEFAULT_BODY.to_string(),
            created_at: default_timestamp(),
            votes: 0,
        }
    }
}

impl ArticleEntityBuilder {
    pub fn article_id(mut self, article_id: i32) -> Self {
        self.article_id = article_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = topic.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn votes(mut self, votes: i32) -> Self {
        self.votes = votes;
        self
    }

    /// Builds and returns the article entity model.
    pub fn build(self) -> article::Model {
        article::Model {
            article_id: self.article_id,
            title: self.title,
            topic: self.topic,
            author: self.author,
            body: self.body,
            created_at: self.created_at,
            votes: self.votes,
            article_img_url: DEFAULT_IMG_URL.to_string(),
        }
    }
}
