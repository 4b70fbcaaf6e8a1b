//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has its own module with a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let topic = factory::create_topic(&db).await?;
//! let user = factory::create_user(&db).await?;
//! let article = factory::create_article(&db, &topic.slug, &user.username).await?;
//!
//! // Or with all dependencies at once
//! let (topic, user, article) = factory::helpers::create_article_with_dependencies(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let article = factory::article::ArticleFactory::new(&db, &topic.slug, &user.username)
//!     .title("Eight pug gifs that remind me of mitch")
//!     .votes(100)
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod comment;
pub mod helpers;
pub mod topic;
pub mod user;

pub use article::create_article;
pub use comment::create_comment;
pub use topic::create_topic;
pub use user::create_user;
