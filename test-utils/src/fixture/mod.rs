//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and supply the default values
//! used by the factories. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let article = fixture::article::entity();
//!
//! let popular = fixture::article::entity_builder()
//!     .votes(100)
//!     .build();
//! ```

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

use chrono::{DateTime, Utc};

/// Timestamp shared by all fixtures: 2020-01-01T00:00:00Z.
pub fn default_timestamp() -> DateTime<Utc> {
    DateTime::from_timestamp(1_577_836_800, 0).unwrap_or_default()
}

pub use article::{entity as article_entity, entity_builder as article_entity_builder};
pub use comment::entity as comment_entity;
pub use topic::entity as topic_entity;
pub use user::entity as user_entity;
