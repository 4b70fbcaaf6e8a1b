//! News API Test Utils
//!
//! Provides shared testing utilities for building unit, data-layer and HTTP tests for the
//! news API. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases, factories and fixtures for seeding data, and an in-process HTTP client.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **TestApp**: Sends requests to an Axum router without binding a port
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_article_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_news_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (_topic, _user, article) = factory::helpers::create_article_with_dependencies(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
