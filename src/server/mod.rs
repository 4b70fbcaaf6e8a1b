//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the news API: HTTP endpoints, validation,
//! data access, and the infrastructure needed to run them. The backend uses Axum as the
//! web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation and orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Tracing, database connection, migrations and shutdown signals
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** parses path, query and body input, calls a service
//! 3. **Service** validates the request against stored data, calls the data layer
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
