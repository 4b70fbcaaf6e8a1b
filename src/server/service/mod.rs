//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Validation**: Running the existence and payload checks that must pass before a query
//! - **Orchestration**: Coordinating repository calls
//! - **Error mapping**: Turning "not found" repository results into `ValidationError`s

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
pub mod validation;
