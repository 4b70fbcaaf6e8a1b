//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
