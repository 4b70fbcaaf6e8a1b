//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON shapes of request and response bodies. Server-side
//! domain models convert into them at the controller boundary.

pub mod api;
pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
