//! HTTP request handlers.
//!
//! Controllers extract path, query and body input, hand it to a service, and convert
//! the resulting domain models into DTOs. Path identifiers and bodies are taken raw and
//! parsed here so that malformed input is reported with the same `{ "msg": ... }` shape
//! as every other error.

pub mod api;
pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;
