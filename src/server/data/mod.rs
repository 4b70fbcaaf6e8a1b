//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Every statement is built through SeaORM's query builder, so values are always bound
//! as parameters.

pub mod aggregate;
pub mod article;
pub mod comment;
pub mod topic;
pub mod user;

#[cfg(test)]
mod test;
