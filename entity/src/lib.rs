//! SeaORM entity definitions for the news database.

pub mod prelude;

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
