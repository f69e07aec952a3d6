//! Repository layer for user records.

mod user_repository;

pub use user_repository::{UserRepository, UserStore};
