//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The record store, error surface and CLI all build on the types here.

pub mod constants;
pub mod email;
pub mod error;
pub mod user;

pub use constants::*;
pub use email::is_valid_email;
pub use error::{DomainError, DomainResult};
pub use user::User;
