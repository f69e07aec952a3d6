//! Common utilities shared across the workspace.
//!
//! This crate provides:
//! - The error surface exposed to callers of the user repository
//! - Configuration structures for the record store

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
