// src/error/mod.rs
//
// Error module
//
// Crate-wide error type and result alias

pub mod types;

pub use types::{AppError, AppResult};
