// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod catalog_service;


// Re-export the catalog service and its request types
pub use catalog_service::{AddBookRequest, CatalogService, EditBookRequest};
