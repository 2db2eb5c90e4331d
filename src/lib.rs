// src/lib.rs
// Bookshelf - Local-first personal book catalog
//
// Architecture:
// - Domain-centric: the book record and its invariants live in the domain
// - Explicit: no implicit behavior, no ambient state
// - Local-first: the user's JSON document is the only store
// - Single-actor: one synchronous caller drives all mutations

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain (book record, validation, comparison)
// ============================================================================

pub use domain::{
    split_genres, validate_book, validate_isbn, validate_publication_date, Book, DomainError,
    DomainResult,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{default_catalog_path, BookRepository, JsonBookRepository};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{AddBookRequest, CatalogService, EditBookRequest};
