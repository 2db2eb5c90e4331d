//! Critical Book Invariants:
//!
//! 1. The ISBN is the catalog key; key and field never diverge
//! 2. A non-empty publication date is always `MM/DD/YYYY`
//! 3. Day is bounded by 31 regardless of month; no leap-year check
//! 4. Genres keep user entry order; empty input is one empty genre
//! 5. Records are replaced whole on edit, never patched in place

pub mod entity;
pub mod invariants;

pub use entity::Book;
pub use invariants::{split_genres, validate_book, validate_isbn, validate_publication_date};
