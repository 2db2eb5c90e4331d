use super::entity::Book;
use crate::domain::{DomainError, DomainResult};

/// Validates all Book invariants
/// Checks run in a fixed order: publication date, then ISBN
pub fn validate_book(book: &Book) -> DomainResult<()> {
    validate_publication_date(&book.publication_date)?;
    validate_isbn(&book.isbn)?;
    Ok(())
}

/// Publication date invariants:
/// 1. The empty string is valid (date unknown)
/// 2. Otherwise exactly `MM/DD/YYYY`: two-digit month, two-digit day,
///    four-digit year, separated by `/`
/// 3. Month in 1..=12, day in 1..=31, year >= 1
///
/// Day is bounded by 31 regardless of month. There is no per-month
/// day-count or leap-year check.
pub fn validate_publication_date(date: &str) -> DomainResult<()> {
    if date.is_empty() {
        return Ok(());
    }

    let invalid = || DomainError::InvalidDate(date.to_string());

    let parts: Vec<&str> = date.split('/').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }
    if parts[0].len() != 2 || parts[1].len() != 2 || parts[2].len() != 4 {
        return Err(invalid());
    }

    let month: u32 = parts[0].parse().map_err(|_| invalid())?;
    let day: u32 = parts[1].parse().map_err(|_| invalid())?;
    let year: u32 = parts[2].parse().map_err(|_| invalid())?;

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) || year == 0 {
        return Err(invalid());
    }

    Ok(())
}

/// ISBN invariants:
/// 1. Exactly two segments separated by a single `-`
/// 2. The first segment is exactly "978" or "979"
/// 3. The second segment is 10 characters long and parses as a
///    non-negative integer
pub fn validate_isbn(isbn: &str) -> DomainResult<()> {
    let invalid = || DomainError::InvalidIsbn(isbn.to_string());

    let parts: Vec<&str> = isbn.split('-').collect();
    if parts.len() != 2 {
        return Err(invalid());
    }
    if parts[0] != "978" && parts[0] != "979" {
        return Err(invalid());
    }
    if parts[1].len() != 10 || parts[1].parse::<u64>().is_err() {
        return Err(invalid());
    }

    Ok(())
}

/// Splits raw comma-delimited genre input, trimming each segment.
/// Empty input yields a single empty-string genre rather than an empty
/// list; callers and the persisted document both rely on that shape.
pub fn split_genres(raw: &str) -> Vec<String> {
    raw.split(',').map(|genre| genre.trim().to_string()).collect()
}
