use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Represents one book in the catalog
/// This is the sole entity; the ISBN doubles as the catalog key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Title, free text, may be empty
    pub title: String,

    /// Author, free text, may be empty
    pub author: String,

    /// Genres in the order the user entered them, each trimmed.
    /// Empty form input is kept as a single empty-string genre.
    pub genres: Vec<String>,

    /// `MM/DD/YYYY`, or the empty string when unknown
    pub publication_date: String,

    /// Free-form description
    pub description: String,

    /// ISBN-13 in the form `978-XXXXXXXXXX` or `979-XXXXXXXXXX`
    pub isbn: String,
}

impl Book {
    /// Create a new Book entity
    /// Fields are expected to be trimmed and the genres already split
    pub fn new(
        title: String,
        author: String,
        genres: Vec<String>,
        publication_date: String,
        description: String,
        isbn: String,
    ) -> Self {
        Self {
            title,
            author,
            genres,
            publication_date,
            description,
            isbn,
        }
    }

    /// Case-sensitive lexicographic ordering on the author field
    pub fn cmp_by_author(&self, other: &Book) -> Ordering {
        self.author.cmp(&other.author)
    }

    /// Case-sensitive lexicographic ordering on the title field
    pub fn cmp_by_title(&self, other: &Book) -> Ordering {
        self.title.cmp(&other.title)
    }

    /// Numeric ordering on the ISBN with hyphens stripped, so equal
    /// numbers compare equal regardless of hyphenation
    pub fn cmp_by_isbn(&self, other: &Book) -> Ordering {
        self.isbn_numeric().cmp(&other.isbn_numeric())
    }

    /// Orders undated books before dated ones; non-empty dates compare
    /// by year, then month, then day, numerically
    pub fn cmp_by_publication_date(&self, other: &Book) -> Ordering {
        self.date_key().cmp(&other.date_key())
    }

    /// ISBN as an unsigned integer. Validated records always parse;
    /// anything else orders first.
    fn isbn_numeric(&self) -> u64 {
        self.isbn.replace('-', "").parse().unwrap_or(0)
    }

    /// `(year, month, day)` for a non-empty date, `None` for empty.
    /// `None` orders before any `Some`, and tuple ordering gives year
    /// precedence over month over day.
    fn date_key(&self) -> Option<(u32, u32, u32)> {
        if self.publication_date.is_empty() {
            return None;
        }
        let mut parts = self.publication_date.split('/');
        let month = parts.next()?.parse().ok()?;
        let day = parts.next()?.parse().ok()?;
        let year = parts.next()?.parse().ok()?;
        Some((year, month, day))
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, Publication Date: {}, Description: {}, ISBN: {}",
            self.title, self.author, self.publication_date, self.description, self.isbn
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(author: &str, title: &str, date: &str, isbn: &str) -> Book {
        Book::new(
            title.to_string(),
            author.to_string(),
            vec!["Fantasy".to_string()],
            date.to_string(),
            String::new(),
            isbn.to_string(),
        )
    }

    #[test]
    fn test_isbn_ordering_ignores_hyphenation() {
        let a = book("", "", "", "978-0345339683");
        let b = book("", "", "", "9780345339683");
        assert_eq!(a.cmp_by_isbn(&b), Ordering::Equal);
    }

    #[test]
    fn test_isbn_ordering_is_numeric() {
        let a = book("", "", "", "978-0345339683");
        let b = book("", "", "", "979-0000000000");
        assert_eq!(a.cmp_by_isbn(&b), Ordering::Less);
    }

    #[test]
    fn test_author_ordering_is_case_sensitive() {
        // uppercase letters order before lowercase ones
        let a = book("Zelazny", "", "", "978-0000000001");
        let b = book("anonymous", "", "", "978-0000000002");
        assert_eq!(a.cmp_by_author(&b), Ordering::Less);
    }

    #[test]
    fn test_year_takes_precedence_over_month() {
        let a = book("", "", "01/01/2000", "978-0000000001");
        let b = book("", "", "12/01/1999", "978-0000000002");
        assert_eq!(a.cmp_by_publication_date(&b), Ordering::Greater);
    }

    #[test]
    fn test_empty_date_orders_first() {
        let a = book("", "", "", "978-0000000001");
        let b = book("", "", "01/01/1900", "978-0000000002");
        assert_eq!(a.cmp_by_publication_date(&b), Ordering::Less);
        assert_eq!(b.cmp_by_publication_date(&a), Ordering::Greater);
    }

    #[test]
    fn test_two_empty_dates_are_equal() {
        let a = book("", "", "", "978-0000000001");
        let b = book("", "", "", "978-0000000002");
        assert_eq!(a.cmp_by_publication_date(&b), Ordering::Equal);
    }

    #[test]
    fn test_day_breaks_full_ties() {
        let a = book("", "", "06/02/2010", "978-0000000001");
        let b = book("", "", "06/10/2010", "978-0000000002");
        assert_eq!(a.cmp_by_publication_date(&b), Ordering::Less);
    }

    #[test]
    fn test_display_lists_every_field() {
        let b = book("Tolkien", "The Hobbit", "09/21/1937", "978-0345339683");
        assert_eq!(
            b.to_string(),
            "Title: The Hobbit, Author: Tolkien, Publication Date: 09/21/1937, \
             Description: , ISBN: 978-0345339683"
        );
    }
}
