// src/services/catalog_service.rs
use crate::domain::{split_genres, validate_book, Book, DomainError, DomainResult};
use crate::error::AppResult;
use crate::repositories::BookRepository;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

/// Raw form input for a new catalog entry.
/// Fields arrive exactly as typed; trimming and genre splitting happen
/// inside the service, and `genres` is the comma-delimited text.
#[derive(Debug, Clone)]
pub struct AddBookRequest {
    pub title: String,
    pub author: String,
    pub genres: String,
    pub publication_date: String,
    pub description: String,
    pub isbn: String,
}

/// Raw form input for an edit. `original_isbn` is the key the record
/// currently lives under; `isbn` is whatever the user left in the form.
#[derive(Debug, Clone)]
pub struct EditBookRequest {
    pub title: String,
    pub author: String,
    pub genres: String,
    pub publication_date: String,
    pub description: String,
    pub isbn: String,
    pub original_isbn: String,
}

/// The catalog core: an in-memory collection of books keyed by ISBN,
/// backed by a persistence collaborator that rewrites the full document
/// after every successful mutation.
///
/// Every key in the map equals the `isbn` field of its record, and the
/// map is always re-derivable by reloading the document. Mutations
/// either fully succeed or reject during validation before touching
/// memory or disk.
pub struct CatalogService {
    repo: Arc<dyn BookRepository>,
    books: HashMap<String, Book>,
    /// Keys in insertion order; drives the default display order and
    /// the order records are written to the document. Always holds
    /// exactly the keys of `books`.
    order: Vec<String>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn BookRepository>) -> Self {
        Self {
            repo,
            books: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Populate the catalog from the document, replacing any current
    /// contents. A missing or malformed document leaves the catalog
    /// empty; the failure is logged rather than propagated so startup
    /// always yields a usable catalog.
    pub fn load(&mut self) {
        self.books.clear();
        self.order.clear();

        let records = match self.repo.load_all() {
            Ok(records) => records,
            Err(e) => {
                log::warn!("could not read book document, starting with an empty catalog: {e}");
                return;
            }
        };

        for book in records {
            self.insert(book);
        }
    }

    /// Validate and add a new book, then rewrite the document.
    ///
    /// Failure kinds, checked in order: `InvalidDate`, `InvalidIsbn`,
    /// then `DuplicateIsbn` against the trimmed key. Nothing is mutated
    /// on a validation failure. A failed document write surfaces as an
    /// I/O error but the in-memory catalog keeps the new record.
    pub fn add_book(&mut self, request: AddBookRequest) -> AppResult<()> {
        let book = build_book(
            &request.title,
            &request.author,
            &request.genres,
            &request.publication_date,
            &request.description,
            &request.isbn,
        )?;

        // Format checks run before the duplicate check
        if self.books.contains_key(&book.isbn) {
            return Err(DomainError::DuplicateIsbn(book.isbn).into());
        }

        self.insert(book);
        self.persist()
    }

    /// Validate and replace a record, then rewrite the document.
    ///
    /// When the trimmed ISBN equals `original_isbn` the record is
    /// replaced in place at its key; otherwise the old key is removed
    /// and the record reinserted under the new key.
    pub fn edit_book(&mut self, request: EditBookRequest) -> AppResult<()> {
        let book = build_book(
            &request.title,
            &request.author,
            &request.genres,
            &request.publication_date,
            &request.description,
            &request.isbn,
        )?;

        if book.isbn == request.original_isbn {
            self.insert(book);
        } else {
            if self.books.remove(&request.original_isbn).is_some() {
                self.order.retain(|key| key != &request.original_isbn);
            }
            self.insert(book);
        }

        self.persist()
    }

    /// Remove a record and rewrite the document.
    /// Removing an absent key is a silent no-op that leaves the
    /// document untouched.
    pub fn remove_book(&mut self, isbn: &str) -> AppResult<()> {
        if self.books.remove(isbn).is_none() {
            return Ok(());
        }
        self.order.retain(|key| key != isbn);
        self.persist()
    }

    pub fn get_book(&self, isbn: &str) -> Option<&Book> {
        self.books.get(isbn)
    }

    /// Every ISBN currently held, in insertion order
    pub fn all_keys(&self) -> Vec<String> {
        self.order.clone()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Keys of books whose author contains the query, case-insensitive.
    /// An empty query matches everything.
    pub fn search_by_author(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.iter_in_order()
            .filter(|(_, book)| book.author.to_lowercase().contains(&query))
            .map(|(isbn, _)| isbn.clone())
            .collect()
    }

    /// Keys of books whose title contains the query, case-insensitive
    pub fn search_by_title(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.iter_in_order()
            .filter(|(_, book)| book.title.to_lowercase().contains(&query))
            .map(|(isbn, _)| isbn.clone())
            .collect()
    }

    /// Keys of books where ANY genre contains the query,
    /// case-insensitive; scanning a record stops at its first match
    pub fn search_by_genre(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        self.iter_in_order()
            .filter(|(_, book)| {
                book.genres
                    .iter()
                    .any(|genre| genre.to_lowercase().contains(&query))
            })
            .map(|(isbn, _)| isbn.clone())
            .collect()
    }

    /// Keys whose hyphen-intact ISBN contains the query. Unlike the
    /// other searches this one is case-sensitive.
    pub fn search_by_isbn(&self, query: &str) -> Vec<String> {
        self.iter_in_order()
            .filter(|(_, book)| book.isbn.contains(query))
            .map(|(isbn, _)| isbn.clone())
            .collect()
    }

    /// Reorder the given keys in place by author
    pub fn sort_by_author(&self, keys: &mut [String]) {
        self.sort_keys(keys, Book::cmp_by_author);
    }

    /// Reorder the given keys in place by title
    pub fn sort_by_title(&self, keys: &mut [String]) {
        self.sort_keys(keys, Book::cmp_by_title);
    }

    /// Reorder the given keys in place by publication date; undated
    /// books order first and ties keep their relative input order
    pub fn sort_by_publication_date(&self, keys: &mut [String]) {
        self.sort_keys(keys, Book::cmp_by_publication_date);
    }

    /// Reorder the given keys in place by numeric ISBN value
    pub fn sort_by_isbn(&self, keys: &mut [String]) {
        self.sort_keys(keys, Book::cmp_by_isbn);
    }

    /// Stable sort over caller-supplied keys. Keys absent from the
    /// catalog compare equal and keep their relative position.
    fn sort_keys(&self, keys: &mut [String], cmp: fn(&Book, &Book) -> Ordering) {
        keys.sort_by(|a, b| match (self.books.get(a), self.books.get(b)) {
            (Some(x), Some(y)) => cmp(x, y),
            _ => Ordering::Equal,
        });
    }

    /// Insert under the record's own key, appending to the display
    /// order only when the key is new
    fn insert(&mut self, book: Book) {
        let key = book.isbn.clone();
        if self.books.insert(key.clone(), book).is_none() {
            self.order.push(key);
        }
    }

    /// Rewrite the whole document from current in-memory state, in
    /// insertion order. The in-memory catalog keeps the mutation even
    /// when the write fails; the caller sees the error.
    fn persist(&self) -> AppResult<()> {
        let books: Vec<Book> = self.iter_in_order().map(|(_, book)| book.clone()).collect();
        self.repo.save_all(&books)
    }

    fn iter_in_order(&self) -> impl Iterator<Item = (&String, &Book)> {
        self.order
            .iter()
            .filter_map(|key| self.books.get(key).map(|book| (key, book)))
    }
}

/// Trim the raw fields, split the genre text, and run the format checks
/// in their fixed order (date before ISBN) before constructing the
/// record.
fn build_book(
    title: &str,
    author: &str,
    genres: &str,
    publication_date: &str,
    description: &str,
    isbn: &str,
) -> DomainResult<Book> {
    let book = Book::new(
        title.trim().to_string(),
        author.trim().to_string(),
        split_genres(genres),
        publication_date.trim().to_string(),
        description.trim().to_string(),
        isbn.trim().to_string(),
    );
    validate_book(&book)?;
    Ok(book)
}
