// src/repositories/book_repository.rs
//
// Book persistence - full-document JSON read/write

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::Book;
use crate::error::{AppError, AppResult};

/// Persistence collaborator for the catalog.
///
/// The document has no per-record addressing: a load reads every record
/// and a save rewrites the whole document. There is no append or patch.
#[cfg_attr(test, mockall::automock)]
pub trait BookRepository: Send + Sync {
    /// Read every record from the document, in document order
    fn load_all(&self) -> AppResult<Vec<Book>>;

    /// Overwrite the document with the full record set
    fn save_all(&self, books: &[Book]) -> AppResult<()>;
}

/// Get the default catalog document path
///
/// The document is stored in the application data directory.
/// Path structure: {APP_DATA}/bookshelf/books.json
pub fn default_catalog_path() -> AppResult<PathBuf> {
    let app_data_dir = dirs::data_dir()
        .ok_or_else(|| AppError::Other("Could not determine app data directory".to_string()))?;

    let bookshelf_dir = app_data_dir.join("bookshelf");

    // Ensure directory exists
    fs::create_dir_all(&bookshelf_dir).map_err(AppError::Io)?;

    Ok(bookshelf_dir.join("books.json"))
}

/// JSON-file-backed repository.
///
/// The document is a JSON array of book objects written with
/// human-readable indentation, holding exactly the fields `title`,
/// `author`, `genres`, `publicationDate`, `description`, `isbn`.
pub struct JsonBookRepository {
    path: PathBuf,
}

impl JsonBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository backed by the per-user default document location
    pub fn at_default_path() -> AppResult<Self> {
        Ok(Self::new(default_catalog_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BookRepository for JsonBookRepository {
    fn load_all(&self) -> AppResult<Vec<Book>> {
        let raw = fs::read_to_string(&self.path)?;
        let books: Vec<Book> = serde_json::from_str(&raw)?;
        Ok(books)
    }

    fn save_all(&self, books: &[Book]) -> AppResult<()> {
        // Creates the document when missing, truncates otherwise
        let file = fs::File::create(&self.path)?;
        serde_json::to_writer_pretty(file, books)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_book() -> Book {
        Book::new(
            "The Hobbit".to_string(),
            "J.R.R. Tolkien".to_string(),
            vec!["Fantasy".to_string(), "Adventure".to_string()],
            "09/21/1937".to_string(),
            "There and back again.".to_string(),
            "978-0345339683".to_string(),
        )
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonBookRepository::new(dir.path().join("books.json"));

        let books = vec![sample_book()];
        repo.save_all(&books).unwrap();

        let loaded = repo.load_all().unwrap();
        assert_eq!(loaded, books);
    }

    #[test]
    fn test_document_uses_camel_case_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonBookRepository::new(dir.path().join("books.json"));

        repo.save_all(&[sample_book()]).unwrap();

        let raw = fs::read_to_string(repo.path()).unwrap();
        assert!(raw.contains("\"publicationDate\""));
        assert!(raw.contains("\"isbn\""));
        // pretty printer writes one field per line
        assert!(raw.contains('\n'));
    }

    #[test]
    fn test_missing_document_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonBookRepository::new(dir.path().join("absent.json"));

        let result = repo.load_all();
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_malformed_document_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("books.json");
        fs::write(&path, "{ not an array ").unwrap();

        let repo = JsonBookRepository::new(path);
        let result = repo.load_all();
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }

    #[test]
    fn test_save_overwrites_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonBookRepository::new(dir.path().join("books.json"));

        repo.save_all(&[sample_book()]).unwrap();
        repo.save_all(&[]).unwrap();

        assert!(repo.load_all().unwrap().is_empty());
    }
}
