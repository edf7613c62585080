use axum::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryBookRepository;
pub use postgres::PostgresBookRepository;

/// A book record, keyed by isbn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ToSchema, sqlx::FromRow)]
pub struct Book {
    pub isbn: String,
    pub amazon_url: String,
    pub author: String,
    pub language: String,
    pub pages: i32,
    pub publisher: String,
    pub title: String,
    pub year: i32,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("There is no book with an isbn '{isbn}'")]
    NotFound { isbn: String },

    #[error("A book with an isbn '{isbn}' already exists")]
    Duplicate { isbn: String },

    #[error("Database failure: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failure: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// All table reads and writes for [`Book`].
///
/// Every operation is a single atomic statement. `update` and `delete` report a
/// missing isbn as [`RepositoryError::NotFound`] so handlers can map it to a 404.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Lists all books ordered by isbn.
    async fn list(&self) -> Result<Vec<Book>, RepositoryError>;

    /// Retrieves one book by isbn.
    async fn get(&self, isbn: &str) -> Result<Book, RepositoryError>;

    /// Inserts a new book and returns the stored record.
    async fn insert(&self, book: Book) -> Result<Book, RepositoryError>;

    /// Updates all non-key fields of the book with the given isbn.
    async fn update(&self, isbn: &str, book: Book) -> Result<Book, RepositoryError>;

    /// Deletes the book with the given isbn.
    async fn delete(&self, isbn: &str) -> Result<(), RepositoryError>;
}
