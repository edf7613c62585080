use axum::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};

use super::{Book, BookRepository, RepositoryError};

/// [`BookRepository`] backed by a Postgres `books` table.
pub struct PostgresBookRepository {
    pool: PgPool,
}

impl PostgresBookRepository {
    /// Connects to the database and runs the pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self, RepositoryError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        sqlx::migrate!().run(&pool).await?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn list(&self) -> Result<Vec<Book>, RepositoryError> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT isbn, amazon_url, author, language, pages, publisher, title, year
             FROM books
             ORDER BY isbn",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn get(&self, isbn: &str) -> Result<Book, RepositoryError> {
        let book = sqlx::query_as::<_, Book>(
            "SELECT isbn, amazon_url, author, language, pages, publisher, title, year
             FROM books
             WHERE isbn = $1",
        )
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        book.ok_or_else(|| RepositoryError::NotFound {
            isbn: isbn.to_string(),
        })
    }

    async fn insert(&self, book: Book) -> Result<Book, RepositoryError> {
        let inserted = sqlx::query_as::<_, Book>(
            "INSERT INTO books (isbn, amazon_url, author, language, pages, publisher, title, year)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING isbn, amazon_url, author, language, pages, publisher, title, year",
        )
        .bind(&book.isbn)
        .bind(&book.amazon_url)
        .bind(&book.author)
        .bind(&book.language)
        .bind(book.pages)
        .bind(&book.publisher)
        .bind(&book.title)
        .bind(book.year)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::Duplicate { isbn: book.isbn.clone() }
            }
            _ => RepositoryError::Database(err),
        })?;

        Ok(inserted)
    }

    async fn update(&self, isbn: &str, book: Book) -> Result<Book, RepositoryError> {
        let updated = sqlx::query_as::<_, Book>(
            "UPDATE books
             SET amazon_url = $1, author = $2, language = $3, pages = $4,
                 publisher = $5, title = $6, year = $7
             WHERE isbn = $8
             RETURNING isbn, amazon_url, author, language, pages, publisher, title, year",
        )
        .bind(&book.amazon_url)
        .bind(&book.author)
        .bind(&book.language)
        .bind(book.pages)
        .bind(&book.publisher)
        .bind(&book.title)
        .bind(book.year)
        .bind(isbn)
        .fetch_optional(&self.pool)
        .await?;

        updated.ok_or_else(|| RepositoryError::NotFound {
            isbn: isbn.to_string(),
        })
    }

    async fn delete(&self, isbn: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = $1")
            .bind(isbn)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound {
                isbn: isbn.to_string(),
            });
        }

        Ok(())
    }
}
