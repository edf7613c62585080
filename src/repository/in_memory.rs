use std::collections::BTreeMap;

use axum::async_trait;
use tokio::sync::RwLock;

use super::{Book, BookRepository, RepositoryError};

/// [`BookRepository`] backed by an in-process map, used as the test database.
///
/// The `BTreeMap` keeps the listing ordered by isbn, matching the Postgres implementation.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RwLock<BTreeMap<String, Book>>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookRepository for InMemoryBookRepository {
    async fn list(&self) -> Result<Vec<Book>, RepositoryError> {
        let books = self.books.read().await;

        Ok(books.values().cloned().collect())
    }

    async fn get(&self, isbn: &str) -> Result<Book, RepositoryError> {
        let books = self.books.read().await;

        books.get(isbn).cloned().ok_or_else(|| RepositoryError::NotFound {
            isbn: isbn.to_string(),
        })
    }

    async fn insert(&self, book: Book) -> Result<Book, RepositoryError> {
        let mut books = self.books.write().await;

        if books.contains_key(&book.isbn) {
            return Err(RepositoryError::Duplicate {
                isbn: book.isbn.clone(),
            });
        }

        books.insert(book.isbn.clone(), book.clone());

        Ok(book)
    }

    async fn update(&self, isbn: &str, book: Book) -> Result<Book, RepositoryError> {
        let mut books = self.books.write().await;

        match books.get_mut(isbn) {
            Some(existing) => {
                *existing = Book {
                    isbn: isbn.to_string(),
                    ..book
                };

                Ok(existing.clone())
            }
            None => Err(RepositoryError::NotFound {
                isbn: isbn.to_string(),
            }),
        }
    }

    async fn delete(&self, isbn: &str) -> Result<(), RepositoryError> {
        let mut books = self.books.write().await;

        books.remove(isbn).ok_or_else(|| RepositoryError::NotFound {
            isbn: isbn.to_string(),
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(isbn: &str) -> Book {
        Book {
            isbn: isbn.to_string(),
            amazon_url: "http://a.co/eobPtX2".to_string(),
            author: "Matthew Lane".to_string(),
            language: "english".to_string(),
            pages: 264,
            publisher: "Princeton University Press".to_string(),
            title: "Power-Up".to_string(),
            year: 2017,
        }
    }

    #[tokio::test]
    async fn insert_then_get_returns_the_stored_book() {
        let repository = InMemoryBookRepository::new();

        let inserted = repository.insert(book("1234567891")).await.unwrap();
        let fetched = repository.get("1234567891").await.unwrap();

        assert_eq!(inserted, fetched);
    }

    #[tokio::test]
    async fn insert_duplicate_isbn_fails() {
        let repository = InMemoryBookRepository::new();

        repository.insert(book("1234567891")).await.unwrap();
        let err = repository.insert(book("1234567891")).await.unwrap_err();

        assert!(matches!(err, RepositoryError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn list_is_ordered_by_isbn() {
        let repository = InMemoryBookRepository::new();

        repository.insert(book("222")).await.unwrap();
        repository.insert(book("111")).await.unwrap();

        let isbns: Vec<String> = repository
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.isbn)
            .collect();

        assert_eq!(isbns, vec!["111".to_string(), "222".to_string()]);
    }

    #[tokio::test]
    async fn update_keeps_the_path_isbn() {
        let repository = InMemoryBookRepository::new();

        repository.insert(book("1234567891")).await.unwrap();

        let mut replacement = book("9999999999");
        replacement.pages = 300;

        let updated = repository.update("1234567891", replacement).await.unwrap();

        assert_eq!(updated.isbn, "1234567891");
        assert_eq!(updated.pages, 300);
    }

    #[tokio::test]
    async fn update_unknown_isbn_is_not_found() {
        let repository = InMemoryBookRepository::new();

        let err = repository.update("222222222", book("222222222")).await.unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_removes_the_book() {
        let repository = InMemoryBookRepository::new();

        repository.insert(book("1234567891")).await.unwrap();
        repository.delete("1234567891").await.unwrap();

        assert!(repository.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_unknown_isbn_is_not_found() {
        let repository = InMemoryBookRepository::new();

        let err = repository.delete("222222222").await.unwrap_err();

        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }
}
