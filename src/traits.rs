use crate::{error::ErrorVerbosity, repository::BookRepository};

pub trait StateProvider {
    /// Returns the error verbosity.
    fn error_verbosity(&self) -> ErrorVerbosity;

    /// Returns the book repository.
    fn repository(&self) -> &dyn BookRepository;
}
