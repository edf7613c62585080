use std::{ops::Deref, sync::Arc};

use crate::{error::ErrorVerbosity, repository::BookRepository, traits::StateProvider};

#[derive(Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    pub fn new(error_verbosity: ErrorVerbosity, repository: Arc<dyn BookRepository>) -> Self {
        Self {
            inner: Arc::new(ApiStateInner {
                error_verbosity,
                repository,
            }),
        }
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

pub struct ApiStateInner {
    error_verbosity: ErrorVerbosity,
    repository: Arc<dyn BookRepository>,
}

impl StateProvider for ApiState {
    fn error_verbosity(&self) -> ErrorVerbosity {
        self.error_verbosity
    }

    fn repository(&self) -> &dyn BookRepository {
        self.repository.as_ref()
    }
}
