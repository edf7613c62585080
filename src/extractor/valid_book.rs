use axum::{
    async_trait,
    extract::{FromRequest, Request},
};

use crate::{
    error::{ApiError, ValidationError},
    repository::Book,
    schema,
    traits::StateProvider,
};

use super::json::ApiJson;

/// An extractor that validates the JSON body against the book schema.
///
/// Rejects with an [`ApiError::Validation`] carrying one message per violated
/// constraint, in the declared property order.
pub struct ValidBook(pub Book);

#[async_trait]
impl<S> FromRequest<S> for ValidBook
where
    S: Send + Sync + StateProvider,
{
    type Rejection = ApiError;

    #[tracing::instrument(name = "valid_book_extractor", skip_all)]
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let ApiJson(value) = ApiJson::<serde_json::Value>::from_request(req, state).await?;

        match schema::validate_book(&value) {
            Ok(book) => {
                tracing::trace!("Validated");

                Ok(ValidBook(book))
            }
            Err(messages) => {
                tracing::warn!(?messages, "Validation errors");

                let verbosity = state.error_verbosity();

                Err(ValidationError::new(verbosity, messages).into())
            }
        }
    }
}
