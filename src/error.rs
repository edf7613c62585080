use std::borrow::Cow;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clap::ValueEnum;
use derive_more::From;
use serde::Serialize;

use crate::repository::RepositoryError;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ErrorVerbosity {
    /// Server returns an empty response with [`StatusCode::NO_CONTENT`] for all errors.
    None,
    /// Server returns only the appropriate status code.
    StatusCode,
    /// Server returns only the message with the appropriate status code.
    Message,
    /// Server returns the message, the error type with cleared error content and the appropriate status code.
    Type,
    /// Server returns the message, the error type with the error content and the appropriate status code.
    Full,
}

impl ErrorVerbosity {
    pub fn should_generate_error_reason(&self) -> bool {
        matches!(self, ErrorVerbosity::Full)
    }
}

/// The `message` of an error response.
///
/// Validation failures carry one message per violated constraint, everything else a single message.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ApiMessage {
    Text(Cow<'static, str>),
    List(Vec<String>),
}

#[derive(Debug, Serialize)]
struct ApiErrorResponse {
    #[serde(flatten)]
    error: ApiError,
    message: ApiMessage,
}

#[derive(Debug, Serialize)]
struct ApiErrorMessage {
    message: ApiMessage,
}

impl From<ApiErrorResponse> for ApiErrorMessage {
    fn from(response: ApiErrorResponse) -> Self {
        ApiErrorMessage {
            message: response.message,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        match self.error.verbosity() {
            ErrorVerbosity::None => StatusCode::NO_CONTENT.into_response(),
            ErrorVerbosity::StatusCode => self.error.status_code().into_response(),
            ErrorVerbosity::Message => {
                let status_code = self.error.status_code();

                (status_code, Json(ApiErrorMessage::from(self))).into_response()
            }
            ErrorVerbosity::Type | ErrorVerbosity::Full => {
                let status_code = self.error.status_code();

                (status_code, Json(self)).into_response()
            }
        }
    }
}

#[derive(Debug, From, Serialize)]
#[serde(tag = "error_type", content = "error")]
/// API error
pub enum ApiError {
    /// Internal server error
    ///
    /// This error is returned when an internal server error occurs.
    InternalServerError(InternalServerError),
    /// Body error
    ///
    /// This error is returned when the body is not as expected.
    Body(BodyError),
    /// Path error
    ///
    /// This error is returned when the path is not as expected.
    Path(PathError),
    /// Method not allowed
    ///
    /// This error is returned when the method is not allowed.
    MethodNotAllowed(MethodNotAllowedError),
    /// Not found error
    ///
    /// This error is returned when the requested resource is not found.
    NotFound(NotFoundError),
    /// Validation error
    ///
    /// This error is returned when the body does not satisfy the book schema.
    Validation(ValidationError),
    /// Book not found error
    ///
    /// This error is returned when no book exists for the requested isbn.
    BookNotFound(BookNotFoundError),
}

impl ApiError {
    /// Maps a repository failure onto the API surface.
    ///
    /// A missing row becomes a 404, everything else a 500.
    pub fn from_repository_error(verbosity: ErrorVerbosity, err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { isbn } => BookNotFoundError::new(verbosity, isbn).into(),
            err => InternalServerError::from_generic_error(verbosity, err).into(),
        }
    }

    fn verbosity(&self) -> ErrorVerbosity {
        match self {
            ApiError::InternalServerError(err) => err.verbosity,
            ApiError::Body(err) => err.verbosity,
            ApiError::Path(err) => err.verbosity,
            ApiError::MethodNotAllowed(err) => err.verbosity,
            ApiError::NotFound(err) => err.verbosity,
            ApiError::Validation(err) => err.verbosity,
            ApiError::BookNotFound(err) => err.verbosity,
        }
    }

    fn message(&self) -> ApiMessage {
        match self {
            ApiError::InternalServerError(_) => {
                ApiMessage::Text(Cow::Borrowed("An internal server error has occurred"))
            }
            ApiError::Body(_) => ApiMessage::Text(Cow::Borrowed("Failed to parse request body")),
            ApiError::Path(_) => ApiMessage::Text(Cow::Borrowed("Failed to parse path parameters")),
            ApiError::MethodNotAllowed(_) => ApiMessage::Text(Cow::Borrowed("Method not allowed")),
            ApiError::NotFound(_) => {
                ApiMessage::Text(Cow::Borrowed("The requested resource was not found"))
            }
            ApiError::Validation(err) => ApiMessage::List(err.messages.clone()),
            ApiError::BookNotFound(err) => ApiMessage::Text(Cow::Owned(format!(
                "There is no book with an isbn '{}'",
                err.isbn
            ))),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InternalServerError(err) => err.status_code(),
            ApiError::Body(err) => err.status_code(),
            ApiError::Path(err) => err.status_code(),
            ApiError::MethodNotAllowed(err) => err.status_code(),
            ApiError::NotFound(err) => err.status_code(),
            ApiError::Validation(err) => err.status_code(),
            ApiError::BookNotFound(err) => err.status_code(),
        }
    }
}

impl From<ApiError> for ApiErrorResponse {
    fn from(error: ApiError) -> Self {
        let message = match error.verbosity() {
            ErrorVerbosity::None => ApiMessage::Text(Cow::Borrowed("")),
            _ => error.message(),
        };

        ApiErrorResponse { error, message }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        ApiErrorResponse::from(self).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct InternalServerError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    internal_server_error: Option<String>,
}

impl InternalServerError {
    pub fn from_generic_error<E: Into<anyhow::Error>>(verbosity: ErrorVerbosity, err: E) -> Self {
        let err: anyhow::Error = err.into();
        let err = format!("{err:#}");
        tracing::error!(%err, "Internal server error");

        let internal_server_error = verbosity.should_generate_error_reason().then(|| err);

        InternalServerError {
            verbosity,
            internal_server_error,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

#[derive(Debug, Serialize)]
pub struct BodyError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    body_error_reason: Option<String>,
    body_expected_schema: Option<String>,
}

impl BodyError {
    pub fn new(
        verbosity: ErrorVerbosity,
        body_error_reason: String,
        body_expected_schema: String,
    ) -> Self {
        let (body_error_reason, body_expected_schema) =
            match verbosity.should_generate_error_reason() {
                true => (Some(body_error_reason), Some(body_expected_schema)),
                false => (None, None),
            };

        BodyError {
            verbosity,
            body_error_reason,
            body_expected_schema,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug, Serialize)]
pub struct PathError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    path_error_reason: Option<String>,
}

impl PathError {
    pub fn new(verbosity: ErrorVerbosity, path_error_reason: String) -> Self {
        let path_error_reason = verbosity
            .should_generate_error_reason()
            .then(|| path_error_reason);

        PathError {
            verbosity,
            path_error_reason,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug, Serialize)]
pub struct MethodNotAllowedError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl MethodNotAllowedError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        MethodNotAllowedError { verbosity }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::METHOD_NOT_ALLOWED
    }
}

#[derive(Debug, Serialize)]
pub struct NotFoundError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
}

impl NotFoundError {
    pub fn new(verbosity: ErrorVerbosity) -> Self {
        NotFoundError { verbosity }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}

#[derive(Debug, Serialize)]
pub struct ValidationError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    #[serde(skip)]
    messages: Vec<String>,
    validation_errors: Option<Vec<String>>,
}

impl ValidationError {
    pub fn new(verbosity: ErrorVerbosity, messages: Vec<String>) -> Self {
        let validation_errors = verbosity
            .should_generate_error_reason()
            .then(|| messages.clone());

        ValidationError {
            verbosity,
            messages,
            validation_errors,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

#[derive(Debug, Serialize)]
pub struct BookNotFoundError {
    #[serde(skip)]
    verbosity: ErrorVerbosity,
    #[serde(skip)]
    isbn: String,
    book_not_found_isbn: Option<String>,
}

impl BookNotFoundError {
    pub fn new(verbosity: ErrorVerbosity, isbn: String) -> Self {
        let book_not_found_isbn = verbosity
            .should_generate_error_reason()
            .then(|| isbn.clone());

        BookNotFoundError {
            verbosity,
            isbn,
            book_not_found_isbn,
        }
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::NOT_FOUND
    }
}
