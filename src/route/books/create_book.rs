use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::ApiError, extractor::valid_book::ValidBook, repository::Book, state::ApiState,
    traits::StateProvider,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateBookResponse {
    pub book: Book,
}

impl IntoResponse for CreateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

/// Validates the body against the book schema and inserts the book.
#[utoipa::path(
    post,
    path = "/books",
    request_body = Book,
    responses(
        (status = 201, description = "The created book", body = CreateBookResponse),
        (status = 400, description = "The body does not satisfy the book schema"),
    )
)]
pub async fn create_book(
    State(state): State<ApiState>,
    ValidBook(book): ValidBook,
) -> Result<CreateBookResponse, ApiError> {
    let book = state
        .repository()
        .insert(book)
        .await
        .map_err(|err| ApiError::from_repository_error(state.error_verbosity(), err))?;

    Ok(CreateBookResponse { book })
}
