use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::ApiError,
    extractor::{path::ApiPath, valid_book::ValidBook},
    repository::Book,
    state::ApiState,
    traits::StateProvider,
};

use super::BookPath;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookResponse {
    pub book: Book,
}

impl IntoResponse for UpdateBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Validates the body and updates all fields of the book with the path isbn.
///
/// The isbn in the body is ignored, the path wins.
#[utoipa::path(
    put,
    path = "/books/{isbn}",
    params(
        ("isbn" = String, Path, description = "The isbn of the book"),
    ),
    request_body = Book,
    responses(
        (status = 200, description = "The updated book", body = UpdateBookResponse),
        (status = 400, description = "The body does not satisfy the book schema"),
        (status = 404, description = "No book with this isbn"),
    )
)]
pub async fn update_book(
    ApiPath(path): ApiPath<BookPath>,
    State(state): State<ApiState>,
    ValidBook(book): ValidBook,
) -> Result<UpdateBookResponse, ApiError> {
    let book = state
        .repository()
        .update(&path.isbn, book)
        .await
        .map_err(|err| ApiError::from_repository_error(state.error_verbosity(), err))?;

    Ok(UpdateBookResponse { book })
}
