use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::ApiError, extractor::path::ApiPath, state::ApiState, traits::StateProvider,
};

use super::BookPath;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteBookResponse {
    pub message: String,
}

impl IntoResponse for DeleteBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Deletes one book by isbn.
#[utoipa::path(
    delete,
    path = "/books/{isbn}",
    params(
        ("isbn" = String, Path, description = "The isbn of the book"),
    ),
    responses(
        (status = 200, description = "Confirmation message", body = DeleteBookResponse),
        (status = 404, description = "No book with this isbn"),
    )
)]
pub async fn delete_book(
    ApiPath(path): ApiPath<BookPath>,
    State(state): State<ApiState>,
) -> Result<DeleteBookResponse, ApiError> {
    state
        .repository()
        .delete(&path.isbn)
        .await
        .map_err(|err| ApiError::from_repository_error(state.error_verbosity(), err))?;

    Ok(DeleteBookResponse {
        message: "Book deleted".to_string(),
    })
}
