use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::ApiError, extractor::path::ApiPath, repository::Book, state::ApiState,
    traits::StateProvider,
};

use super::BookPath;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetBookResponse {
    pub book: Book,
}

impl IntoResponse for GetBookResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Returns one book by isbn.
#[utoipa::path(
    get,
    path = "/books/{isbn}",
    params(
        ("isbn" = String, Path, description = "The isbn of the book"),
    ),
    responses(
        (status = 200, description = "The book", body = GetBookResponse),
        (status = 404, description = "No book with this isbn"),
    )
)]
pub async fn get_book(
    ApiPath(path): ApiPath<BookPath>,
    State(state): State<ApiState>,
) -> Result<GetBookResponse, ApiError> {
    let book = state
        .repository()
        .get(&path.isbn)
        .await
        .map_err(|err| ApiError::from_repository_error(state.error_verbosity(), err))?;

    Ok(GetBookResponse { book })
}
