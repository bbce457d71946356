use crate::views;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("No school with code {0}")]
    NotFound(String),
}

/// Converts our custom `AppError` into an HTTP response.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(code) => {
                tracing::debug!(code = %code, "Detail lookup miss.");
                (
                    StatusCode::NOT_FOUND,
                    Html(views::render_not_found_page(&code)),
                )
                    .into_response()
            }
        }
    }
}
