use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum ProjectError {
    #[error("Project name must not be empty")]
    EmptyName,
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::EmptyName => {
                error_response(StatusCode::BAD_REQUEST, "Project name must not be empty")
            }
        }
    }
}
