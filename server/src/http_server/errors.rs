use std::fmt::{Debug, Display};

use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::feed::FeedError;

/// A request-level failure: the report to log plus the status to answer
/// with. Handlers bubble these with `?`.
pub struct ServerError(pub(crate) miette::Report, pub(crate) StatusCode);

impl Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl Debug for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Status Code: {}\n{:?}", self.1, self.0)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        tracing::error!(error = ?self, "ServerError");

        (self.1, self.0.to_string()).into_response()
    }
}

impl From<miette::Report> for ServerError {
    fn from(err: miette::Report) -> Self {
        ServerError(err, StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<FeedError> for ServerError {
    fn from(err: FeedError) -> Self {
        let status = match &err {
            FeedError::Status { .. } | FeedError::Http(_) => StatusCode::BAD_GATEWAY,
            FeedError::Parse { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        ServerError(miette::Report::new(err), status)
    }
}
