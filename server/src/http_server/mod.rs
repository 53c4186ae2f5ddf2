use std::net::SocketAddr;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};
use miette::{IntoDiagnostic, Result};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::AppState;

use errors::ServerError;

pub(crate) mod pages {
    pub mod posts;
}

mod config;
pub mod errors;
mod templates;

const SITE_STYLES: &str = include_str!("../../static/site.css");

type ResponseResult<T = axum::response::Response> = Result<T, ServerError>;

pub(crate) fn make_router() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::permanent("/posts") }))
        .route(
            "/styles/site.css",
            get(|| async { ([(header::CONTENT_TYPE, "text/css")], SITE_STYLES) }),
        )
        .route("/posts", get(pages::posts::posts_index))
        .fallback(fallback)
}

async fn fallback() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}

pub(crate) async fn run_axum(state: AppState) -> Result<()> {
    let app = make_router().with_state(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().include_headers(true))
            .on_response(DefaultOnResponse::new().include_headers(true)),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], 3000));
    tracing::debug!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.into_diagnostic()?;
    axum::serve(listener, app).await.into_diagnostic()?;

    Ok(())
}
