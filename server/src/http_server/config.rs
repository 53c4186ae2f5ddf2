use axum::extract::FromRef;

use crate::{feed::FeedClient, AppConfig, AppState};

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.app.clone()
    }
}

impl FromRef<AppState> for FeedClient {
    fn from_ref(state: &AppState) -> Self {
        state.feed.clone()
    }
}
