use miette::{Context, IntoDiagnostic, Result};
use tracing::instrument;
use url::Url;

use crate::feed::FeedClient;

const DEFAULT_JSON_FILE: &str = "posts.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub base_url: Url,
    pub posts_json_url: Url,
}

impl AppConfig {
    #[instrument(name = "AppConfig::from_env")]
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("APP_BASE_URL")
            .into_diagnostic()
            .wrap_err("Missing APP_BASE_URL, needed for app launch")?;
        let base_url = Url::parse(&base_url)
            .into_diagnostic()
            .wrap_err("Invalid APP_BASE_URL not parsable")?;

        let posts_json_url = match std::env::var("POSTS_JSON_URL") {
            Ok(raw) => Url::parse(&raw)
                .into_diagnostic()
                .wrap_err("Invalid POSTS_JSON_URL not parsable")?,
            Err(_) => base_url
                .join(DEFAULT_JSON_FILE)
                .into_diagnostic()
                .wrap_err("Couldn't derive a posts.json URL from APP_BASE_URL")?,
        };

        Ok(Self {
            base_url,
            posts_json_url,
        })
    }
}

#[derive(Debug, Clone)]
pub(crate) struct AppState {
    pub app: AppConfig,
    pub feed: FeedClient,
}

impl AppState {
    #[instrument(name = "AppState::from_env", err)]
    pub fn from_env() -> Result<Self> {
        let app = AppConfig::from_env()?;
        let feed = FeedClient::new(app.posts_json_url.clone());

        Ok(Self { app, feed })
    }
}
