use miette::Diagnostic;
use posts::FeedPosts;
use reqwest::StatusCode;
use tracing::{debug, instrument};
use url::Url;

/// Ways loading the posts document can fail. None of these are retried;
/// the page that asked simply does not render.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub(crate) enum FeedError {
    #[error("Fetching {url} failed with status {status}")]
    Status { url: Url, status: StatusCode },

    #[error("Fetching posts feed failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Posts feed at {url} is not a valid posts document: {source}")]
    Parse {
        url: Url,
        source: serde_json::Error,
    },
}

/// One-shot fetcher for the posts JSON document. Every call hits the
/// network; the URL is the only state worth keeping.
#[derive(Debug, Clone)]
pub(crate) struct FeedClient {
    http: reqwest::Client,
    url: Url,
}

impl FeedClient {
    pub(crate) fn new(url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            url,
        }
    }

    pub(crate) fn url(&self) -> &Url {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    pub(crate) async fn fetch_posts(&self) -> Result<FeedPosts, FeedError> {
        debug!("Fetching posts feed");
        let response = self.http.get(self.url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: self.url.clone(),
                status,
            });
        }

        let body = response.bytes().await?;

        FeedPosts::from_json_slice(&body).map_err(|source| FeedError::Parse {
            url: self.url.clone(),
            source,
        })
    }
}
