use std::println;

use miette::{Context, IntoDiagnostic, Result};
use posts::{pagination::PageWindow, query::DEFAULT_PER_PAGE};

use crate::{feed::FeedClient, AppConfig};

/// Fetches the configured feed once and checks everything the posts page
/// would need at render time: the document parses, and every entry's
/// `output_file` resolves against the base URL.
pub(crate) async fn validate() -> Result<()> {
    let config = AppConfig::from_env()?;
    let client = FeedClient::new(config.posts_json_url.clone());

    println!("Fetching {}", client.url());
    let posts = client.fetch_posts().await.into_diagnostic()?;

    println!("Validating {} posts", posts.len());
    for post in posts.posts() {
        post.detail_url(&config.base_url)
            .into_diagnostic()
            .wrap_err_with(|| {
                format!(
                    "Post {:?} has an unresolvable output_file {:?}",
                    post.title, post.output_file
                )
            })?;
    }

    let window = PageWindow::compute(posts.len(), DEFAULT_PER_PAGE, None);
    println!(
        "Feed Valid! ✅ {} posts across {} pages",
        posts.len(),
        window.num_pages
    );

    Ok(())
}
