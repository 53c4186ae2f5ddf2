use axum::{
    extract::{Query, State},
    http::Uri,
};
use maud::{html, Markup};
use miette::{Context, IntoDiagnostic};
use posts::{query::FeedQuery, FeedPosts};
use tracing::instrument;
use url::Url;

use crate::{
    feed::FeedClient,
    http_server::{
        templates::{
            base,
            posts::{PaginationBar, PostCard, PostList},
        },
        ResponseResult,
    },
    AppConfig,
};

/// The paginated feed view. Fetches the posts document, derives the page
/// window from the query string, and renders it; a failed fetch renders
/// nothing at all.
#[instrument(skip(config, feed))]
pub(crate) async fn posts_index(
    State(config): State<AppConfig>,
    State(feed): State<FeedClient>,
    uri: Uri,
    Query(params): Query<Vec<(String, String)>>,
) -> ResponseResult<Markup> {
    let posts = feed.fetch_posts().await?;
    let query = FeedQuery::from_pairs(params);

    let page = posts_page(&config.base_url, uri.path(), &query, &posts)?;

    Ok(page)
}

/// Pure half of the view: collection + query state in, markup out. The
/// handler above only adds the fetch and the response plumbing.
pub(crate) fn posts_page(
    base_url: &Url,
    path: &str,
    query: &FeedQuery,
    posts: &FeedPosts,
) -> miette::Result<Markup> {
    let window = query.window(posts.len());

    let cards = posts
        .window(&window)
        .iter()
        .map(|post| {
            post.detail_url(base_url)
                .into_diagnostic()
                .wrap_err_with(|| {
                    format!("Post {:?} has an unresolvable output_file", post.title)
                })
                .map(|detail_url| PostCard { post, detail_url })
        })
        .collect::<miette::Result<Vec<_>>>()?;

    let bar = PaginationBar {
        window: &window,
        query,
        path,
    };

    Ok(base(html! {
      section class="posts-feed" {
        @if !window.is_empty() {
          (bar)
        }

        (PostList(&cards))

        @if !window.is_empty() {
          (bar)
        }
      }
    }))
}
