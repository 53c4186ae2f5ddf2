use maud::{html, Markup, PreEscaped, Render};
use posts::{pagination::PageWindow, query::FeedQuery, Post};
use url::Url;

/// One feed entry: linked title, date, the trusted summary markup, the
/// thumbnail strip, and any highlight-phrase deep links.
pub(crate) struct PostCard<'a> {
    pub(crate) post: &'a Post,
    pub(crate) detail_url: Url,
}

impl Render for PostCard<'_> {
    fn render(&self) -> Markup {
        let detail = &self.detail_url;

        html! {
          article class="post-card" {
            h2 class="post-title" {
              a href=(detail) { (self.post.title) }
            }
            p class="post-date" { (self.post.post_date) }

            div class="post-snippet" {
              (PreEscaped(&self.post.initial_text))
            }

            @if !self.post.thumbnails.is_empty() {
              div class="post-thumbnails" {
                @for (index, thumbnail) in self.post.thumbnails.iter().enumerate() {
                  a href=(format!("{detail}#img-{}", index + 1)) {
                    img src=(thumbnail) loading="lazy";
                  }
                }
              }
            }

            @if !self.post.highlight_phrases().is_empty() {
              p class="post-highlights" {
                @for (index, phrase) in self.post.highlight_phrases().iter().enumerate() {
                  @if index > 0 { ", " }
                  a href=(format!("{detail}#:~:text={}", urlencoding::encode(phrase))) {
                    (phrase)
                  }
                }
              }
            }
          }
        }
    }
}

pub(crate) struct PostList<'a>(pub(crate) &'a [PostCard<'a>]);

impl Render for PostList<'_> {
    fn render(&self) -> Markup {
        html! {
          @for card in self.0 {
            (card.render())
          }
        }
    }
}

/// Prev / page numbers / Next. The entry for the page being shown is a
/// plain label; every other entry links to the same path with
/// `posts_pages_from_end` rewritten and the rest of the query kept.
#[derive(Clone, Copy)]
pub(crate) struct PaginationBar<'a> {
    pub(crate) window: &'a PageWindow,
    pub(crate) query: &'a FeedQuery,
    pub(crate) path: &'a str,
}

impl PaginationBar<'_> {
    fn page_href(&self, page: usize) -> String {
        self.query
            .href_for(self.path, self.window.pages_from_end_for(page))
    }
}

impl Render for PaginationBar<'_> {
    fn render(&self) -> Markup {
        html! {
          nav class="pagination" {
            @if let Some(prev) = self.window.prev_page() {
              a class="pagination-prev" href=(self.page_href(prev)) { "Prev" }
            }

            @for page in self.window.page_numbers() {
              @if page == self.window.current_page() {
                span class="pagination-current" { (page) }
              } @else {
                a href=(self.page_href(page)) { (page) }
              }
            }

            @if let Some(next) = self.window.next_page() {
              a class="pagination-next" href=(self.page_href(next)) { "Next" }
            }
          }
        }
    }
}
