use serde::{Deserialize, Serialize};
use url::Url;

use self::pagination::PageWindow;

pub mod pagination;
pub mod query;

/// One entry of the posts feed, exactly as the JSON document describes it.
///
/// The collection order is the source of truth: the feed lists posts
/// oldest-first and nothing here re-sorts them.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Post {
    pub output_file: String,
    pub title: String,
    pub post_date: String,
    pub initial_text: String,
    pub thumbnails: Vec<String>,
    #[serde(default)]
    pub i_text: Option<Vec<String>>,
}

impl Post {
    /// Resolves the post's relative `output_file` against the site base URL.
    pub fn detail_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        base.join(&self.output_file)
    }

    pub fn highlight_phrases(&self) -> &[String] {
        self.i_text.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FeedPosts {
    posts: Vec<Post>,
}

impl FeedPosts {
    /// Parses the raw feed document. Shape mismatches surface as the
    /// deserialization error; there is no validation beyond the typed shape.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let posts: Vec<Post> = serde_json::from_slice(bytes)?;

        Ok(Self { posts })
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// The visible slice for `window`, in collection order.
    pub fn window(&self, window: &PageWindow) -> &[Post] {
        &self.posts[window.start..window.end]
    }
}

impl From<Vec<Post>> for FeedPosts {
    fn from(posts: Vec<Post>) -> Self {
        Self { posts }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_feed_parses_full_entry() {
        let feed = FeedPosts::from_json_slice(
            br#"[{
                "output_file": "posts/first.html",
                "title": "First",
                "post_date": "2019-04-02",
                "initial_text": "<p>Hello</p>",
                "thumbnails": ["thumbs/a.png", "thumbs/b.png"],
                "i_text": ["one phrase", "another"]
            }]"#,
        )
        .unwrap();

        assert_eq!(feed.len(), 1);
        let post = &feed.posts()[0];
        assert_eq!(post.title, "First");
        assert_eq!(post.thumbnails.len(), 2);
        assert_eq!(post.highlight_phrases(), ["one phrase", "another"]);
    }

    #[test]
    fn test_feed_highlights_are_optional() {
        let feed = FeedPosts::from_json_slice(
            br#"[{
                "output_file": "posts/first.html",
                "title": "First",
                "post_date": "2019-04-02",
                "initial_text": "",
                "thumbnails": []
            }]"#,
        )
        .unwrap();

        assert!(feed.posts()[0].i_text.is_none());
        assert!(feed.posts()[0].highlight_phrases().is_empty());
    }

    #[test]
    fn test_feed_rejects_missing_fields() {
        let result = FeedPosts::from_json_slice(br#"[{"title": "No file"}]"#);

        assert!(result.is_err());
    }

    #[test]
    fn test_feed_ignores_unknown_fields() {
        let feed = FeedPosts::from_json_slice(
            br#"[{
                "output_file": "p.html",
                "title": "T",
                "post_date": "2020-01-01",
                "initial_text": "",
                "thumbnails": [],
                "word_count": 900
            }]"#,
        )
        .unwrap();

        assert_eq!(feed.len(), 1);
    }

    #[test]
    fn test_detail_url_resolves_against_base() {
        let post = Post {
            output_file: "posts/2019/first.html".to_string(),
            title: "First".to_string(),
            post_date: "2019-04-02".to_string(),
            initial_text: String::new(),
            thumbnails: vec![],
            i_text: None,
        };
        let base = Url::parse("https://example.com/blog/").unwrap();

        assert_eq!(
            post.detail_url(&base).unwrap().as_str(),
            "https://example.com/blog/posts/2019/first.html"
        );
    }

    #[test]
    fn test_detail_url_fails_on_a_base_that_cannot_take_paths() {
        let post = Post {
            output_file: "posts/first.html".to_string(),
            title: "First".to_string(),
            post_date: "2019-04-02".to_string(),
            initial_text: String::new(),
            thumbnails: vec![],
            i_text: None,
        };
        let base = Url::parse("mailto:owner@example.com").unwrap();

        assert!(post.detail_url(&base).is_err());
    }
}
