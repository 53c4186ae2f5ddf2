use url::form_urlencoded;

use crate::pagination::PageWindow;

pub const PER_PAGE_PARAM: &str = "posts_per_page";
pub const PAGES_FROM_END_PARAM: &str = "posts_pages_from_end";

pub const DEFAULT_PER_PAGE: usize = 20;

/// The query-string state of one feed request.
///
/// The URL is the only persisted state, so this keeps every pair it was
/// given, in order. Generated links reproduce the full set with
/// `posts_pages_from_end` rewritten, which is what lets unrelated
/// parameters survive navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedQuery {
    pairs: Vec<(String, String)>,
}

impl FeedQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Requested page size, floored at 1. Absent or non-numeric values fall
    /// back to [`DEFAULT_PER_PAGE`].
    pub fn per_page(&self) -> usize {
        match self.get(PER_PAGE_PARAM).and_then(|raw| raw.parse::<i64>().ok()) {
            Some(requested) => usize::try_from(requested).unwrap_or(0).max(1),
            None => DEFAULT_PER_PAGE,
        }
    }

    /// The raw `posts_pages_from_end` request, if it parsed. Clamping is the
    /// window's job, not the query's.
    pub fn pages_from_end_requested(&self) -> Option<i64> {
        self.get(PAGES_FROM_END_PARAM)
            .and_then(|raw| raw.parse().ok())
    }

    pub fn window(&self, post_count: usize) -> PageWindow {
        PageWindow::compute(post_count, self.per_page(), self.pages_from_end_requested())
    }

    /// Every current pair with `posts_pages_from_end` overwritten in place,
    /// or appended when it was never present.
    pub fn with_pages_from_end(&self, pages_from_end: usize) -> Vec<(String, String)> {
        let mut pairs = self.pairs.clone();
        let value = pages_from_end.to_string();

        match pairs.iter_mut().find(|(key, _)| key == PAGES_FROM_END_PARAM) {
            Some((_, existing)) => *existing = value,
            None => pairs.push((PAGES_FROM_END_PARAM.to_string(), value)),
        }

        pairs
    }

    /// Link target for the page `pages_from_end` pages from the newest one:
    /// the bare path plus the rewritten query string.
    pub fn href_for(&self, path: &str, pages_from_end: usize) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(self.with_pages_from_end(pages_from_end));

        format!("{path}?{}", serializer.finish())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> FeedQuery {
        FeedQuery::from_pairs(
            pairs
                .iter()
                .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_per_page_defaults_to_twenty() {
        assert_eq!(query(&[]).per_page(), 20);
        assert_eq!(query(&[("posts_per_page", "banana")]).per_page(), 20);
        assert_eq!(query(&[("posts_per_page", "")]).per_page(), 20);
    }

    #[test]
    fn test_per_page_floors_at_one() {
        assert_eq!(query(&[("posts_per_page", "0")]).per_page(), 1);
        assert_eq!(query(&[("posts_per_page", "-4")]).per_page(), 1);
        assert_eq!(query(&[("posts_per_page", "7")]).per_page(), 7);
    }

    #[test]
    fn test_pages_from_end_parses_or_falls_back() {
        assert_eq!(query(&[]).pages_from_end_requested(), None);
        assert_eq!(
            query(&[("posts_pages_from_end", "soon")]).pages_from_end_requested(),
            None
        );
        assert_eq!(
            query(&[("posts_pages_from_end", "-2")]).pages_from_end_requested(),
            Some(-2)
        );
        assert_eq!(
            query(&[("posts_pages_from_end", "4")]).pages_from_end_requested(),
            Some(4)
        );
    }

    #[test]
    fn test_window_uses_both_parameters() {
        let window = query(&[
            ("posts_per_page", "10"),
            ("posts_pages_from_end", "1"),
        ])
        .window(45);

        assert_eq!(window.num_pages, 5);
        assert_eq!((window.start, window.end), (25, 35));
    }

    #[test]
    fn test_href_overwrites_in_place_and_keeps_order() {
        let q = query(&[
            ("tag", "rust"),
            ("posts_pages_from_end", "2"),
            ("posts_per_page", "10"),
        ]);

        assert_eq!(
            q.href_for("/posts", 0),
            "/posts?tag=rust&posts_pages_from_end=0&posts_per_page=10"
        );
    }

    #[test]
    fn test_href_appends_when_param_missing() {
        let q = query(&[("tag", "rust")]);

        assert_eq!(
            q.href_for("/posts", 3),
            "/posts?tag=rust&posts_pages_from_end=3"
        );
    }

    #[test]
    fn test_href_encodes_pair_values() {
        let q = query(&[("search", "two words")]);

        assert_eq!(
            q.href_for("/posts", 1),
            "/posts?search=two+words&posts_pages_from_end=1"
        );
    }

    #[test]
    fn test_href_on_a_bare_url() {
        assert_eq!(query(&[]).href_for("/posts", 2), "/posts?posts_pages_from_end=2");
    }
}
