use std::ops::RangeInclusive;

/// The visible slice of the feed and where it sits in the page sequence.
///
/// Pages are counted two ways. `pages_from_end` is the persisted form (0 is
/// the newest page), while page *numbers* are 1-based and counted from the
/// oldest post, so `current_page = num_pages - pages_from_end`. The window
/// is always a tail-aligned slice: page 0-from-end holds the newest
/// `per_page` posts and the oldest page holds whatever remainder is left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub per_page: usize,
    pub num_pages: usize,
    pub pages_from_end: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    /// Derives the window from the collection size and the (already parsed,
    /// not yet clamped) query state.
    ///
    /// `requested_pages_from_end` of `None` selects the default view: the
    /// single oldest page. Out-of-range requests clamp into
    /// `[0, num_pages - 1]`.
    pub fn compute(
        post_count: usize,
        per_page: usize,
        requested_pages_from_end: Option<i64>,
    ) -> Self {
        let per_page = per_page.max(1);
        let num_pages = post_count.div_ceil(per_page);
        let default_from_end = num_pages.saturating_sub(1);

        let pages_from_end = match requested_pages_from_end {
            Some(requested) => usize::try_from(requested)
                .unwrap_or(0)
                .min(default_from_end),
            None => default_from_end,
        };

        // pages_from_end <= num_pages - 1, so the skipped tail never covers
        // the whole collection and `end` stays positive for non-empty feeds.
        let end = post_count - per_page * pages_from_end;
        let start = end.saturating_sub(per_page);

        Self {
            per_page,
            num_pages,
            pages_from_end,
            start,
            end,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.num_pages == 0
    }

    /// 1-based page number counted from the oldest post. 0 for an empty feed.
    pub fn current_page(&self) -> usize {
        self.num_pages - self.pages_from_end
    }

    /// The `pages_from_end` value a link targeting `page` must carry.
    pub fn pages_from_end_for(&self, page: usize) -> usize {
        self.num_pages - page
    }

    pub fn prev_page(&self) -> Option<usize> {
        let current = self.current_page();

        (current > 1).then(|| current - 1)
    }

    pub fn next_page(&self) -> Option<usize> {
        let current = self.current_page();

        (current < self.num_pages).then(|| current + 1)
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.num_pages
    }
}
