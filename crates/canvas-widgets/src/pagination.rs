//! Pagination engine: page state, slicing, and summary text.

/// Page position and sizing for a paginated view.
///
/// `page` is 1-based. `total` drives page-count computation; in
/// self-managed mode the table keeps it synced to the row count, in
/// controlled mode the caller supplies it (e.g. a server-side total
/// larger than the rows currently held).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    /// Current page, 1-based.
    pub page: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Total number of rows across all pages.
    pub total: usize,
    /// Sizes offered by the page-size control.
    pub page_size_options: Vec<usize>,
}

impl PageState {
    /// Create page state at page 1 with the given page size and the
    /// default size options.
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total: 0,
            page_size_options: vec![10, 20, 50, 100],
        }
    }

    /// Number of pages for the current total (0 when there are no rows).
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    /// Whether the current page is the first.
    pub fn on_first_page(&self) -> bool {
        self.page <= 1
    }

    /// Whether the current page is the last (or past it).
    pub fn on_last_page(&self) -> bool {
        self.page >= self.page_count()
    }

    /// The slice of `items` belonging to the current page.
    ///
    /// The slice `[(page-1)*size, page*size)` clipped to the item count; a
    /// page beyond the last yields an empty slice rather than an error.
    pub fn slice<'a, I>(&self, items: &'a [I]) -> &'a [I] {
        let start = (self.page.saturating_sub(1)) * self.page_size;
        if start >= items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(items.len());
        &items[start..end]
    }

    /// Advance one page, clamped to the last page.
    pub fn next_page(&mut self) {
        if !self.on_last_page() {
            self.page += 1;
        }
    }

    /// Go back one page, clamped to the first page.
    pub fn prev_page(&mut self) {
        if !self.on_first_page() {
            self.page -= 1;
        }
    }

    /// Jump to the first page.
    pub fn first_page(&mut self) {
        self.page = 1;
    }

    /// Jump to the last page.
    pub fn last_page(&mut self) {
        self.page = self.page_count().max(1);
    }

    /// Set the page, clamped to the valid range.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.clamp(1, self.page_count().max(1));
    }

    /// Change the page size and return to page 1, so the new slicing
    /// cannot land on an out-of-range page.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Switch to the next entry in `page_size_options` (wrapping), and
    /// return to page 1.
    pub fn cycle_page_size(&mut self) {
        if self.page_size_options.is_empty() {
            return;
        }
        let next = match self
            .page_size_options
            .iter()
            .position(|&s| s == self.page_size)
        {
            Some(i) => self.page_size_options[(i + 1) % self.page_size_options.len()],
            None => self.page_size_options[0],
        };
        self.set_page_size(next);
    }

    /// Update the total row count, clamping the page back into range when
    /// the data shrank under it.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.page = self.page.clamp(1, self.page_count().max(1));
    }

    /// Human-readable range summary for the current page.
    ///
    /// `Showing {start} to {end} of {total} entries`, where `start` is
    /// `(page-1)*size + 1` and `end` is `min(page*size, total)`. With no
    /// rows the formula would claim "1 to 0", so the empty case gets its
    /// own copy.
    pub fn summary(&self) -> String {
        if self.total == 0 {
            return "Showing 0 entries".to_string();
        }
        let start = (self.page - 1) * self.page_size + 1;
        let end = (self.page * self.page_size).min(self.total);
        format!("Showing {start} to {end} of {total} entries", total = self.total)
    }

    /// Position indicator for the pagination controls, e.g. `Page 2 of 3`.
    pub fn indicator(&self) -> String {
        format!("Page {} of {}", self.page, self.page_count().max(1))
    }
}

/// Whether and how the data table paginates.
pub enum Pagination {
    /// No pagination: every row is visible.
    Off,
    /// Self-managed: the table owns the state and mutates it directly in
    /// its page-navigation handlers.
    Managed(PageState),
    /// Externally managed: the state is read-only props. Navigation emits
    /// a pagination-change message and the caller feeds back new state;
    /// nothing is mutated locally.
    Controlled(PageState),
}

impl Pagination {
    /// The current page state, if pagination is enabled.
    pub fn state(&self) -> Option<&PageState> {
        match self {
            Pagination::Off => None,
            Pagination::Managed(state) | Pagination::Controlled(state) => Some(state),
        }
    }

    /// Whether pagination is enabled in either mode.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Pagination::Off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: usize, page_size: usize, total: usize) -> PageState {
        let mut s = PageState::new(page_size);
        s.total = total;
        s.page = page;
        s
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(state(1, 10, 25).page_count(), 3);
        assert_eq!(state(1, 10, 30).page_count(), 3);
        assert_eq!(state(1, 10, 31).page_count(), 4);
        assert_eq!(state(1, 10, 0).page_count(), 0);
    }

    #[test]
    fn slice_invariant_holds_for_every_page() {
        let items: Vec<usize> = (0..25).collect();
        let page_size = 10;
        for page in 1..=3 {
            let s = state(page, page_size, items.len());
            let expected = page_size.min(items.len() - (page - 1) * page_size);
            assert_eq!(s.slice(&items).len(), expected);
        }
    }

    #[test]
    fn slice_beyond_last_page_is_empty() {
        let items: Vec<usize> = (0..25).collect();
        assert!(state(4, 10, 25).slice(&items).is_empty());
        assert!(state(99, 10, 25).slice(&items).is_empty());
    }

    #[test]
    fn slice_of_empty_items_is_empty() {
        let items: Vec<usize> = Vec::new();
        assert!(state(1, 10, 0).slice(&items).is_empty());
    }

    #[test]
    fn navigation_clamps_at_edges() {
        let mut s = state(1, 10, 25);
        s.prev_page();
        assert_eq!(s.page, 1);
        s.next_page();
        s.next_page();
        assert_eq!(s.page, 3);
        s.next_page();
        assert_eq!(s.page, 3);
        s.first_page();
        assert_eq!(s.page, 1);
        s.last_page();
        assert_eq!(s.page, 3);
    }

    #[test]
    fn page_size_change_resets_to_page_one() {
        let mut s = state(3, 10, 25);
        s.set_page_size(20);
        assert_eq!(s.page, 1);
        assert_eq!(s.page_size, 20);
    }

    #[test]
    fn cycle_page_size_walks_options() {
        let mut s = state(2, 10, 100);
        s.cycle_page_size();
        assert_eq!(s.page_size, 20);
        assert_eq!(s.page, 1);
        s.cycle_page_size();
        assert_eq!(s.page_size, 50);
        s.cycle_page_size();
        assert_eq!(s.page_size, 100);
        s.cycle_page_size();
        assert_eq!(s.page_size, 10);
    }

    #[test]
    fn cycle_page_size_from_unlisted_size_starts_at_first_option() {
        let mut s = state(1, 15, 100);
        s.cycle_page_size();
        assert_eq!(s.page_size, 10);
    }

    #[test]
    fn shrinking_total_pulls_page_back_into_range() {
        let mut s = state(3, 10, 25);
        s.set_total(5);
        assert_eq!(s.page, 1);
        assert_eq!(s.page_count(), 1);
    }

    #[test]
    fn summary_text() {
        assert_eq!(state(1, 10, 25).summary(), "Showing 1 to 10 of 25 entries");
        assert_eq!(state(3, 10, 25).summary(), "Showing 21 to 25 of 25 entries");
        assert_eq!(state(1, 10, 3).summary(), "Showing 1 to 3 of 3 entries");
    }

    #[test]
    fn summary_with_no_rows_avoids_one_to_zero() {
        assert_eq!(state(1, 10, 0).summary(), "Showing 0 entries");
    }

    #[test]
    fn indicator_text() {
        assert_eq!(state(2, 10, 25).indicator(), "Page 2 of 3");
        assert_eq!(state(1, 10, 0).indicator(), "Page 1 of 1");
    }
}
