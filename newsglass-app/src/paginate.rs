//! Fixed-window pagination for flattened comment threads.

/// Pagination plan for a comment sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentPagination {
    /// Whether control rows are needed at all.
    pub paginated: bool,
    /// Comment rows per page.
    pub per_page: usize,
    /// Total pages, always at least 1.
    pub total_pages: u32,
}

impl CommentPagination {
    /// Plan windows for `total` comments in a list of `capacity` rows.
    ///
    /// Everything fits on one page when `total <= capacity`. Otherwise two
    /// slots are reserved for the prev/next control rows, so each page holds
    /// `capacity - 2` comments.
    #[must_use]
    pub fn plan(total: usize, capacity: usize) -> Self {
        if total <= capacity {
            return Self {
                paginated: false,
                per_page: capacity,
                total_pages: 1,
            };
        }
        let per_page = capacity.saturating_sub(2).max(1);
        let total_pages = u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX).max(1);
        Self {
            paginated: true,
            per_page,
            total_pages,
        }
    }

    /// Clamp a requested page into `[1, total_pages]`.
    #[must_use]
    pub fn clamp_page(&self, page: u32) -> u32 {
        page.clamp(1, self.total_pages)
    }
}
