//! Semantic actions behind list rows.

/// What selecting a rendered row means.
///
/// Exactly one action corresponds to each rendered label, by parallel array
/// position; dispatch matches exhaustively so a new action kind is a
/// compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Load the previous feed page.
    PrevPage,
    /// Load the next feed page (the feed has no known upper bound).
    NextPage,
    /// Reload the page whose load failed.
    Retry { page: u32 },
    /// Open the story at this index into the current page's stories.
    OpenStory { index: usize },
    /// Show a comment's full text; `None` is the sentinel row of an empty
    /// thread and fires nothing.
    OpenComment { index: Option<usize> },
    /// Show the previous comment window.
    PrevComments,
    /// Show the next comment window.
    NextComments,
}
