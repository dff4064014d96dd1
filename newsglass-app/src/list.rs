//! Turning domain items into parallel label/action arrays.
//!
//! The list region holds at most [`MAX_LIST_ITEMS`] rows; pagination controls
//! are ordinary rows that spend slots from the same budget. Every builder
//! upholds `labels.len() == actions.len()`.

use newsglass_source::{CommentNode, Story};

use crate::action::Action;
use crate::layout::{MAX_COMMENT_INDENT, MAX_LIST_ITEMS, MAX_TITLE_CHARS};
use crate::paginate::CommentPagination;
use crate::text::{clamp_label, clamp_label_loose, normalize};

pub const PREV_PAGE_LABEL: &str = "◀ Prev page";
pub const NEXT_PAGE_LABEL: &str = "Next page ▶";
pub const RETRY_LABEL: &str = "Retry";
pub const PREV_COMMENTS_LABEL: &str = "◀ Previous comments";
pub const NEXT_COMMENTS_LABEL: &str = "More comments ▶";
pub const NO_COMMENTS_LABEL: &str = "No comments yet.";

/// One built list: labels and their actions, by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub labels: Vec<String>,
    pub actions: Vec<Action>,
}

impl ListView {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            labels: Vec::with_capacity(capacity),
            actions: Vec::with_capacity(capacity),
        }
    }

    fn push(&mut self, label: impl Into<String>, action: Action) {
        self.labels.push(label.into());
        self.actions.push(action);
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Build the story list for one feed page.
///
/// One slot is reserved for the prev control when `page > 1` and one for the
/// next control always — the feed is treated as unbounded. Stories beyond the
/// remaining slots are not rendered.
pub fn build_story_list(stories: &[Story], page: u32) -> ListView {
    let has_prev = page > 1;
    let reserved = usize::from(has_prev) + 1;
    let story_slots = MAX_LIST_ITEMS.saturating_sub(reserved);

    let mut view = ListView::with_capacity(MAX_LIST_ITEMS);

    if has_prev {
        view.push(PREV_PAGE_LABEL, Action::PrevPage);
    }

    for (index, story) in stories.iter().take(story_slots).enumerate() {
        let position = index + 1;
        let title = normalize(&story.title, MAX_TITLE_CHARS);
        let label = clamp_label(&format!("{position}. {title}"));
        let label = if label.is_empty() {
            format!("{position}. Untitled")
        } else {
            label
        };
        view.push(label, Action::OpenStory { index });
    }

    view.push(NEXT_PAGE_LABEL, Action::NextPage);
    view
}

/// The fixed recovery view shown when a page load fails.
pub fn failure_list(page: u32) -> ListView {
    let mut view = ListView::with_capacity(2);
    view.push(RETRY_LABEL, Action::Retry { page });
    view.push(NEXT_PAGE_LABEL, Action::NextPage);
    view
}

fn comment_label(comment: &CommentNode) -> String {
    let depth = comment.depth.min(MAX_COMMENT_INDENT);
    let indent = if depth > 0 {
        format!("{} ", ">".repeat(depth))
    } else {
        String::new()
    };
    let author = comment
        .author
        .as_deref()
        .map(|a| format!("{a}: "))
        .unwrap_or_default();
    let text = {
        let t = comment.text.split_whitespace().collect::<Vec<_>>().join(" ");
        if t.is_empty() { "[comment]".to_string() } else { t }
    };
    clamp_label_loose(&format!("{indent}{author}{text}"))
}

/// Build one window of the comment list.
///
/// Returns the view plus the thread's total page count (needed for the
/// pagination footer in the text region).
pub fn build_comment_list(comments: &[CommentNode], page: u32) -> (ListView, u32) {
    if comments.is_empty() {
        let mut view = ListView::with_capacity(1);
        view.push(NO_COMMENTS_LABEL, Action::OpenComment { index: None });
        return (view, 1);
    }

    let plan = CommentPagination::plan(comments.len(), MAX_LIST_ITEMS);
    let safe_page = plan.clamp_page(page);
    let start = (safe_page as usize - 1) * plan.per_page;
    let end = (start + plan.per_page).min(comments.len());

    let mut view = ListView::with_capacity(MAX_LIST_ITEMS);

    if plan.paginated && safe_page > 1 {
        view.push(PREV_COMMENTS_LABEL, Action::PrevComments);
    }
    for (offset, comment) in comments[start..end].iter().enumerate() {
        view.push(
            comment_label(comment),
            Action::OpenComment {
                index: Some(start + offset),
            },
        );
    }
    if plan.paginated && safe_page < plan.total_pages {
        view.push(NEXT_COMMENTS_LABEL, Action::NextComments);
    }

    (view, plan.total_pages)
}
