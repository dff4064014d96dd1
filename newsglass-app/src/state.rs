//! Navigation state owned by the controller.

use newsglass_source::{CommentNode, Story};

use crate::action::Action;
use crate::layout::Layout;

/// Which screen the surface is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Story,
}

/// Cached list screen, restored on back-navigation without refetching.
///
/// The cache always mirrors what the list screen last showed — a loaded page
/// or the failure view alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    pub labels: Vec<String>,
    pub actions: Vec<Action>,
    pub text: String,
    pub page: u32,
    pub stories: Vec<Story>,
}

/// The single process-wide navigation state.
///
/// Only controller entry points mutate it, one at a time under the
/// single-flight guard.
#[derive(Debug, Clone)]
pub struct NavigationState {
    pub view: View,
    /// Current feed page, 1-indexed.
    pub page: u32,
    pub stories: Vec<Story>,
    /// Actions for the currently rendered labels, by position.
    pub actions: Vec<Action>,
    pub comments: Vec<CommentNode>,
    /// Current comment window, 1-indexed.
    pub comment_page: u32,
    /// Set exactly when `view == View::Story`.
    pub active_story: Option<Story>,
    pub layout: Layout,
    pub list_cache: Option<ListSnapshot>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            view: View::List,
            page: 1,
            stories: Vec::new(),
            actions: Vec::new(),
            comments: Vec::new(),
            comment_page: 1,
            active_story: None,
            layout: Layout::Default,
            list_cache: None,
        }
    }
}

impl NavigationState {
    /// Drop story sub-state when (re-)entering the list view.
    pub(crate) fn reset_story_state(&mut self) {
        self.view = View::List;
        self.active_story = None;
        self.comments.clear();
        self.comment_page = 1;
        self.layout = Layout::Default;
    }
}
