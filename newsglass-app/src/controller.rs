//! The navigation state machine.
//!
//! Two views (list, story), one owned [`NavigationState`], and a single-flight
//! guard: every entry point sets the in-flight flag on entry and clears it on
//! every exit path, and a navigation request arriving while the flag is held
//! is dropped, never queued. No failure here is fatal — fetch errors become
//! the retry view, render errors are logged, and the screen stays interactive.

use newsglass_source::{CommentNode, ContentSource, Story};

use crate::action::Action;
use crate::gateway::{
    ListRegionSpec, RegionRect, RenderGateway, SelectionEvent, SelectionKind, SurfaceSpec,
    TextRegionSpec,
};
use crate::layout::{LIST_REGION_ID, MAX_TEXT_CHARS, SCREEN_WIDTH, TEXT_REGION_ID};
use crate::list::{build_comment_list, build_story_list, failure_list};
use crate::paginate::CommentPagination;
use crate::state::{ListSnapshot, NavigationState, View};
use crate::text::normalize;

const LIST_REGION_NAME: &str = "newsglass-list";
const TEXT_REGION_NAME: &str = "newsglass-text";

const STARTUP_ITEM: &str = "Loading...";
const STARTUP_TEXT: &str = "Hacker News reader";
const EMPTY_LIST_ITEM: &str = "No stories";
const FAILURE_TEXT: &str = "Failed to load Hacker News.";
const EMPTY_FEED_TEXT: &str = "No stories returned.";
const LIST_HINT: &str = "Select a story. Use Prev/Next to change page.";
const BACK_HINT: &str = "Double click to go back.";

/// Drives the two-region surface from selection events.
pub struct NavigationController<S, G> {
    source: S,
    gateway: G,
    state: NavigationState,
    started: bool,
    in_flight: bool,
}

fn format_story_details(story: &Story) -> String {
    let mut meta = Vec::new();
    if let Some(score) = story.score {
        meta.push(format!("{score} points"));
    }
    if let Some(author) = &story.author {
        meta.push(format!("by {author}"));
    }
    if let Some(count) = story.comment_count {
        meta.push(format!("{count} comments"));
    }
    if let Some(age) = &story.age {
        meta.push(age.clone());
    }

    let mut lines = vec![story.title.clone(), story.url.clone()];
    if !meta.is_empty() {
        lines.push(meta.join(" · "));
    }
    lines.join("\n")
}

fn format_comment_details(comment: &CommentNode) -> String {
    let mut meta = Vec::new();
    if let Some(author) = &comment.author {
        meta.push(format!("by {author}"));
    }
    if let Some(age) = &comment.age {
        meta.push(age.clone());
    }

    let mut lines = Vec::new();
    if !meta.is_empty() {
        lines.push(meta.join(" · "));
    }
    lines.push(comment.text.clone());
    lines.join("\n")
}

fn story_view_text(story: &Story, summary: &str, comment_page: u32, total_pages: u32) -> String {
    let mut lines = vec![format_story_details(story)];
    if !summary.is_empty() {
        lines.push(summary.to_string());
    }
    lines.push(format!("Comments page {comment_page}/{total_pages}."));
    lines.push(BACK_HINT.to_string());
    lines.join("\n")
}

/// Replace blank labels so no rendered row is ever empty.
fn sanitize_labels(labels: &[String]) -> Vec<String> {
    if labels.is_empty() {
        return vec![EMPTY_LIST_ITEM.to_string()];
    }
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            if label.trim().is_empty() {
                format!("{}. Untitled", i + 1)
            } else {
                label.clone()
            }
        })
        .collect()
}

impl<S, G> NavigationController<S, G>
where
    S: ContentSource,
    G: RenderGateway,
{
    pub fn new(source: S, gateway: G) -> Self {
        Self {
            source,
            gateway,
            state: NavigationState::default(),
            started: false,
            in_flight: false,
        }
    }

    /// Current navigation state, for embedders and tests.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Initial navigation: the first feed page.
    pub async fn start(&mut self) {
        self.load_page(1).await;
    }

    // ---- single-flight guard ----

    fn begin(&mut self) -> bool {
        if self.in_flight {
            log::debug!("navigation dropped: another operation is in flight");
            return false;
        }
        self.in_flight = true;
        true
    }

    fn finish(&mut self) {
        self.in_flight = false;
    }

    // ---- render plumbing ----

    fn text_spec(&self, text: &str) -> TextRegionSpec {
        let (list_height, text_height) = self.state.layout.heights();
        TextRegionSpec {
            rect: RegionRect {
                x: 0,
                y: list_height,
                width: SCREEN_WIDTH,
                height: text_height,
            },
            id: TEXT_REGION_ID,
            name: TEXT_REGION_NAME,
            content: normalize(text, MAX_TEXT_CHARS),
        }
    }

    fn surface_spec(&self, items: Vec<String>, text: &str) -> SurfaceSpec {
        let (list_height, _) = self.state.layout.heights();
        SurfaceSpec {
            list: ListRegionSpec {
                rect: RegionRect {
                    x: 0,
                    y: 0,
                    width: SCREEN_WIDTH,
                    height: list_height,
                },
                id: LIST_REGION_ID,
                name: LIST_REGION_NAME,
                items,
            },
            text: self.text_spec(text),
        }
    }

    /// One-time surface creation; render calls are withheld until it succeeds.
    async fn ensure_surface(&mut self) -> bool {
        if self.started {
            return true;
        }
        let spec = self.surface_spec(vec![STARTUP_ITEM.to_string()], STARTUP_TEXT);
        match self.gateway.create_surface(&spec).await {
            Ok(()) => {
                self.started = true;
                true
            }
            Err(e) => {
                log::error!("surface creation failed: {e}");
                false
            }
        }
    }

    async fn rebuild_list(&mut self, labels: &[String], text: &str) {
        if !self.ensure_surface().await {
            return;
        }
        let spec = self.surface_spec(sanitize_labels(labels), text);
        if let Err(e) = self.gateway.rebuild(&spec).await {
            log::error!("list rebuild failed: {e}");
        }
    }

    async fn show_text(&self, text: &str) {
        if !self.started {
            return;
        }
        if let Err(e) = self.gateway.update_text(&self.text_spec(text)).await {
            log::error!("text update failed: {e}");
        }
    }

    // ---- navigation entry points ----

    /// Load a feed page; also the retry path and the prev/next transition.
    pub async fn load_page(&mut self, page: u32) {
        if !self.begin() {
            return;
        }
        self.load_page_guarded(page).await;
        self.finish();
    }

    async fn load_page_guarded(&mut self, page: u32) {
        if !self.ensure_surface().await {
            return;
        }
        self.show_text(&format!("Loading page {page}...")).await;

        match self.source.front_page(page).await {
            Ok(stories) => {
                let view = build_story_list(&stories, page);
                self.state.page = page;
                self.state.stories = stories;
                self.state.actions = view.actions.clone();
                self.state.reset_story_state();

                let text = if self.state.stories.is_empty() {
                    EMPTY_FEED_TEXT.to_string()
                } else {
                    format!("HN page {page}. {LIST_HINT}")
                };
                self.rebuild_list(&view.labels, &text).await;
                self.state.list_cache = Some(ListSnapshot {
                    labels: view.labels,
                    actions: view.actions,
                    text,
                    page,
                    stories: self.state.stories.clone(),
                });
            }
            Err(e) => {
                log::warn!("page {page} load failed: {e}");
                let view = failure_list(page);
                self.state.page = page;
                self.state.stories.clear();
                self.state.actions = view.actions.clone();
                self.state.reset_story_state();

                self.rebuild_list(&view.labels, FAILURE_TEXT).await;
                self.state.list_cache = Some(ListSnapshot {
                    labels: view.labels,
                    actions: view.actions,
                    text: FAILURE_TEXT.to_string(),
                    page,
                    stories: Vec::new(),
                });
            }
        }
    }

    /// Open a story: expanded layout, comments + page summary.
    pub async fn open_story(&mut self, story: Story) {
        if !self.begin() {
            return;
        }
        self.open_story_guarded(story).await;
        self.finish();
    }

    async fn open_story_guarded(&mut self, story: Story) {
        self.state.view = View::Story;
        self.state.active_story = Some(story.clone());
        self.state.comments.clear();
        self.state.comment_page = 1;
        self.state.layout = crate::layout::Layout::Expanded;

        self.show_text(&format!("Loading \"{}\"...", story.title)).await;

        // All-settle join: either fetch failing must not block the other.
        let source = &self.source;
        let (comments, summary) =
            futures::join!(source.comments(&story.id), source.page_summary(&story));
        let comments = comments.unwrap_or_else(|e| {
            log::warn!("comment fetch failed for {}: {e}", story.id);
            Vec::new()
        });
        self.state.comments = comments;

        let (view, total_pages) = build_comment_list(&self.state.comments, 1);
        self.state.actions = view.actions;
        let text = story_view_text(&story, &summary, 1, total_pages);
        self.rebuild_list(&view.labels, &text).await;
    }

    /// Re-render the story view at another comment window.
    pub async fn show_comment_page(&mut self, page: u32) {
        if self.state.view != View::Story || self.state.active_story.is_none() {
            return;
        }
        if !self.begin() {
            return;
        }
        self.show_comment_page_guarded(page).await;
        self.finish();
    }

    async fn show_comment_page_guarded(&mut self, page: u32) {
        let plan = CommentPagination::plan(self.state.comments.len(), crate::layout::MAX_LIST_ITEMS);
        let safe_page = plan.clamp_page(page);
        self.state.comment_page = safe_page;

        let (view, total_pages) = build_comment_list(&self.state.comments, safe_page);
        self.state.actions = view.actions;

        let Some(story) = self.state.active_story.clone() else {
            return;
        };
        // Story metadata is unchanged; the summary is not re-fetched here.
        let text = story_view_text(&story, "", safe_page, total_pages);
        self.rebuild_list(&view.labels, &text).await;
    }

    /// Return to the list view, from cache when one exists.
    pub async fn show_list_view(&mut self) {
        if !self.begin() {
            return;
        }
        let Some(cache) = self.state.list_cache.clone() else {
            // Nothing cached yet; degrade to a fresh first page.
            self.finish();
            self.load_page(1).await;
            return;
        };

        self.state.page = cache.page;
        self.state.stories = cache.stories;
        self.state.actions = cache.actions;
        self.state.reset_story_state();
        self.rebuild_list(&cache.labels, &cache.text).await;
        self.finish();
    }

    // ---- selection dispatch ----

    /// Map a raw surface index onto the current action array.
    ///
    /// The surface sometimes reports indices shifted up by one past the
    /// anchor row, so an out-of-range index is retried at `index - 1`; still
    /// out of range means no action fires.
    fn resolve_action(&self, raw: usize) -> Option<Action> {
        let actions = &self.state.actions;
        if raw < actions.len() {
            Some(actions[raw])
        } else if raw >= 1 && raw - 1 < actions.len() {
            Some(actions[raw - 1])
        } else {
            None
        }
    }

    /// Entry point for selection events from the surface.
    pub async fn handle_selection(&mut self, event: SelectionEvent) {
        if self.in_flight {
            log::debug!("selection dropped: navigation in flight");
            return;
        }

        match event.kind {
            SelectionKind::DoubleClick => {
                if self.state.view == View::Story {
                    self.show_list_view().await;
                }
            }
            SelectionKind::Click => {
                let Some(action) = self.resolve_action(event.index) else {
                    return;
                };
                self.dispatch(action).await;
            }
        }
    }

    async fn dispatch(&mut self, action: Action) {
        match action {
            Action::PrevPage => {
                let prev = self.state.page.saturating_sub(1).max(1);
                if prev != self.state.page {
                    self.load_page(prev).await;
                }
            }
            Action::NextPage => {
                self.load_page(self.state.page + 1).await;
            }
            Action::Retry { page } => {
                self.load_page(page).await;
            }
            Action::OpenStory { index } => {
                if let Some(story) = self.state.stories.get(index).cloned() {
                    self.open_story(story).await;
                }
            }
            Action::OpenComment { index: Some(index) } => {
                let Some(comment) = self.state.comments.get(index) else {
                    return;
                };
                let text = format_comment_details(comment);
                self.show_text(&text).await;
            }
            Action::OpenComment { index: None } => {}
            Action::PrevComments => {
                self.show_comment_page(self.state.comment_page.saturating_sub(1)).await;
            }
            Action::NextComments => {
                self.show_comment_page(self.state.comment_page + 1).await;
            }
        }
    }
}
