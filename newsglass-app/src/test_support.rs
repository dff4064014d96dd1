//! Scripted fakes shared by the controller and handle tests.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use newsglass_source::{CommentNode, ContentSource, Result, SourceError, Story};
use tokio::sync::Notify;

use crate::gateway::{GatewayError, GatewayResult, RenderGateway, SurfaceSpec, TextRegionSpec};

pub(crate) fn story(n: usize) -> Story {
    Story {
        id: n.to_string(),
        title: format!("Story {n}"),
        url: format!("https://example.com/{n}"),
        score: Some(10),
        author: Some(format!("poster{n}")),
        comment_count: Some(3),
        age: Some("1 hour ago".to_string()),
    }
}

pub(crate) fn stories(n: usize) -> Vec<Story> {
    (0..n).map(story).collect()
}

pub(crate) fn comment(n: usize, depth: usize) -> CommentNode {
    CommentNode {
        id: n.to_string(),
        author: Some(format!("user{n}")),
        text: format!("comment body {n}"),
        age: None,
        depth,
    }
}

pub(crate) fn comments(n: usize) -> Vec<CommentNode> {
    (0..n).map(|i| comment(i, 0)).collect()
}

/// A [`ContentSource`] that replays a script.
///
/// Interior mutability throughout so a test can reconfigure it through the
/// `Arc` it shares with the controller.
#[derive(Default)]
pub(crate) struct ScriptedSource {
    stories: Mutex<Vec<Story>>,
    comments: Mutex<Vec<CommentNode>>,
    summary: Mutex<String>,
    fail_front_page: AtomicBool,
    fail_comments: AtomicBool,
    front_page_calls: AtomicU32,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl ScriptedSource {
    pub fn with_stories(self, stories: Vec<Story>) -> Self {
        *self.stories.lock().unwrap() = stories;
        self
    }

    pub fn with_comments(self, comments: Vec<CommentNode>) -> Self {
        *self.comments.lock().unwrap() = comments;
        self
    }

    pub fn with_summary(self, summary: &str) -> Self {
        *self.summary.lock().unwrap() = summary.to_string();
        self
    }

    pub fn failing_front_page(self) -> Self {
        self.fail_front_page.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_comments(self) -> Self {
        self.fail_comments.store(true, Ordering::SeqCst);
        self
    }

    /// Park every `front_page` call on the notify until the test releases it.
    pub fn gated(self, gate: Arc<Notify>) -> Self {
        *self.gate.lock().unwrap() = Some(gate);
        self
    }

    pub fn set_stories(&self, stories: Vec<Story>) {
        *self.stories.lock().unwrap() = stories;
    }

    pub fn set_fail_front_page(&self, fail: bool) {
        self.fail_front_page.store(fail, Ordering::SeqCst);
    }

    pub fn front_page_calls(&self) -> u32 {
        self.front_page_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for ScriptedSource {
    async fn front_page(&self, _page: u32) -> Result<Vec<Story>> {
        self.front_page_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().unwrap().clone();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if self.fail_front_page.load(Ordering::SeqCst) {
            return Err(SourceError::Status {
                source_id: "scripted",
                status: 500,
            });
        }
        Ok(self.stories.lock().unwrap().clone())
    }

    async fn comments(&self, _story_id: &str) -> Result<Vec<CommentNode>> {
        if self.fail_comments.load(Ordering::SeqCst) {
            return Err(SourceError::Status {
                source_id: "scripted",
                status: 500,
            });
        }
        Ok(self.comments.lock().unwrap().clone())
    }

    async fn page_summary(&self, _story: &Story) -> String {
        self.summary.lock().unwrap().clone()
    }
}

/// A [`RenderGateway`] that records every call for later inspection.
#[derive(Default)]
pub(crate) struct RecordingGateway {
    create_calls: AtomicU32,
    reject_create: AtomicBool,
    rebuilds: Mutex<Vec<SurfaceSpec>>,
    text_updates: Mutex<Vec<String>>,
}

impl RecordingGateway {
    pub fn set_reject_create(&self, reject: bool) {
        self.reject_create.store(reject, Ordering::SeqCst);
    }

    pub fn create_calls(&self) -> u32 {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn rebuild_count(&self) -> usize {
        self.rebuilds.lock().unwrap().len()
    }

    pub fn last_rebuild(&self) -> SurfaceSpec {
        self.rebuilds
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no rebuild recorded")
    }

    pub fn text_updates(&self) -> Vec<String> {
        self.text_updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl RenderGateway for RecordingGateway {
    async fn create_surface(&self, _spec: &SurfaceSpec) -> GatewayResult<()> {
        if self.reject_create.load(Ordering::SeqCst) {
            return Err(GatewayError::Rejected(1));
        }
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn rebuild(&self, spec: &SurfaceSpec) -> GatewayResult<()> {
        self.rebuilds.lock().unwrap().push(spec.clone());
        Ok(())
    }

    async fn update_text(&self, spec: &TextRegionSpec) -> GatewayResult<()> {
        self.text_updates.lock().unwrap().push(spec.content.clone());
        Ok(())
    }
}
