//! # newsglass-app
//!
//! Navigation core of the newsglass Hacker News reader: a state machine that
//! drives a fixed two-region display surface (a selectable story/comment list
//! above a read-only text panel) from selection events.
//!
//! ## Architecture
//!
//! [`NavigationController`] owns all state and is the single writer to the
//! surface; it talks to the device through the [`RenderGateway`] trait and to
//! the network through [`ContentSource`](newsglass_source::ContentSource).
//! [`ReaderHandle`] wraps the controller for shared use from event callbacks:
//! a selection arriving while a navigation is in flight is dropped, never
//! queued.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use newsglass_app::{NavigationController, ReaderHandle};
//! use newsglass_source::HnClient;
//! # use newsglass_app::{GatewayResult, RenderGateway, SurfaceSpec, TextRegionSpec};
//! # struct MyBridge;
//! # #[async_trait::async_trait]
//! # impl RenderGateway for MyBridge {
//! #     async fn create_surface(&self, _: &SurfaceSpec) -> GatewayResult<()> { Ok(()) }
//! #     async fn rebuild(&self, _: &SurfaceSpec) -> GatewayResult<()> { Ok(()) }
//! #     async fn update_text(&self, _: &TextRegionSpec) -> GatewayResult<()> { Ok(()) }
//! # }
//!
//! # async fn example() {
//! let controller = NavigationController::new(HnClient::new(), MyBridge);
//! let reader = ReaderHandle::new(controller);
//! reader.start().await;
//! // wire reader.dispatch(..) into the bridge's selection callback
//! # }
//! ```

pub mod action;
pub mod controller;
pub mod gateway;
pub mod handle;
pub mod layout;
pub mod list;
pub mod paginate;
pub mod state;
pub mod text;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export the embedder-facing surface
pub use action::Action;
pub use controller::NavigationController;
pub use gateway::{
    GatewayError, GatewayResult, ListRegionSpec, RegionRect, RenderGateway, SelectionEvent,
    SelectionKind, SurfaceSpec, TextRegionSpec,
};
pub use handle::ReaderHandle;
pub use layout::Layout;
pub use list::ListView;
pub use paginate::CommentPagination;
pub use state::{ListSnapshot, NavigationState, View};
