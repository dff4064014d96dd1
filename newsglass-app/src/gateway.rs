//! The narrow interface to the device bridge.
//!
//! The controller is the only caller; nothing in this crate implements the
//! trait for real hardware. Embedders wrap their bridge SDK in it and forward
//! selection events into [`ReaderHandle::dispatch`](crate::ReaderHandle::dispatch).

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Pixel rectangle of one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RegionRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Desired contents of the selectable list region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListRegionSpec {
    pub rect: RegionRect,
    pub id: u8,
    pub name: &'static str,
    /// Row labels, never empty and never containing a blank label.
    pub items: Vec<String>,
}

/// Desired contents of the read-only text region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextRegionSpec {
    pub rect: RegionRect,
    pub id: u8,
    pub name: &'static str,
    /// Already clamped to the text-region character budget.
    pub content: String,
}

/// Full two-region surface description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurfaceSpec {
    pub list: ListRegionSpec,
    pub text: TextRegionSpec,
}

/// Bridge-side failure.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The bridge answered a create call with a nonzero status.
    #[error("surface setup rejected with status {0}")]
    Rejected(i32),
    /// The bridge call itself failed.
    #[error("bridge transport error: {0}")]
    Transport(String),
}

/// Convenience alias for `Result<T, GatewayError>`.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// The only component that talks to the physical UI.
///
/// The controller issues no render call until [`create_surface`] has
/// succeeded once.
///
/// [`create_surface`]: RenderGateway::create_surface
#[async_trait]
pub trait RenderGateway: Send + Sync {
    /// One-time surface initialization with the startup contents.
    async fn create_surface(&self, spec: &SurfaceSpec) -> GatewayResult<()>;

    /// Atomically replace both regions — used for every view transition.
    async fn rebuild(&self, spec: &SurfaceSpec) -> GatewayResult<()>;

    /// Replace only the text region — loading placeholders, comment detail.
    async fn update_text(&self, spec: &TextRegionSpec) -> GatewayResult<()>;
}

#[async_trait]
impl<T: RenderGateway + ?Sized> RenderGateway for std::sync::Arc<T> {
    async fn create_surface(&self, spec: &SurfaceSpec) -> GatewayResult<()> {
        (**self).create_surface(spec).await
    }

    async fn rebuild(&self, spec: &SurfaceSpec) -> GatewayResult<()> {
        (**self).rebuild(spec).await
    }

    async fn update_text(&self, spec: &TextRegionSpec) -> GatewayResult<()> {
        (**self).update_text(spec).await
    }
}

/// How the surface reported a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Click,
    DoubleClick,
}

/// A selection event from the list region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEvent {
    pub kind: SelectionKind,
    /// Raw row index as the surface reported it; may be off by one for the
    /// anchor row, which dispatch corrects for.
    pub index: usize,
}
