//! Host abstraction.
//!
//! The swipe tool never talks to a concrete canvas, layer, or widget
//! toolkit. The embedding shell implements [`MapCanvas`], [`MapLayer`], and
//! [`ToolSlot`] over its own GIS API, and registers the session (which
//! implements [`CanvasEventSink`] + [`CanvasOverlay`]) as the active tool.
//!
//! Everything runs on the host's event-dispatch thread; handles are shared
//! through `Rc` and nothing here is `Send`.

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

use crate::error::SwipeError;
use crate::geometry::{CanvasSize, ScreenPoint, ScreenRect};
use crate::settings::LineColor;

/// A captured raster of the canvas, used as the static base side of the
/// comparison. Immutable once captured.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub size: CanvasSize,
    /// Tightly packed RGBA8 pixels, row-major.
    pub rgba: Vec<u8>,
}

impl Snapshot {
    pub fn new(size: CanvasSize, rgba: Vec<u8>) -> Self {
        Self { size, rgba }
    }

    /// A snapshot filled with a single color.
    pub fn filled(size: CanvasSize, pixel: [u8; 4]) -> Self {
        let count = size.width as usize * size.height as usize;
        let mut rgba = Vec::with_capacity(count * 4);
        for _ in 0..count {
            rgba.extend_from_slice(&pixel);
        }
        Self { size, rgba }
    }
}

/// Token identifying a view-change subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubscriptionId {
    fn default() -> Self {
        Self::new()
    }
}

/// The host map canvas.
pub trait MapCanvas {
    /// Current canvas size in pixels.
    fn size(&self) -> CanvasSize;

    /// Capture the current canvas state as a raster snapshot.
    fn capture(&self) -> Result<Snapshot, SwipeError>;

    /// Ask the host to repaint the canvas (and any overlays) when idle.
    fn request_redraw(&self);

    /// Register interest in view changes (pan/zoom/extent). The host will
    /// deliver them to the active tool via [`CanvasEventSink::view_changed`].
    fn subscribe_view_changes(&self) -> SubscriptionId;

    /// Release a subscription. Unsubscribing a token that is unknown or
    /// already released is a no-op.
    fn unsubscribe_view_changes(&self, id: SubscriptionId);
}

/// A host map layer. The swipe tool never owns the layer; it only mutates
/// and later restores the layer's opacity.
pub trait MapLayer {
    fn name(&self) -> &str;

    /// Set the layer's rendering opacity, in [0, 1].
    fn set_opacity(&self, opacity: f64);

    /// Ask the host to re-render the layer with its current settings.
    fn trigger_repaint(&self);
}

/// The host's exclusive active-tool registration.
pub trait ToolSlot {
    /// Install the tool; it receives all canvas input until cleared or
    /// replaced.
    fn install(&self, tool: Rc<RefCell<dyn CanvasTool>>);

    /// Remove the active tool. Clearing an empty slot is a no-op.
    fn clear(&self);
}

/// Receives canvas input and lifecycle events from the host dispatch.
pub trait CanvasEventSink {
    fn activated(&mut self);
    fn deactivated(&mut self);
    fn press(&mut self, pos: ScreenPoint);
    fn drag(&mut self, pos: ScreenPoint);
    fn release(&mut self, pos: ScreenPoint);
    /// The view extent or scale changed (pan/zoom).
    fn view_changed(&mut self);
}

/// Draws on top of the canvas after the map itself has been painted.
pub trait CanvasOverlay {
    fn render(&self, surface: &mut dyn PaintSurface);
}

/// A tool the host can install: event sink and overlay in one object.
pub trait CanvasTool: CanvasEventSink + CanvasOverlay {}

impl<T: CanvasEventSink + CanvasOverlay> CanvasTool for T {}

/// Painting operations the overlay needs from the host surface.
pub trait PaintSurface {
    /// Draw `image` at the canvas origin, clipped to `clip`.
    fn draw_image(&mut self, image: &Snapshot, clip: ScreenRect);

    /// Draw a straight line, unclipped.
    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: LineColor, width: u32);
}
