//! # MapSwipe Core
//!
//! Swipe-comparison state machine for a host map canvas: the user drags a
//! split line across the view to compare a cached snapshot of the full map
//! with a selected layer rendering at partial opacity.
//!
//! All heavy lifting (compositing, coordinate transforms, raster rendering)
//! stays on the host side behind the traits in [`host`]. This crate only
//! coordinates: it owns the split position, the snapshot cache, and the
//! target layer's opacity override.

pub mod direction;
pub mod geometry;
pub mod settings;
pub mod error;
pub mod host;
pub mod session;
pub mod controller;

pub use controller::SwipeController;
pub use direction::{Axis, Direction};
pub use error::SwipeError;
pub use geometry::{CanvasSize, ScreenPoint, ScreenRect};
pub use host::{
    CanvasEventSink, CanvasOverlay, CanvasTool, MapCanvas, MapLayer, PaintSurface, Snapshot,
    SubscriptionId, ToolSlot,
};
pub use session::SwipeSession;
pub use settings::{LineColor, SwipeSettings};

#[cfg(test)]
pub(crate) mod test_host;
