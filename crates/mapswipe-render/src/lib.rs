//! # MapSwipe Render
//!
//! Frame-as-data for the swipe overlay: a [`FrameRecorder`] implements the
//! core `PaintSurface` and records the overlay's painting into an ordered,
//! serializable list of draw commands a frontend canvas can consume.
//!
//! Snapshot pixel payloads are deliberately not part of a frame — the
//! frontend already holds the captured raster; ops carry geometry and style
//! only.

pub mod ops;

pub use ops::{record_frame, DrawOp, Frame, FrameRecorder};
