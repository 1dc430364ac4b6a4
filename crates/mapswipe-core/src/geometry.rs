use serde::{Deserialize, Serialize};

use crate::direction::Axis;

/// A cursor position in canvas pixel coordinates.
///
/// Event positions can land outside the canvas while the mouse button is
/// held, so components may be negative or exceed the canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The component of this point along the given axis.
    pub fn component_along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The canvas extent along the given axis (width or height).
    pub fn extent_along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// The midpoint of the extent along the given axis.
    pub fn midpoint_along(&self, axis: Axis) -> u32 {
        self.extent_along(axis) / 2
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An axis-aligned rectangle in canvas pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl ScreenRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether this rectangle lies entirely within a canvas of the given size.
    pub fn contained_in(&self, size: CanvasSize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.right() <= size.width as i32
            && self.bottom() <= size.height as i32
    }
}

/// Pin a cursor component to the valid split range `[0, extent]`.
pub fn clamp_to_extent(value: i32, extent: u32) -> u32 {
    if value <= 0 {
        0
    } else {
        (value as u32).min(extent)
    }
}
