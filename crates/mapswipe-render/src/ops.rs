use serde::{Deserialize, Serialize};

use mapswipe_core::{
    CanvasOverlay, CanvasSize, LineColor, PaintSurface, ScreenPoint, ScreenRect, Snapshot,
};

/// A single overlay draw command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawOp {
    /// Draw the cached base snapshot at the canvas origin, clipped to
    /// `clip`.
    Image { clip: ScreenRect },
    /// Draw the separator line, unclipped.
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        color: LineColor,
        width: u32,
    },
}

/// One rendered overlay frame: ordered draw commands for a canvas of the
/// given size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub canvas: CanvasSize,
    pub ops: Vec<DrawOp>,
}

impl Frame {
    pub fn empty(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            ops: Vec::new(),
        }
    }
}

/// Records overlay painting into a [`Frame`].
#[derive(Debug)]
pub struct FrameRecorder {
    frame: Frame,
}

impl FrameRecorder {
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            frame: Frame::empty(canvas),
        }
    }

    pub fn into_frame(self) -> Frame {
        self.frame
    }
}

impl PaintSurface for FrameRecorder {
    fn draw_image(&mut self, _image: &Snapshot, clip: ScreenRect) {
        self.frame.ops.push(DrawOp::Image { clip });
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, color: LineColor, width: u32) {
        self.frame.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }
}

/// Render an overlay into a fresh frame.
pub fn record_frame(overlay: &dyn CanvasOverlay, canvas: CanvasSize) -> Frame {
    let mut recorder = FrameRecorder::new(canvas);
    overlay.render(&mut recorder);
    let frame = recorder.into_frame();
    log::debug!("recorded overlay frame with {} ops", frame.ops.len());
    frame
}
