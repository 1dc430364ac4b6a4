//! Fake host implementations shared by the session and controller tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::SwipeError;
use crate::geometry::{CanvasSize, ScreenPoint, ScreenRect};
use crate::host::{
    CanvasTool, MapCanvas, MapLayer, PaintSurface, Snapshot, SubscriptionId, ToolSlot,
};
use crate::settings::LineColor;

pub(crate) struct FakeCanvas {
    size: Cell<CanvasSize>,
    fail_captures: Cell<bool>,
    captures: Cell<u32>,
    redraws: Cell<u32>,
    subscriptions: RefCell<Vec<SubscriptionId>>,
}

impl FakeCanvas {
    pub fn rc(size: CanvasSize) -> Rc<Self> {
        Rc::new(Self {
            size: Cell::new(size),
            fail_captures: Cell::new(false),
            captures: Cell::new(0),
            redraws: Cell::new(0),
            subscriptions: RefCell::new(Vec::new()),
        })
    }

    pub fn fail_captures(&self, fail: bool) {
        self.fail_captures.set(fail);
    }

    pub fn capture_count(&self) -> u32 {
        self.captures.get()
    }

    pub fn redraw_count(&self) -> u32 {
        self.redraws.get()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.borrow().len()
    }
}

impl MapCanvas for FakeCanvas {
    fn size(&self) -> CanvasSize {
        self.size.get()
    }

    fn capture(&self) -> Result<Snapshot, SwipeError> {
        self.captures.set(self.captures.get() + 1);
        if self.fail_captures.get() {
            return Err(SwipeError::SnapshotUnavailable("capture disabled".into()));
        }
        Ok(Snapshot::filled(self.size.get(), [10, 20, 30, 255]))
    }

    fn request_redraw(&self) {
        self.redraws.set(self.redraws.get() + 1);
    }

    fn subscribe_view_changes(&self) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.subscriptions.borrow_mut().push(id);
        id
    }

    fn unsubscribe_view_changes(&self, id: SubscriptionId) {
        self.subscriptions.borrow_mut().retain(|s| *s != id);
    }
}

pub(crate) struct FakeLayer {
    name: String,
    opacity: Cell<f64>,
    repaints: Cell<u32>,
}

impl FakeLayer {
    pub fn rc(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            opacity: Cell::new(1.0),
            repaints: Cell::new(0),
        })
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.get()
    }

    pub fn repaint_count(&self) -> u32 {
        self.repaints.get()
    }
}

impl MapLayer for FakeLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_opacity(&self, opacity: f64) {
        self.opacity.set(opacity);
    }

    fn trigger_repaint(&self) {
        self.repaints.set(self.repaints.get() + 1);
    }
}

#[derive(Default)]
pub(crate) struct FakeSlot {
    installed: RefCell<Option<Rc<RefCell<dyn CanvasTool>>>>,
}

impl FakeSlot {
    pub fn rc() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn is_installed(&self) -> bool {
        self.installed.borrow().is_some()
    }
}

impl ToolSlot for FakeSlot {
    fn install(&self, tool: Rc<RefCell<dyn CanvasTool>>) {
        *self.installed.borrow_mut() = Some(tool);
    }

    fn clear(&self) {
        *self.installed.borrow_mut() = None;
    }
}

/// Painting ops without pixel payloads or colors, for easy comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SurfaceOp {
    Image {
        clip: ScreenRect,
    },
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        width: u32,
    },
}

#[derive(Default)]
pub(crate) struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl PaintSurface for RecordingSurface {
    fn draw_image(&mut self, _image: &Snapshot, clip: ScreenRect) {
        self.ops.push(SurfaceOp::Image { clip });
    }

    fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, _color: LineColor, width: u32) {
        self.ops.push(SurfaceOp::Line { from, to, width });
    }
}
