//! Routes UI changes into the active session and guards its lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use crate::direction::Direction;
use crate::error::SwipeError;
use crate::host::{CanvasTool, MapCanvas, MapLayer, ToolSlot};
use crate::session::SwipeSession;
use crate::settings::{LineColor, SwipeSettings};

/// Owns the swipe settings and at most one active [`SwipeSession`].
///
/// Every settings setter is safe to call with no session active (the
/// settings update, the session side is a no-op). The controller guarantees
/// that at most one layer carries an opacity override at any time: the
/// previous session's layer is fully restored before a new layer is touched.
pub struct SwipeController {
    canvas: Rc<dyn MapCanvas>,
    slot: Rc<dyn ToolSlot>,
    settings: SwipeSettings,
    active: Option<Rc<RefCell<SwipeSession>>>,
}

impl SwipeController {
    pub fn new(canvas: Rc<dyn MapCanvas>, slot: Rc<dyn ToolSlot>) -> Self {
        Self::with_settings(canvas, slot, SwipeSettings::default())
    }

    pub fn with_settings(
        canvas: Rc<dyn MapCanvas>,
        slot: Rc<dyn ToolSlot>,
        settings: SwipeSettings,
    ) -> Self {
        Self {
            canvas,
            slot,
            settings,
            active: None,
        }
    }

    pub fn settings(&self) -> &SwipeSettings {
        &self.settings
    }

    pub fn has_session(&self) -> bool {
        self.active.is_some()
    }

    /// The active session, for the shell to wire into render callbacks or
    /// status displays.
    pub fn session(&self) -> Option<&Rc<RefCell<SwipeSession>>> {
        self.active.as_ref()
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.settings.direction = direction;
        if let Some(session) = &self.active {
            session.borrow_mut().set_direction(direction);
        }
    }

    /// Set the line color; the configured line alpha is kept.
    pub fn set_line_color(&mut self, color: LineColor) {
        self.settings.set_line_color(color);
        self.push_line_style();
    }

    pub fn set_line_width(&mut self, width: u32) {
        self.settings.line_width = width;
        self.push_line_style();
    }

    /// Set the line alpha; the color's alpha channel follows.
    pub fn set_line_alpha(&mut self, alpha: u8) {
        self.settings.set_line_alpha(alpha);
        self.push_line_style();
    }

    /// Set the hidden-side layer opacity, `opacity` in [0, 1]. Applied to
    /// the active session's layer immediately.
    pub fn set_hidden_opacity(&mut self, opacity: f64) {
        self.settings.hidden_opacity = opacity;
        if let Some(session) = &self.active {
            session.borrow_mut().set_hidden_opacity(opacity);
        }
    }

    /// Start a session on `layer`, tearing down any existing session first
    /// (its layer is restored to full opacity before the new layer is
    /// touched).
    pub fn start_session(&mut self, layer: Option<Rc<dyn MapLayer>>) -> Result<(), SwipeError> {
        let layer = layer.ok_or(SwipeError::NoLayerSelected)?;
        self.end_session();

        let session = Rc::new(RefCell::new(SwipeSession::start(
            Rc::clone(&self.canvas),
            layer,
            &self.settings,
        )));
        let session_clone = Rc::clone(&session);
        let tool: Rc<RefCell<dyn CanvasTool>> = session_clone;
        self.slot.install(tool);
        self.active = Some(session);
        self.canvas.request_redraw();
        Ok(())
    }

    /// Tear down the active session and free the tool slot. Calling this
    /// with no session active is a no-op.
    pub fn end_session(&mut self) {
        if let Some(session) = self.active.take() {
            session.borrow_mut().teardown();
            self.slot.clear();
        }
    }

    fn push_line_style(&self) {
        if let Some(session) = &self.active {
            session
                .borrow_mut()
                .set_line_style(self.settings.line_color, self.settings.line_width);
        }
    }
}
