//! One active swipe comparison.
//!
//! A session owns the split position, the cached base snapshot, and the
//! opacity override on the target layer. It is created by the controller,
//! installed as the host's active tool, and lives until an explicit
//! [`SwipeSession::teardown`].

use std::rc::Rc;

use crate::direction::{Axis, Direction};
use crate::geometry::{clamp_to_extent, CanvasSize, ScreenPoint, ScreenRect};
use crate::host::{CanvasEventSink, CanvasOverlay, MapCanvas, MapLayer, PaintSurface, Snapshot, SubscriptionId};
use crate::settings::{LineColor, SwipeSettings};

/// The region of the cached base snapshot that stays visible, i.e. the side
/// of the split NOT covered by the live target layer.
pub fn visible_base_rect(split: u32, size: CanvasSize, direction: Direction) -> ScreenRect {
    let CanvasSize { width, height } = size;
    match direction {
        Direction::Right => ScreenRect::new(0, 0, split.min(width), height),
        Direction::Left => {
            let split = split.min(width);
            ScreenRect::new(split as i32, 0, width - split, height)
        }
        Direction::Top => {
            let split = split.min(height);
            ScreenRect::new(0, split as i32, width, height - split)
        }
        Direction::Bottom => ScreenRect::new(0, 0, width, split.min(height)),
    }
}

/// Target-layer opacity for a split position.
///
/// The mapping is binary: the layer renders fully opaque only with the line
/// at its revealing edge (split 0 for Right/Top, split == extent for
/// Left/Bottom); every other position uses the configured hidden-side
/// opacity. There is no interpolation across the drag.
pub fn layer_opacity_at(split: u32, extent: u32, direction: Direction, hidden: f64) -> f64 {
    match direction {
        Direction::Right | Direction::Top => {
            if split == 0 {
                1.0
            } else {
                hidden
            }
        }
        Direction::Left | Direction::Bottom => {
            if split >= extent {
                1.0
            } else {
                hidden
            }
        }
    }
}

/// One active swipe comparison over a host canvas and target layer.
///
/// Lifecycle: `Created -> Idle <-> Dragging -> Torn down`. Idle/Dragging
/// flips on press/release only; torn down is terminal and reached only via
/// [`SwipeSession::teardown`]. After teardown every event is ignored.
pub struct SwipeSession {
    canvas: Rc<dyn MapCanvas>,
    layer: Rc<dyn MapLayer>,
    direction: Direction,
    line_color: LineColor,
    line_width: u32,
    hidden_opacity: f64,
    /// Split position in pixels along the active axis, always in
    /// `[0, extent]`.
    split: u32,
    cached: Option<Snapshot>,
    dragging: bool,
    last_cursor: Option<ScreenPoint>,
    subscription: Option<SubscriptionId>,
    torn_down: bool,
}

impl SwipeSession {
    /// Start a session: the split opens at the midpoint of the active axis
    /// and the base snapshot is captured from the current canvas state.
    ///
    /// A failed capture is not fatal; the base side stays empty until the
    /// next view change re-captures.
    pub fn start(
        canvas: Rc<dyn MapCanvas>,
        layer: Rc<dyn MapLayer>,
        settings: &SwipeSettings,
    ) -> Self {
        let split = canvas.size().midpoint_along(settings.direction.axis());
        let subscription = Some(canvas.subscribe_view_changes());
        let cached = match canvas.capture() {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log::warn!("base snapshot capture failed: {err}");
                None
            }
        };
        log::info!(
            "swipe session started on layer '{}', direction {:?}, split {split}",
            layer.name(),
            settings.direction
        );
        Self {
            canvas,
            layer,
            direction: settings.direction,
            line_color: settings.line_color,
            line_width: settings.line_width,
            hidden_opacity: settings.hidden_opacity,
            split,
            cached,
            dragging: false,
            last_cursor: None,
            subscription,
            torn_down: false,
        }
    }

    /// Move the split to the cursor. Starts a drag on the first call.
    pub fn press_or_drag(&mut self, cursor: ScreenPoint) {
        if self.torn_down {
            return;
        }
        self.dragging = true;
        let axis = self.direction.axis();
        let extent = self.canvas.size().extent_along(axis);
        self.split = clamp_to_extent(cursor.component_along(axis), extent);
        self.last_cursor = Some(cursor);
        self.apply_layer_opacity();
        self.canvas.request_redraw();
    }

    /// Stop dragging. The split stays where it was released.
    pub fn end_drag(&mut self) {
        self.dragging = false;
        self.last_cursor = None;
    }

    /// Re-capture the base snapshot after a pan/zoom. The stale cache is
    /// dropped even when the capture fails.
    pub fn refresh_cache(&mut self) {
        if self.torn_down {
            return;
        }
        self.cached = match self.canvas.capture() {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                log::warn!("base snapshot re-capture failed: {err}");
                None
            }
        };
    }

    /// Change direction: the axis is re-derived and the split resets to the
    /// new axis midpoint.
    pub fn set_direction(&mut self, direction: Direction) {
        if self.torn_down {
            return;
        }
        self.direction = direction;
        self.split = self.canvas.size().midpoint_along(direction.axis());
        self.canvas.request_redraw();
    }

    pub fn set_line_style(&mut self, color: LineColor, width: u32) {
        self.line_color = color;
        self.line_width = width;
        self.canvas.request_redraw();
    }

    /// Change the hidden-side opacity and apply it immediately for the
    /// current split position.
    pub fn set_hidden_opacity(&mut self, opacity: f64) {
        if self.torn_down {
            return;
        }
        self.hidden_opacity = opacity;
        self.apply_layer_opacity();
    }

    /// Restore the target layer, release the cache and subscription, and
    /// mark the session terminal. Safe to call more than once.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.layer.set_opacity(1.0);
        self.layer.trigger_repaint();
        if let Some(id) = self.subscription.take() {
            self.canvas.unsubscribe_view_changes(id);
        }
        self.cached = None;
        self.dragging = false;
        self.last_cursor = None;
        self.canvas.request_redraw();
        log::info!("swipe session torn down, layer '{}' restored", self.layer.name());
    }

    fn apply_layer_opacity(&self) {
        let extent = self.canvas.size().extent_along(self.direction.axis());
        let opacity = layer_opacity_at(self.split, extent, self.direction, self.hidden_opacity);
        self.layer.set_opacity(opacity);
        self.layer.trigger_repaint();
    }

    pub fn split(&self) -> u32 {
        self.split
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn hidden_opacity(&self) -> f64 {
        self.hidden_opacity
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn last_cursor(&self) -> Option<ScreenPoint> {
        self.last_cursor
    }

    pub fn has_cache(&self) -> bool {
        self.cached.is_some()
    }
}

impl CanvasEventSink for SwipeSession {
    fn activated(&mut self) {
        log::debug!("swipe tool activated");
    }

    fn deactivated(&mut self) {
        // Teardown stays an explicit controller decision.
        log::debug!("swipe tool deactivated");
    }

    fn press(&mut self, pos: ScreenPoint) {
        self.press_or_drag(pos);
    }

    fn drag(&mut self, pos: ScreenPoint) {
        // Hover moves without a held button don't move the line.
        if self.dragging {
            self.press_or_drag(pos);
        }
    }

    fn release(&mut self, _pos: ScreenPoint) {
        self.end_drag();
    }

    fn view_changed(&mut self) {
        self.refresh_cache();
    }
}

impl CanvasOverlay for SwipeSession {
    fn render(&self, surface: &mut dyn PaintSurface) {
        if self.torn_down {
            return;
        }
        let size = self.canvas.size();
        if let Some(snapshot) = &self.cached {
            surface.draw_image(snapshot, visible_base_rect(self.split, size, self.direction));
        }
        let split = self.split as i32;
        let (from, to) = match self.direction.axis() {
            Axis::Horizontal => (
                ScreenPoint::new(split, 0),
                ScreenPoint::new(split, size.height as i32),
            ),
            Axis::Vertical => (
                ScreenPoint::new(0, split),
                ScreenPoint::new(size.width as i32, split),
            ),
        };
        surface.draw_line(from, to, self.line_color, self.line_width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::{FakeCanvas, FakeLayer, RecordingSurface, SurfaceOp};

    fn session_with(
        canvas: &Rc<FakeCanvas>,
        layer: &Rc<FakeLayer>,
        settings: SwipeSettings,
    ) -> SwipeSession {
        SwipeSession::start(
            Rc::clone(canvas) as Rc<dyn MapCanvas>,
            Rc::clone(layer) as Rc<dyn MapLayer>,
            &settings,
        )
    }

    #[test]
    fn test_base_rect_all_directions() {
        let size = CanvasSize::new(800, 600);
        assert_eq!(
            visible_base_rect(300, size, Direction::Right),
            ScreenRect::new(0, 0, 300, 600)
        );
        assert_eq!(
            visible_base_rect(300, size, Direction::Left),
            ScreenRect::new(300, 0, 500, 600)
        );
        assert_eq!(
            visible_base_rect(300, size, Direction::Top),
            ScreenRect::new(0, 300, 800, 300)
        );
        assert_eq!(
            visible_base_rect(300, size, Direction::Bottom),
            ScreenRect::new(0, 0, 800, 300)
        );
    }

    #[test]
    fn test_base_rect_contained_for_all_splits() {
        let size = CanvasSize::new(800, 600);
        for direction in Direction::ALL {
            let extent = size.extent_along(direction.axis());
            for split in [0, 1, extent / 2, extent - 1, extent] {
                let rect = visible_base_rect(split, size, direction);
                assert!(
                    rect.contained_in(size),
                    "{direction:?} split {split} -> {rect:?}"
                );
            }
        }
    }

    #[test]
    fn test_opacity_is_binary() {
        let hidden = 0.25;
        for direction in Direction::ALL {
            for split in [0, 1, 399, 400, 799, 800] {
                let opacity = layer_opacity_at(split, 800, direction, hidden);
                assert!(
                    opacity == 1.0 || opacity == hidden,
                    "{direction:?} split {split} -> {opacity}"
                );
            }
        }
    }

    #[test]
    fn test_opacity_edges() {
        // Right/Top reveal at 0, Left/Bottom at the far edge.
        assert_eq!(layer_opacity_at(0, 800, Direction::Right, 0.0), 1.0);
        assert_eq!(layer_opacity_at(800, 800, Direction::Right, 0.0), 0.0);
        assert_eq!(layer_opacity_at(0, 800, Direction::Left, 0.0), 0.0);
        assert_eq!(layer_opacity_at(800, 800, Direction::Left, 0.0), 1.0);
        assert_eq!(layer_opacity_at(0, 600, Direction::Top, 0.5), 1.0);
        assert_eq!(layer_opacity_at(600, 600, Direction::Top, 0.5), 0.5);
        assert_eq!(layer_opacity_at(0, 600, Direction::Bottom, 0.5), 0.5);
        assert_eq!(layer_opacity_at(600, 600, Direction::Bottom, 0.5), 1.0);
    }

    #[test]
    fn test_start_opens_at_midpoint() {
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        let layer = FakeLayer::rc("ortho");
        let session = session_with(&canvas, &layer, SwipeSettings::default());
        assert_eq!(session.split(), 400);
        assert!(session.has_cache());
        assert!(!session.is_dragging());
        assert_eq!(canvas.subscription_count(), 1);

        let mut settings = SwipeSettings::default();
        settings.direction = Direction::Top;
        let vertical = session_with(&canvas, &layer, settings);
        assert_eq!(vertical.split(), 300);
    }

    #[test]
    fn test_press_clamps_out_of_range_cursor() {
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        let layer = FakeLayer::rc("ortho");
        let mut session = session_with(&canvas, &layer, SwipeSettings::default());

        session.press_or_drag(ScreenPoint::new(-200, 40));
        assert_eq!(session.split(), 0);
        session.press_or_drag(ScreenPoint::new(4000, 40));
        assert_eq!(session.split(), 800);
    }

    #[test]
    fn test_drag_to_edges_drives_opacity() {
        // Direction Right, width 800: x=800 hides, x=0 reveals.
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        let layer = FakeLayer::rc("ortho");
        let mut session = session_with(&canvas, &layer, SwipeSettings::default());

        session.press_or_drag(ScreenPoint::new(800, 100));
        assert_eq!(layer.opacity(), 0.0);
        session.press_or_drag(ScreenPoint::new(250, 100));
        assert_eq!(layer.opacity(), 0.0);
        session.press_or_drag(ScreenPoint::new(0, 100));
        assert_eq!(layer.opacity(), 1.0);
        // Every opacity write also asked the layer to repaint.
        assert_eq!(layer.repaint_count(), 3);
    }

    #[test]
    fn test_release_keeps_split() {
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        let layer = FakeLayer::rc("ortho");
        let mut session = session_with(&canvas, &layer, SwipeSettings::default());

        session.press(ScreenPoint::new(123, 50));
        assert!(session.is_dragging());
        session.release(ScreenPoint::new(123, 50));
        assert!(!session.is_dragging());
        assert_eq!(session.split(), 123);
        assert_eq!(session.last_cursor(), None);
    }

    #[test]
    fn test_hover_move_does_not_drag() {
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        let layer = FakeLayer::rc("ortho");
        let mut session = session_with(&canvas, &layer, SwipeSettings::default());

        session.drag(ScreenPoint::new(700, 50));
        assert_eq!(session.split(), 400);
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_direction_change_resets_to_midpoint() {
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        let layer = FakeLayer::rc("ortho");
        let mut session = session_with(&canvas, &layer, SwipeSettings::default());

        session.press_or_drag(ScreenPoint::new(700, 50));
        session.set_direction(Direction::Bottom);
        assert_eq!(session.direction(), Direction::Bottom);
        assert_eq!(session.split(), 300);
    }

    #[test]
    fn test_hidden_opacity_change_applies_immediately() {
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        let layer = FakeLayer::rc("ortho");
        let mut session = session_with(&canvas, &layer, SwipeSettings::default());

        session.press_or_drag(ScreenPoint::new(400, 50));
        assert_eq!(layer.opacity(), 0.0);
        session.set_hidden_opacity(0.5);
        assert_eq!(layer.opacity(), 0.5);
    }

    #[test]
    fn test_capture_failure_is_nonfatal_and_retried() {
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        canvas.fail_captures(true);
        let layer = FakeLayer::rc("ortho");
        let mut session = session_with(&canvas, &layer, SwipeSettings::default());
        assert!(!session.has_cache());

        // Render degrades to the separator line only.
        let mut surface = RecordingSurface::default();
        session.render(&mut surface);
        assert_eq!(surface.ops.len(), 1);
        assert!(matches!(surface.ops[0], SurfaceOp::Line { .. }));

        canvas.fail_captures(false);
        session.view_changed();
        assert!(session.has_cache());
    }

    #[test]
    fn test_view_change_recaptures() {
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        let layer = FakeLayer::rc("ortho");
        let mut session = session_with(&canvas, &layer, SwipeSettings::default());
        assert_eq!(canvas.capture_count(), 1);
        session.view_changed();
        assert_eq!(canvas.capture_count(), 2);
        assert!(session.has_cache());
    }

    #[test]
    fn test_render_clips_base_and_draws_line() {
        // Direction Top, press at y=300: base rect (0,300,800,300), line
        // across the full width at y=300.
        let mut settings = SwipeSettings::default();
        settings.direction = Direction::Top;
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        let layer = FakeLayer::rc("ortho");
        let mut session = session_with(&canvas, &layer, settings);
        session.press_or_drag(ScreenPoint::new(500, 300));

        let mut surface = RecordingSurface::default();
        session.render(&mut surface);
        assert_eq!(
            surface.ops,
            vec![
                SurfaceOp::Image {
                    clip: ScreenRect::new(0, 300, 800, 300),
                },
                SurfaceOp::Line {
                    from: ScreenPoint::new(0, 300),
                    to: ScreenPoint::new(800, 300),
                    width: 3,
                },
            ]
        );
    }

    #[test]
    fn test_teardown_restores_layer_and_unsubscribes() {
        let canvas = FakeCanvas::rc(CanvasSize::new(800, 600));
        let layer = FakeLayer::rc("ortho");
        let mut session = session_with(&canvas, &layer, SwipeSettings::default());
        session.press_or_drag(ScreenPoint::new(400, 50));
        assert_eq!(layer.opacity(), 0.0);

        session.teardown();
        assert_eq!(layer.opacity(), 1.0);
        assert_eq!(canvas.subscription_count(), 0);
        assert!(session.is_torn_down());
        assert!(!session.has_cache());
        assert!(canvas.redraw_count() >= 2);

        // Terminal: repeated teardown and late events change nothing.
        session.teardown();
        session.press_or_drag(ScreenPoint::new(0, 0));
        assert_eq!(layer.opacity(), 1.0);
        assert_eq!(session.split(), 400);
    }
}
