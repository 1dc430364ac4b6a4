//! Simulated host shell.
//!
//! Stands in for a real GIS embedding: a fake canvas, two fake layers, and
//! a tool slot, wired exactly the way a host would wire them. Runs a
//! scripted interaction — select a layer, start the tool, drag the split
//! line, flip the direction — and prints the layer opacities and the
//! recorded overlay frame after each step.

use std::cell::{Cell, RefCell};
use std::error::Error;
use std::rc::Rc;

use mapswipe_core::{
    CanvasEventSink, CanvasSize, CanvasTool, Direction, MapCanvas, MapLayer, ScreenPoint,
    Snapshot, SubscriptionId, SwipeController, SwipeError, ToolSlot,
};
use mapswipe_panel::{ControlPanel, PanelEvent};
use mapswipe_render::record_frame;

/// In-memory canvas. Captures return a flat-color raster; view-change
/// subscriptions are plain tokens.
struct SimCanvas {
    size: Cell<CanvasSize>,
    redraws: Cell<u32>,
    subscriptions: RefCell<Vec<SubscriptionId>>,
}

impl SimCanvas {
    fn new(size: CanvasSize) -> Self {
        Self {
            size: Cell::new(size),
            redraws: Cell::new(0),
            subscriptions: RefCell::new(Vec::new()),
        }
    }
}

impl MapCanvas for SimCanvas {
    fn size(&self) -> CanvasSize {
        self.size.get()
    }

    fn capture(&self) -> Result<Snapshot, SwipeError> {
        Ok(Snapshot::filled(self.size.get(), [90, 120, 90, 255]))
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

struct SimLayer {
    name: String,
    opacity: Cell<f64>,
}

impl SimLayer {
    fn rc(name: &str) -> Rc<Self> {
        Rc::new(Self {
            name: name.to_string(),
            opacity: Cell::new(1.0),
        })
    }
}

impl MapLayer for SimLayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_opacity(&self, opacity: f64) {
        self.opacity.set(opacity);
        log::debug!("layer '{}' opacity -> {opacity}", self.name);
    }

    fn trigger_repaint(&self) {
        log::debug!("layer '{}' repaint requested", self.name);
    }
}

#[derive(Default)]
struct SimToolSlot {
    installed: RefCell<Option<Rc<RefCell<dyn CanvasTool>>>>,
}

impl SimToolSlot {
    fn current(&self) -> Option<Rc<RefCell<dyn CanvasTool>>> {
        self.installed.borrow().clone()
    }
}

impl ToolSlot for SimToolSlot {
    fn install(&self, tool: Rc<RefCell<dyn CanvasTool>>) {
        *self.installed.borrow_mut() = Some(tool);
    }

    fn clear(&self) {
        *self.installed.borrow_mut() = None;
    }
}

fn print_opacities(layers: &[Rc<SimLayer>]) {
    for layer in layers {
        println!("  layer '{}': opacity {}", layer.name, layer.opacity.get());
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let canvas = Rc::new(SimCanvas::new(CanvasSize::new(800, 600)));
    let slot = Rc::new(SimToolSlot::default());
    let layers = vec![
        SimLayer::rc("aerial-2019"),
        SimLayer::rc("orthophoto-survey-2024"),
    ];

    let controller = SwipeController::new(
        Rc::clone(&canvas) as Rc<dyn MapCanvas>,
        Rc::clone(&slot) as Rc<dyn ToolSlot>,
    );
    let mut panel = ControlPanel::new(
        controller,
        layers
            .iter()
            .map(|l| Rc::clone(l) as Rc<dyn MapLayer>)
            .collect(),
    );

    println!("panel: {}", panel.status().message());
    for entry in panel.layers() {
        println!("  entry '{}'", entry.display_name);
    }

    // Compare the 2024 survey against the cached base, hidden side at 25%.
    panel.handle(PanelEvent::LayerSelected(1))?;
    panel.handle(PanelEvent::HiddenOpacityChanged(0.25))?;
    panel.handle(PanelEvent::StartPressed)?;
    println!("panel: {}", panel.status().message());

    // From here on the host event loop owns the tool: press, then drag the
    // split line toward the right edge.
    if let Some(tool) = slot.current() {
        let mut tool = tool.borrow_mut();
        tool.activated();
        tool.press(ScreenPoint::new(400, 300));
        tool.drag(ScreenPoint::new(650, 300));
        tool.drag(ScreenPoint::new(900, 300)); // past the edge, clamps to 800
    }
    println!("after dragging to the right edge:");
    print_opacities(&layers);
    println!("panel: {}", panel.status().message());

    if let Some(tool) = slot.current() {
        let frame = record_frame(&*tool.borrow(), canvas.size());
        println!("overlay frame: {}", serde_json::to_string_pretty(&frame)?);
    }

    // Release, then flip to a vertical comparison.
    if let Some(tool) = slot.current() {
        tool.borrow_mut().release(ScreenPoint::new(900, 300));
    }
    panel.handle(PanelEvent::DirectionChanged(Direction::Top))?;
    if let Some(tool) = slot.current() {
        let mut tool = tool.borrow_mut();
        tool.press(ScreenPoint::new(400, 0));
        tool.release(ScreenPoint::new(400, 0));
    }
    println!("after revealing the full layer (Top, line at y=0):");
    print_opacities(&layers);

    panel.handle(PanelEvent::ClosePressed)?;
    println!("panel closed:");
    print_opacities(&layers);
    println!("redraws requested: {}", canvas.redraws.get());

    Ok(())
}
