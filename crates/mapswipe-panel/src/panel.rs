use std::rc::Rc;

use serde::Serialize;
use uuid::Uuid;

use mapswipe_core::{Direction, LineColor, MapLayer, SwipeController, SwipeError};

/// Display names longer than this are shortened for the layer selector.
const MAX_DISPLAY_NAME: usize = 15;

/// A change notification from a host widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    /// The layer selector moved to the entry at this index.
    LayerSelected(usize),
    DirectionChanged(Direction),
    LineColorPicked(LineColor),
    LineWidthChanged(u32),
    LineAlphaChanged(u8),
    HiddenOpacityChanged(f64),
    StartPressed,
    ClosePressed,
}

/// Panel state for status displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PanelStatus {
    NoLayers,
    Ready,
    Active { direction: Direction },
    Dragging { hidden_opacity: f64 },
    Error { message: String },
}

impl PanelStatus {
    /// Human-readable status line.
    pub fn message(&self) -> String {
        match self {
            PanelStatus::NoLayers => "No layers available".to_string(),
            PanelStatus::Ready => "Ready".to_string(),
            PanelStatus::Active { direction } => {
                format!("Active - Direction: {}", direction.label())
            }
            PanelStatus::Dragging { hidden_opacity } => {
                format!("Dragging - Layer Opacity: {}%", (hidden_opacity * 100.0) as u32)
            }
            PanelStatus::Error { message } => format!("Error: {message}"),
        }
    }
}

/// One selectable layer in the panel.
pub struct LayerEntry {
    pub id: Uuid,
    /// Shortened name for the selector widget.
    pub display_name: String,
    pub handle: Rc<dyn MapLayer>,
}

/// Widget-toolkit-independent control panel state.
pub struct ControlPanel {
    controller: SwipeController,
    layers: Vec<LayerEntry>,
    selected: Option<usize>,
    last_error: Option<String>,
}

impl ControlPanel {
    /// Build the panel over the host's layer list. The first layer starts
    /// selected, matching the selector widget's initial position.
    pub fn new(controller: SwipeController, layers: Vec<Rc<dyn MapLayer>>) -> Self {
        let layers: Vec<LayerEntry> = layers
            .into_iter()
            .map(|handle| LayerEntry {
                id: Uuid::new_v4(),
                display_name: truncate_name(handle.name()),
                handle,
            })
            .collect();
        let selected = if layers.is_empty() { None } else { Some(0) };
        Self {
            controller,
            layers,
            selected,
            last_error: None,
        }
    }

    pub fn layers(&self) -> &[LayerEntry] {
        &self.layers
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn controller(&self) -> &SwipeController {
        &self.controller
    }

    /// Route one widget event into the controller.
    ///
    /// Errors are also kept as panel state (see [`ControlPanel::status`]) so
    /// the shell can show a dialog and leave the panel open.
    pub fn handle(&mut self, event: PanelEvent) -> Result<(), SwipeError> {
        match event {
            PanelEvent::LayerSelected(index) => {
                if index >= self.layers.len() {
                    log::warn!("layer index {index} out of range, ignoring");
                    return Ok(());
                }
                self.selected = Some(index);
                // Switching layers stops the running comparison; the old
                // layer's opacity is restored before anything else happens.
                self.controller.end_session();
                self.last_error = None;
                Ok(())
            }
            PanelEvent::DirectionChanged(direction) => {
                self.controller.set_direction(direction);
                Ok(())
            }
            PanelEvent::LineColorPicked(color) => {
                self.controller.set_line_color(color);
                Ok(())
            }
            PanelEvent::LineWidthChanged(width) => {
                self.controller.set_line_width(width);
                Ok(())
            }
            PanelEvent::LineAlphaChanged(alpha) => {
                self.controller.set_line_alpha(alpha);
                Ok(())
            }
            PanelEvent::HiddenOpacityChanged(opacity) => {
                self.controller.set_hidden_opacity(opacity);
                Ok(())
            }
            PanelEvent::StartPressed => {
                let layer = self
                    .selected
                    .and_then(|index| self.layers.get(index))
                    .map(|entry| Rc::clone(&entry.handle));
                match self.controller.start_session(layer) {
                    Ok(()) => {
                        self.last_error = None;
                        Ok(())
                    }
                    Err(err) => {
                        self.last_error = Some(err.to_string());
                        Err(err)
                    }
                }
            }
            PanelEvent::ClosePressed => {
                self.controller.end_session();
                self.last_error = None;
                Ok(())
            }
        }
    }

    /// Current status, computed from live panel and session state.
    pub fn status(&self) -> PanelStatus {
        if let Some(message) = &self.last_error {
            return PanelStatus::Error {
                message: message.clone(),
            };
        }
        if let Some(session) = self.controller.session() {
            let session = session.borrow();
            if session.is_dragging() {
                return PanelStatus::Dragging {
                    hidden_opacity: session.hidden_opacity(),
                };
            }
            return PanelStatus::Active {
                direction: session.direction(),
            };
        }
        if self.layers.is_empty() {
            return PanelStatus::NoLayers;
        }
        PanelStatus::Ready
    }
}

/// Shorten a layer name for the selector widget.
fn truncate_name(name: &str) -> String {
    if name.chars().count() > MAX_DISPLAY_NAME {
        let short: String = name.chars().take(MAX_DISPLAY_NAME - 3).collect();
        format!("{short}...")
    } else {
        name.to_string()
    }
}
