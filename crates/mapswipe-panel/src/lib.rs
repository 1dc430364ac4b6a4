//! # MapSwipe Panel
//!
//! Control-panel logic, independent of any widget toolkit. The embedding
//! shell builds the actual widgets and forwards their change notifications
//! as [`PanelEvent`]s; the panel routes them into the controller and keeps
//! the layer registry and status text.
//!
//! The panel is an explicit session object: the shell creates it, feeds it
//! events, and drops it on close. There is no global instance.

pub mod panel;
pub mod presets;

pub use panel::{ControlPanel, LayerEntry, PanelEvent, PanelStatus};
