//! Fixed option lists for the panel's selector widgets.
//!
//! Shells that build real widgets populate their combo boxes from these
//! tables; the alpha applied to a picked line color always comes from the
//! controller's current line-alpha setting, not from the preset.

use mapswipe_core::LineColor;

/// Line color choices, in widget order. A shell may append its own
/// "custom color" entry backed by a color dialog.
pub const LINE_COLORS: [LineColor; 6] = [
    LineColor::rgb(255, 0, 0),
    LineColor::rgb(0, 255, 0),
    LineColor::rgb(0, 0, 255),
    LineColor::rgb(255, 255, 0),
    LineColor::rgb(255, 255, 255),
    LineColor::rgb(0, 0, 0),
];

/// Line width choices in pixels.
pub const LINE_WIDTHS_PX: [u32; 8] = [1, 2, 3, 4, 5, 6, 8, 10];

/// Default widget position: 3 px.
pub const DEFAULT_LINE_WIDTH_INDEX: usize = 2;

/// Line alpha steps: 100%, 75%, 50%, 25%, 0%.
pub const LINE_ALPHA_STEPS: [u8; 5] = [255, 191, 128, 64, 0];

/// Default widget position: 50%.
pub const DEFAULT_LINE_ALPHA_INDEX: usize = 2;

/// Hidden-side layer opacity steps: 100% down to fully hidden.
pub const HIDDEN_OPACITY_STEPS: [f64; 5] = [1.0, 0.75, 0.5, 0.25, 0.0];

/// Default widget position: 0%, the layer disappears on its hidden side.
pub const DEFAULT_HIDDEN_OPACITY_INDEX: usize = 4;
