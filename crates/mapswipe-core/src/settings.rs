use serde::{Deserialize, Serialize};

use crate::direction::Direction;

/// RGBA color of the separator line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for LineColor {
    fn default() -> Self {
        Self {
            r: 255,
            g: 0,
            b: 0,
            a: 200,
        }
    }
}

impl LineColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.a = alpha;
        self
    }

    pub fn to_f32_array(&self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        ]
    }
}

/// Current swipe-tool settings.
///
/// Owned by the controller; copied into a session at session start and
/// live-patched on widget changes thereafter. `line_alpha` is mirrored into
/// the line color's alpha channel so the two never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwipeSettings {
    pub direction: Direction,
    pub line_color: LineColor,
    /// Separator line width in pixels.
    pub line_width: u32,
    /// Separator line opacity, 0-255.
    pub line_alpha: u8,
    /// Opacity applied to the target layer on its hidden side, in [0, 1].
    pub hidden_opacity: f64,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            direction: Direction::Right,
            line_color: LineColor::default(),
            line_width: 3,
            line_alpha: 200,
            hidden_opacity: 0.0,
        }
    }
}

impl SwipeSettings {
    /// Set the line color, keeping the configured line alpha.
    pub fn set_line_color(&mut self, color: LineColor) {
        self.line_color = color.with_alpha(self.line_alpha);
    }

    /// Set the line alpha and propagate it into the color channel.
    pub fn set_line_alpha(&mut self, alpha: u8) {
        self.line_alpha = alpha;
        self.line_color.a = alpha;
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SwipeSettings::default();
        assert_eq!(settings.direction, Direction::Right);
        assert_eq!(settings.line_width, 3);
        assert_eq!(settings.line_alpha, 200);
        assert_eq!(settings.line_color, LineColor::rgba(255, 0, 0, 200));
        assert_eq!(settings.hidden_opacity, 0.0);
    }

    #[test]
    fn test_alpha_stays_in_sync() {
        let mut settings = SwipeSettings::default();
        settings.set_line_color(LineColor::rgb(0, 0, 255));
        assert_eq!(settings.line_color.a, 200);

        settings.set_line_alpha(64);
        assert_eq!(settings.line_alpha, 64);
        assert_eq!(settings.line_color, LineColor::rgba(0, 0, 255, 64));
    }

    #[test]
    fn test_json_roundtrip() {
        let mut settings = SwipeSettings::default();
        settings.direction = Direction::Top;
        settings.set_line_alpha(128);
        settings.hidden_opacity = 0.25;

        let json = settings.to_json().unwrap();
        let restored = SwipeSettings::from_json(&json).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_color_to_f32() {
        let c = LineColor::rgba(255, 0, 0, 255).to_f32_array();
        assert!((c[0] - 1.0).abs() < 1e-6);
        assert!((c[1] - 0.0).abs() < 1e-6);
        assert!((c[3] - 1.0).abs() < 1e-6);
    }
}
