use serde::{Deserialize, Serialize};

/// The side of the split line that reveals the live target layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Top,
    Bottom,
}

/// The axis the split line moves along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Right/Left swipes move the line horizontally, Top/Bottom vertically.
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Right | Direction::Left => Axis::Horizontal,
            Direction::Top | Direction::Bottom => Axis::Vertical,
        }
    }

    /// Display label for selection widgets.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Right => "Right",
            Direction::Left => "Left",
            Direction::Top => "Top",
            Direction::Bottom => "Bottom",
        }
    }

    /// All directions, in widget order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Top,
        Direction::Bottom,
    ];
}

impl Default for Direction {
    fn default() -> Self {
        Direction::Right
    }
}
