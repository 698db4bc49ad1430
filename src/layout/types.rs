use serde::Serialize;

use super::scale::LogScale;

#[derive(Debug, Clone, Serialize)]
pub struct TextBlock {
    pub text: String,
    pub width: f32,
    pub height: f32,
}

/// One rule of the log ruler.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridLine {
    pub years_ago: f64,
    pub y: f32,
    pub is_major: bool,
    pub label: Option<String>,
}

/// Filled square marking an event on the axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marker {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// Line from the axis to the label. `Straight` when the label sits at its
/// natural height; otherwise a flat-diagonal-flat elbow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "points", rename_all = "snake_case")]
pub enum Connector {
    Straight([(f32, f32); 2]),
    Elbow([(f32, f32); 4]),
}

impl Connector {
    pub fn points(&self) -> &[(f32, f32)] {
        match self {
            Connector::Straight(points) => points,
            Connector::Elbow(points) => points,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EventPlacement {
    pub title: String,
    pub years_ago: f64,
    /// `"<title> (<years ago>)"`
    pub label: TextBlock,
    /// True position on the axis
    pub axis_y: f32,
    /// Label position after decluttering; `>= axis_y`
    pub label_y: f32,
    pub label_x: f32,
    pub marker: Marker,
    pub connector: Connector,
}

impl EventPlacement {
    pub fn is_displaced(&self) -> bool {
        self.label_y != self.axis_y
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimelineLayout {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub axis_x: f32,
    /// Horizontal span of every gridline
    pub grid_x1: f32,
    pub grid_x2: f32,
    pub scale: LogScale,
    pub gridlines: Vec<GridLine>,
    pub events: Vec<EventPlacement>,
}
