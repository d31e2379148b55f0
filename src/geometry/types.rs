//! Core types for the seat geometry calculator

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Largest number of seats a single table can carry
pub const MAX_TABLE_CAPACITY: u32 = 32;

/// Clamp a requested capacity into the supported `1..=32` range
pub fn clamp_capacity(capacity: u32) -> u32 {
    capacity.clamp(1, MAX_TABLE_CAPACITY)
}

/// A 2D point in the coordinate system (Y axis pointing down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Outline of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableShape {
    Circle,
    Square,
    Rectangle,
    Oval,
}

impl TableShape {
    /// Arrangement styles that produce a distinct layout for this shape
    pub fn supported_styles(&self) -> &'static [SeatArrangementStyle] {
        match self {
            TableShape::Rectangle => &[
                SeatArrangementStyle::Even,
                SeatArrangementStyle::SideSplit,
                SeatArrangementStyle::LongSidesOnly,
            ],
            TableShape::Circle | TableShape::Square | TableShape::Oval => {
                &[SeatArrangementStyle::Even]
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableShape::Circle => "circle",
            TableShape::Square => "square",
            TableShape::Rectangle => "rectangle",
            TableShape::Oval => "oval",
        }
    }
}

impl fmt::Display for TableShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TableShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "circle" | "round" => Ok(TableShape::Circle),
            "square" => Ok(TableShape::Square),
            "rectangle" | "rect" => Ok(TableShape::Rectangle),
            "oval" => Ok(TableShape::Oval),
            other => Err(format!(
                "unknown table shape '{}' (expected circle, square, rectangle or oval)",
                other
            )),
        }
    }
}

/// How seats are distributed around a table
///
/// `Custom` seeds the same positions as `Even`; callers are expected to
/// hand-edit the result and persist it themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeatArrangementStyle {
    #[default]
    Even,
    SideSplit,
    LongSidesOnly,
    Custom,
}

impl SeatArrangementStyle {
    /// The style actually used when laying out `shape`.
    ///
    /// Unsupported pairs and `Custom` collapse to `Even`.
    pub fn resolve_for(self, shape: TableShape) -> SeatArrangementStyle {
        if self == SeatArrangementStyle::Custom || !shape.supported_styles().contains(&self) {
            SeatArrangementStyle::Even
        } else {
            self
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatArrangementStyle::Even => "even",
            SeatArrangementStyle::SideSplit => "side-split",
            SeatArrangementStyle::LongSidesOnly => "long-sides-only",
            SeatArrangementStyle::Custom => "custom",
        }
    }
}

impl fmt::Display for SeatArrangementStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeatArrangementStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "even" => Ok(SeatArrangementStyle::Even),
            "side-split" => Ok(SeatArrangementStyle::SideSplit),
            "long-sides-only" => Ok(SeatArrangementStyle::LongSidesOnly),
            "custom" => Ok(SeatArrangementStyle::Custom),
            other => Err(format!("unknown arrangement style '{}'", other)),
        }
    }
}

/// Side tag attached to seats by the side-split style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatSide {
    Bride,
    Groom,
    Head,
    Foot,
}

impl SeatSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeatSide::Bride => "bride",
            SeatSide::Groom => "groom",
            SeatSide::Head => "head",
            SeatSide::Foot => "foot",
        }
    }
}

/// One seat, positioned relative to the table center.
///
/// `relative_x`/`relative_y` are fractions of the table's width/height, so a
/// value of 0.5 lies exactly on the table edge. `angle` is in degrees with 0
/// meaning the seat's back faces the top edge, increasing clockwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeatPosition {
    pub seat_number: u32,
    pub relative_x: f64,
    pub relative_y: f64,
    pub angle: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<SeatSide>,
}

impl SeatPosition {
    pub fn new(seat_number: u32, relative_x: f64, relative_y: f64, angle: f64) -> Self {
        Self {
            seat_number,
            relative_x,
            relative_y,
            angle,
            side: None,
        }
    }

    pub fn with_side(mut self, side: SeatSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Relative position as a point
    pub fn relative(&self) -> Point {
        Point::new(self.relative_x, self.relative_y)
    }

    /// Short label shown next to the seat glyph
    pub fn label(&self) -> String {
        match self.side {
            Some(side) => format!("{} {}", side.as_str(), self.seat_number),
            None => self.seat_number.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_capacity() {
        assert_eq!(clamp_capacity(0), 1);
        assert_eq!(clamp_capacity(12), 12);
        assert_eq!(clamp_capacity(40), MAX_TABLE_CAPACITY);
    }

    #[test]
    fn test_style_resolution() {
        use SeatArrangementStyle::*;
        assert_eq!(SideSplit.resolve_for(TableShape::Rectangle), SideSplit);
        assert_eq!(LongSidesOnly.resolve_for(TableShape::Rectangle), LongSidesOnly);
        assert_eq!(SideSplit.resolve_for(TableShape::Circle), Even);
        assert_eq!(LongSidesOnly.resolve_for(TableShape::Square), Even);
        assert_eq!(Custom.resolve_for(TableShape::Rectangle), Even);
    }

    #[test]
    fn test_parse_shape_and_style() {
        assert_eq!("Rectangle".parse::<TableShape>(), Ok(TableShape::Rectangle));
        assert!("hexagon".parse::<TableShape>().is_err());
        assert_eq!(
            "long_sides_only".parse::<SeatArrangementStyle>(),
            Ok(SeatArrangementStyle::LongSidesOnly)
        );
    }

    #[test]
    fn test_seat_label() {
        let plain = SeatPosition::new(3, 0.0, -0.5, 0.0);
        assert_eq!(plain.label(), "3");
        let tagged = plain.with_side(SeatSide::Groom);
        assert_eq!(tagged.label(), "groom 3");
    }

    #[test]
    fn test_style_serde_names() {
        let json = serde_json::to_string(&SeatArrangementStyle::SideSplit).unwrap();
        assert_eq!(json, "\"side-split\"");
        let shape: TableShape = serde_json::from_str("\"oval\"").unwrap();
        assert_eq!(shape, TableShape::Oval);
    }
}
