//! Mapping seats from table-relative space onto the canvas.
//!
//! ## Rotation Convention
//!
//! Rotation uses the SVG convention: clockwise positive angles, in degrees,
//! with the Y axis pointing down.
//! - 0° = no rotation
//! - 90° = rotated clockwise (right becomes down)
//! - 180° = upside down
//! - 270° = rotated counter-clockwise (right becomes up)
//!
//! The seat transform is order-sensitive: scale by the table size, rotate
//! around the table center, then translate to the table's canvas position.

use super::types::{Point, SeatPosition};

/// Represents a 2D rotation transformation around a center point.
#[derive(Debug, Clone, Copy)]
pub struct RotationTransform {
    /// Rotation angle in degrees (clockwise positive, per SVG convention)
    pub angle_degrees: f64,
    /// Center point of rotation
    pub center: Point,
}

impl RotationTransform {
    pub fn new(angle_degrees: f64, center: Point) -> Self {
        Self {
            angle_degrees,
            center,
        }
    }

    /// Check if this is effectively a no-op (0° rotation).
    pub fn is_identity(&self) -> bool {
        self.angle_degrees.abs() < f64::EPSILON
    }

    /// Rotate a point around the center using standard 2D rotation matrix.
    ///
    /// ```text
    /// x' = cx + (x - cx) * cos(θ) - (y - cy) * sin(θ)
    /// y' = cy + (x - cx) * sin(θ) + (y - cy) * cos(θ)
    /// ```
    pub fn transform_point(&self, point: Point) -> Point {
        if self.is_identity() {
            return point;
        }

        let radians = self.angle_degrees.to_radians();
        let cos_a = radians.cos();
        let sin_a = radians.sin();

        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;

        Point {
            x: self.center.x + dx * cos_a - dy * sin_a,
            y: self.center.y + dx * sin_a + dy * cos_a,
        }
    }

    /// Rotate a seat facing angle, normalized to `[0, 360)`
    pub fn transform_angle(&self, angle: f64) -> f64 {
        (angle + self.angle_degrees).rem_euclid(360.0)
    }
}

/// Placement of a table on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TablePlacement {
    /// Top-left corner of the unrotated table
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Clockwise rotation in degrees around the table center
    pub rotation: f64,
}

impl TablePlacement {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            rotation: 0.0,
        }
    }

    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Center of the table on the canvas
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// A seat in absolute canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSeat {
    pub seat_number: u32,
    pub position: Point,
    /// Facing angle after the table rotation is applied
    pub angle: f64,
}

/// Map a relative seat position to canvas coordinates: scale, rotate, translate.
///
/// # Example
///
/// ```rust
/// use table_seating::geometry::{seat_to_canvas, Point, TablePlacement};
///
/// let table = TablePlacement::new(100.0, 50.0, 80.0, 40.0);
/// let p = seat_to_canvas(Point::new(0.5, 0.0), &table);
/// assert_eq!(p, Point::new(180.0, 70.0));
/// ```
pub fn seat_to_canvas(relative: Point, table: &TablePlacement) -> Point {
    let scaled = Point::new(relative.x * table.width, relative.y * table.height);
    let rotated =
        RotationTransform::new(table.rotation, Point::new(0.0, 0.0)).transform_point(scaled);
    let center = table.center();
    Point::new(center.x + rotated.x, center.y + rotated.y)
}

/// Map a whole seat layout onto the canvas
pub fn seats_to_canvas(seats: &[SeatPosition], table: &TablePlacement) -> Vec<CanvasSeat> {
    let rotation = RotationTransform::new(table.rotation, table.center());
    seats
        .iter()
        .map(|seat| CanvasSeat {
            seat_number: seat.seat_number,
            position: seat_to_canvas(seat.relative(), table),
            angle: rotation.transform_angle(seat.angle),
        })
        .collect()
}
