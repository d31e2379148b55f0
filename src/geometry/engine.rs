//! Seat placement for each table shape
//!
//! All positions are relative to the table center with the Y axis pointing
//! down. Angles follow the "0° = top, clockwise positive" convention, so the
//! seat at 12 o'clock has angle 0 and the seat at 3 o'clock has angle 90.
//!
//! Seats are numbered in physical placement order: clockwise from the top
//! for every shape except side-split, which numbers the top row first and
//! then the bottom row, both from left to right.

use super::config::GeometryConfig;
use super::types::{
    SeatArrangementStyle, SeatPosition, SeatSide, TableShape, MAX_TABLE_CAPACITY,
};

/// Compute seat positions with the default geometry configuration
///
/// # Example
///
/// ```rust
/// use table_seating::geometry::{compute_seats, SeatArrangementStyle, TableShape};
///
/// let seats = compute_seats(8, TableShape::Circle, SeatArrangementStyle::Even, None, None);
/// assert_eq!(seats.len(), 8);
/// assert_eq!(seats[0].angle, 0.0);
/// ```
pub fn compute_seats(
    capacity: u32,
    shape: TableShape,
    style: SeatArrangementStyle,
    width: Option<f64>,
    height: Option<f64>,
) -> Vec<SeatPosition> {
    compute_seats_with_config(
        capacity,
        shape,
        style,
        width,
        height,
        &GeometryConfig::default(),
    )
}

/// Compute seat positions for one table
///
/// Physical dimensions are only used when both are present and positive;
/// otherwise the shape-independent default spacing applies.
pub fn compute_seats_with_config(
    capacity: u32,
    shape: TableShape,
    style: SeatArrangementStyle,
    width: Option<f64>,
    height: Option<f64>,
    config: &GeometryConfig,
) -> Vec<SeatPosition> {
    if capacity == 0 {
        return Vec::new();
    }

    let capacity = if capacity > MAX_TABLE_CAPACITY {
        tracing::debug!(capacity, max = MAX_TABLE_CAPACITY, "clamping table capacity");
        MAX_TABLE_CAPACITY
    } else {
        capacity
    };

    let resolved = style.resolve_for(shape);
    if resolved != style {
        tracing::debug!(%shape, %style, "arrangement style not available, using even");
    }

    let dimensions = physical_dimensions(width, height);

    match (shape, resolved) {
        (TableShape::Circle | TableShape::Oval, _) => round_seats(capacity, config),
        (TableShape::Square, _) => square_seats(capacity, dimensions, config),
        (TableShape::Rectangle, SeatArrangementStyle::SideSplit) => {
            side_split_seats(capacity, dimensions, config)
        }
        // Long-sides-only shares the even layout
        (TableShape::Rectangle, _) => rectangle_seats(capacity, dimensions, config),
    }
}

fn physical_dimensions(width: Option<f64>, height: Option<f64>) -> Option<(f64, f64)> {
    match (width, height) {
        (Some(w), Some(h)) if w.is_finite() && h.is_finite() && w > 0.0 && h > 0.0 => {
            Some((w, h))
        }
        _ => None,
    }
}

fn round_seats(capacity: u32, config: &GeometryConfig) -> Vec<SeatPosition> {
    let step = 360.0 / capacity as f64;
    let radius = config.circle_radius;

    (0..capacity)
        .map(|i| {
            let angle = step * i as f64;
            // Shift by -90° so angle 0 lands at 12 o'clock
            let radians = (angle - 90.0).to_radians();
            SeatPosition::new(i + 1, radians.cos() * radius, radians.sin() * radius, angle)
        })
        .collect()
}

/// Seat counts per edge, in clockwise order starting at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeCounts {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl EdgeCounts {
    pub fn total(&self) -> u32 {
        self.top + self.right + self.bottom + self.left
    }
}

/// Spread seats over four sides; the remainder goes to top, then bottom, then left.
pub(crate) fn distribute_square(capacity: u32) -> EdgeCounts {
    let base = capacity / 4;
    let remainder = capacity % 4;
    EdgeCounts {
        top: base + u32::from(remainder >= 1),
        right: base,
        bottom: base + u32::from(remainder >= 2),
        left: base + u32::from(remainder >= 3),
    }
}

/// Two seats at each end (three once the table is large), the rest on the long sides.
///
/// Very small tables drop end seats so the long sides are never left empty.
pub(crate) fn distribute_rectangle(capacity: u32) -> EdgeCounts {
    let preferred_ends = if capacity > 24 { 3 } else { 2 };
    let ends = preferred_ends.min(capacity.saturating_sub(2) / 2);
    let long = capacity - 2 * ends;
    EdgeCounts {
        top: long.div_ceil(2),
        right: ends,
        bottom: long / 2,
        left: ends,
    }
}

/// Offsets of `count` seats arranged symmetrically about a side's midpoint.
///
/// The row never spans more than `max_span`; spacing shrinks to fit.
pub(crate) fn side_offsets(count: u32, spacing: f64, max_span: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let gaps = (count - 1) as f64;
            let spacing = if spacing * gaps > max_span {
                max_span / gaps
            } else {
                spacing
            };
            let start = -spacing * gaps / 2.0;
            (0..count).map(|k| start + spacing * k as f64).collect()
        }
    }
}

/// Relative distance between seat centers along a side of `side_px` pixels
fn relative_spacing(
    dimensions: Option<(f64, f64)>,
    side_px: impl Fn(f64, f64) -> f64,
    config: &GeometryConfig,
) -> f64 {
    match dimensions {
        Some((w, h)) => (config.seat_size_px(w, h) + config.seat_gap_px) / side_px(w, h),
        None => config.default_spacing,
    }
}

/// Place seats on the four edges, numbering clockwise from the top-left seat.
///
/// `row_standoff` positions the top/bottom rows, `column_standoff` the
/// left/right columns.
fn edge_seats(
    counts: EdgeCounts,
    row_standoff: f64,
    column_standoff: f64,
    dimensions: Option<(f64, f64)>,
    config: &GeometryConfig,
) -> Vec<SeatPosition> {
    let horizontal = relative_spacing(dimensions, |w, _| w, config);
    let vertical = relative_spacing(dimensions, |_, h| h, config);

    let mut seats = Vec::with_capacity(counts.total() as usize);
    let mut push = |x: f64, y: f64, angle: f64| {
        let number = seats.len() as u32 + 1;
        seats.push(SeatPosition::new(number, x, y, angle));
    };

    for x in side_offsets(counts.top, horizontal, config.max_span) {
        push(x, -row_standoff, 0.0);
    }
    for y in side_offsets(counts.right, vertical, config.max_span) {
        push(column_standoff, y, 90.0);
    }
    for x in side_offsets(counts.bottom, horizontal, config.max_span)
        .into_iter()
        .rev()
    {
        push(x, row_standoff, 180.0);
    }
    for y in side_offsets(counts.left, vertical, config.max_span)
        .into_iter()
        .rev()
    {
        push(-column_standoff, y, 270.0);
    }

    seats
}

fn square_seats(
    capacity: u32,
    dimensions: Option<(f64, f64)>,
    config: &GeometryConfig,
) -> Vec<SeatPosition> {
    let standoff = config.clamp_standoff(config.square_standoff);
    edge_seats(
        distribute_square(capacity),
        standoff,
        standoff,
        dimensions,
        config,
    )
}

fn rectangle_seats(
    capacity: u32,
    dimensions: Option<(f64, f64)>,
    config: &GeometryConfig,
) -> Vec<SeatPosition> {
    let standoff = config.rectangle_standoff(dimensions);
    edge_seats(
        distribute_rectangle(capacity),
        standoff.long_side,
        standoff.short_side,
        dimensions,
        config,
    )
}

/// Evenly spread `count` seats across `span`, centered on zero
fn split_row(count: u32, span: f64) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let step = span / (count - 1) as f64;
            (0..count).map(|k| -span / 2.0 + step * k as f64).collect()
        }
    }
}

fn side_split_seats(
    capacity: u32,
    dimensions: Option<(f64, f64)>,
    config: &GeometryConfig,
) -> Vec<SeatPosition> {
    let standoff = config.rectangle_standoff(dimensions).long_side;
    let top = capacity.div_ceil(2);
    let bottom = capacity / 2;

    let top_row = split_row(top, config.side_split_span)
        .into_iter()
        .map(|x| (x, -standoff, 0.0, SeatSide::Bride));
    let bottom_row = split_row(bottom, config.side_split_span)
        .into_iter()
        .map(|x| (x, standoff, 180.0, SeatSide::Groom));

    top_row
        .chain(bottom_row)
        .enumerate()
        .map(|(i, (x, y, angle, side))| {
            SeatPosition::new(i as u32 + 1, x, y, angle).with_side(side)
        })
        .collect()
}
