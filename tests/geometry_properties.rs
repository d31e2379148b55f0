//! Property checks for the seat geometry calculator, run over every
//! capacity from 1 to 32 and every shape/style combination.

use pretty_assertions::assert_eq;

use table_seating::geometry::{
    compute_seats, seat_to_canvas, GeometryConfig, Point, SeatArrangementStyle, SeatPosition,
    TablePlacement, TableShape, MAX_TABLE_CAPACITY,
};

const SHAPES: [TableShape; 4] = [
    TableShape::Circle,
    TableShape::Square,
    TableShape::Rectangle,
    TableShape::Oval,
];

const STYLES: [SeatArrangementStyle; 4] = [
    SeatArrangementStyle::Even,
    SeatArrangementStyle::SideSplit,
    SeatArrangementStyle::LongSidesOnly,
    SeatArrangementStyle::Custom,
];

/// Physical sizes to exercise: none, a preset size, and an arbitrary size
const SIZES: [Option<(f64, f64)>; 3] = [None, Some((180.0, 90.0)), Some((137.0, 137.0))];

fn all_layouts(
) -> impl Iterator<Item = (u32, TableShape, SeatArrangementStyle, Vec<SeatPosition>)> {
    (1..=MAX_TABLE_CAPACITY).flat_map(|capacity| {
        SHAPES.into_iter().flat_map(move |shape| {
            STYLES.into_iter().flat_map(move |style| {
                SIZES.into_iter().map(move |size| {
                    let seats = compute_seats(
                        capacity,
                        shape,
                        style,
                        size.map(|s| s.0),
                        size.map(|s| s.1),
                    );
                    (capacity, shape, style, seats)
                })
            })
        })
    })
}

#[test]
fn test_seat_numbers_are_contiguous() {
    for (capacity, shape, style, seats) in all_layouts() {
        let numbers: Vec<u32> = seats.iter().map(|s| s.seat_number).collect();
        let expected: Vec<u32> = (1..=capacity).collect();
        assert_eq!(numbers, expected, "{} {} capacity {}", shape, style, capacity);
    }
}

#[test]
fn test_seats_stay_within_protrusion_bound() {
    let limit = GeometryConfig::default().max_seat_distance() + 1e-9;
    for (capacity, shape, style, seats) in all_layouts() {
        for seat in &seats {
            assert!(
                seat.relative_x.abs() <= limit && seat.relative_y.abs() <= limit,
                "{} {} capacity {}: seat {:?} out of bounds",
                shape,
                style,
                capacity,
                seat
            );
        }
    }
}

#[test]
fn test_seats_never_sit_inside_the_table() {
    for (capacity, shape, style, seats) in all_layouts() {
        for seat in &seats {
            let distance = seat.relative_x.abs().max(seat.relative_y.abs());
            let on_edge = match shape {
                TableShape::Circle | TableShape::Oval => seat.relative_x.hypot(seat.relative_y),
                TableShape::Square | TableShape::Rectangle => distance,
            };
            assert!(
                on_edge >= 0.5 - 1e-9,
                "{} {} capacity {}: seat {:?} inside table",
                shape,
                style,
                capacity,
                seat
            );
        }
    }
}

#[test]
fn test_square_symmetry_when_divisible_by_four() {
    for capacity in (4..=MAX_TABLE_CAPACITY).step_by(4) {
        let seats =
            compute_seats(capacity, TableShape::Square, SeatArrangementStyle::Even, None, None);
        for angle in [0.0, 90.0, 180.0, 270.0] {
            let count = seats.iter().filter(|s| s.angle == angle).count();
            assert_eq!(count as u32, capacity / 4, "capacity {} angle {}", capacity, angle);
        }
    }
}

#[test]
fn test_square_opposite_sides_differ_by_at_most_one() {
    for capacity in 1..=MAX_TABLE_CAPACITY {
        let seats =
            compute_seats(capacity, TableShape::Square, SeatArrangementStyle::Even, None, None);
        let side = |angle: f64| seats.iter().filter(|s| s.angle == angle).count() as i64;
        assert!((side(0.0) - side(180.0)).abs() <= 1, "capacity {}", capacity);
        assert!((side(90.0) - side(270.0)).abs() <= 1, "capacity {}", capacity);
    }
}

#[test]
fn test_circle_gaps_are_even() {
    for capacity in 1..=MAX_TABLE_CAPACITY {
        let seats =
            compute_seats(capacity, TableShape::Circle, SeatArrangementStyle::Even, None, None);
        let step = 360.0 / capacity as f64;
        for (i, seat) in seats.iter().enumerate() {
            let next = &seats[(i + 1) % seats.len()];
            let gap = (next.angle - seat.angle).rem_euclid(360.0);
            let gap = if gap == 0.0 { 360.0 } else { gap };
            assert!(
                (gap - step).abs() < 1e-9,
                "capacity {}: gap {} between seats {} and {}",
                capacity,
                gap,
                seat.seat_number,
                next.seat_number
            );

            // Position agrees with the facing angle
            let radians = (seat.angle - 90.0).to_radians();
            assert!((seat.relative_x - 0.5 * radians.cos()).abs() < 1e-9);
            assert!((seat.relative_y - 0.5 * radians.sin()).abs() < 1e-9);
        }
    }
}

#[test]
fn test_rectangle_short_sides() {
    let ends = |capacity: u32| {
        compute_seats(capacity, TableShape::Rectangle, SeatArrangementStyle::Even, None, None)
            .iter()
            .filter(|s| s.angle == 90.0)
            .count()
    };
    assert_eq!(ends(12), 2);
    assert_eq!(ends(24), 2);
    assert_eq!(ends(25), 3);
    assert_eq!(ends(32), 3);
}

#[test]
fn test_computation_is_deterministic() {
    let first: Vec<_> = all_layouts().collect();
    let second: Vec<_> = all_layouts().collect();
    for (a, b) in first.iter().zip(&second) {
        let bits_a: Vec<(u64, u64, u64)> = a
            .3
            .iter()
            .map(|s| (s.relative_x.to_bits(), s.relative_y.to_bits(), s.angle.to_bits()))
            .collect();
        let bits_b: Vec<(u64, u64, u64)> = b
            .3
            .iter()
            .map(|s| (s.relative_x.to_bits(), s.relative_y.to_bits(), s.angle.to_bits()))
            .collect();
        assert_eq!(bits_a, bits_b);
    }
}

#[test]
fn test_canvas_transform_without_rotation_is_exact() {
    let (table_x, table_y, w, h) = (37.5, 112.25, 180.0, 90.0);
    let table = TablePlacement::new(table_x, table_y, w, h);
    let seats = compute_seats(
        10,
        TableShape::Rectangle,
        SeatArrangementStyle::Even,
        Some(w),
        Some(h),
    );
    for seat in seats {
        let p = seat_to_canvas(seat.relative(), &table);
        assert_eq!(
            p,
            Point::new(
                table_x + w / 2.0 + seat.relative_x * w,
                table_y + h / 2.0 + seat.relative_y * h
            )
        );
    }
}

#[test]
fn test_canvas_transform_keeps_distance_from_center_under_rotation() {
    let table = TablePlacement::new(0.0, 0.0, 120.0, 120.0).with_rotation(33.0);
    let center = table.center();
    for seat in compute_seats(8, TableShape::Circle, SeatArrangementStyle::Even, None, None) {
        let p = seat_to_canvas(seat.relative(), &table);
        let distance = (p.x - center.x).hypot(p.y - center.y);
        assert!((distance - 60.0).abs() < 1e-9, "distance {}", distance);
    }
}
