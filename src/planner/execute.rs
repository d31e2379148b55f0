//! Plan execution: create tables and assign guests to seats
//!
//! Tables are created in request order. Within a request that names `n`
//! groups, each group gets a block of `tables_per_group` consecutive tables;
//! any tables beyond `n × tables_per_group` are shared by all of the
//! request's groups. When a request has fewer tables than groups, the later
//! groups get no physical table and their guests overflow.
//!
//! Guests are seated group by group (groups in order of first appearance),
//! then the remainder is either mixed into open-pool tables or left
//! unassigned. Every eligible guest ends up either fully seated or listed in
//! `ArrangementPlan::unassigned`.

use std::collections::HashSet;

use crate::geometry::{compute_seats_with_config, GeometryConfig};

use super::preview::{allocate, eligible_pool, normalize, preview};
use super::types::{
    ArrangementPlan, AssignmentMode, GuestRecord, PlanOptions, PlannedTable, SeatAssignment,
    TableTypeRequest, UnassignedGuest, UnassignedReason,
};

/// Execute a plan with the default geometry configuration
pub fn execute(
    roster: &[GuestRecord],
    requests: &[TableTypeRequest],
    options: &PlanOptions,
) -> ArrangementPlan {
    execute_with_config(roster, requests, options, &GeometryConfig::default())
}

/// Execute a plan, laying out every table's seats with `config`
pub fn execute_with_config(
    roster: &[GuestRecord],
    requests: &[TableTypeRequest],
    options: &PlanOptions,
    config: &GeometryConfig,
) -> ArrangementPlan {
    let summary = preview(roster, requests, options.mode);
    let requests = normalize(requests);
    let mut tables = create_tables(&requests, options.first_table_number, config);

    let (eligible, _) = eligible_pool(roster, options.mode);
    let candidates: Vec<(usize, &GuestRecord)> = eligible.into_iter().enumerate().collect();

    if options.assignment == AssignmentMode::EmptyTables {
        let unassigned = candidates
            .iter()
            .map(|(_, g)| UnassignedGuest {
                guest: g.id.clone(),
                reason: UnassignedReason::EmptyTablesRequested,
            })
            .collect();
        tracing::debug!(tables = tables.len(), "created empty tables");
        return ArrangementPlan {
            preview: summary,
            tables,
            unassigned,
            seated_guests: 0,
        };
    }

    let allocation = allocate(&requests);
    let mut seated: HashSet<usize> = HashSet::new();

    for group in &allocation.group_order {
        let targets: Vec<usize> = tables
            .iter()
            .enumerate()
            .filter(|(_, t)| t.reserved_for.contains(group))
            .map(|(i, _)| i)
            .collect();
        let members: Vec<(usize, &GuestRecord)> = candidates
            .iter()
            .copied()
            .filter(|(_, g)| g.group.as_deref() == Some(group.as_str()))
            .collect();

        let overflow: HashSet<usize> = seat_in_order(&mut tables, &targets, &members)
            .into_iter()
            .collect();
        tracing::debug!(
            group = %group,
            tables = targets.len(),
            guests = members.len(),
            overflow = overflow.len(),
            "seated group"
        );
        seated.extend(
            members
                .iter()
                .map(|(i, _)| *i)
                .filter(|i| !overflow.contains(i)),
        );
    }

    let remainder: Vec<(usize, &GuestRecord)> = candidates
        .iter()
        .copied()
        .filter(|(i, _)| !seated.contains(i))
        .collect();

    let not_placed: HashSet<usize> = match options.assignment {
        AssignmentMode::MixRemaining => {
            let open: Vec<usize> = tables
                .iter()
                .enumerate()
                .filter(|(_, t)| t.is_open_pool())
                .map(|(i, _)| i)
                .collect();
            seat_where_room(&mut tables, &open, &remainder)
                .into_iter()
                .collect()
        }
        _ => remainder.iter().map(|(i, _)| *i).collect(),
    };

    let unassigned: Vec<UnassignedGuest> = remainder
        .iter()
        .filter(|(i, _)| not_placed.contains(i))
        .map(|(_, g)| UnassignedGuest {
            guest: g.id.clone(),
            reason: unassigned_reason(
                options.assignment,
                allocation.has_group(g.group.as_deref()),
            ),
        })
        .collect();

    let seated_guests = candidates.len() - unassigned.len();
    tracing::debug!(
        tables = tables.len(),
        seated = seated_guests,
        unassigned = unassigned.len(),
        "executed arrangement plan"
    );

    ArrangementPlan {
        preview: summary,
        tables,
        unassigned,
        seated_guests,
    }
}

fn unassigned_reason(mode: AssignmentMode, has_group: bool) -> UnassignedReason {
    match mode {
        _ if has_group => UnassignedReason::GroupOverflow,
        AssignmentMode::MixRemaining => UnassignedReason::NoOpenSeats,
        _ => UnassignedReason::LeftUnassigned,
    }
}

/// Instantiate `count` tables per request, numbered consecutively
fn create_tables(
    requests: &[TableTypeRequest],
    first_number: u32,
    config: &GeometryConfig,
) -> Vec<PlannedTable> {
    let mut tables = Vec::new();
    let mut number = first_number;

    for request in requests {
        let seats = compute_seats_with_config(
            request.capacity,
            request.shape,
            request.style,
            request.width,
            request.height,
            config,
        );

        for index in 0..request.count {
            tables.push(PlannedTable {
                number,
                name: format!("Table {}", number),
                shape: request.shape,
                style: request.style.resolve_for(request.shape),
                capacity: request.capacity,
                width: request.width,
                height: request.height,
                reserved_for: reservation(request, index),
                seats: seats.clone(),
                assignments: Vec::new(),
            });
            number = number.saturating_add(1);
        }
    }

    tables
}

/// Groups the `index`-th table of a request is reserved for
fn reservation(request: &TableTypeRequest, index: u32) -> Vec<String> {
    if request.is_open_pool() {
        return Vec::new();
    }
    let block = (index / request.tables_per_group()) as usize;
    match request.groups.get(block) {
        Some(group) => vec![group.clone()],
        None => request.groups.clone(),
    }
}

/// Seat guests in order onto the free seats of `targets`.
///
/// Uses the same first-fit cutoff as the preview: once a party does not fit,
/// it and every later guest are returned as overflow.
fn seat_in_order(
    tables: &mut [PlannedTable],
    targets: &[usize],
    guests: &[(usize, &GuestRecord)],
) -> Vec<usize> {
    let mut free: u32 = targets.iter().map(|&t| tables[t].free_seats()).sum();
    let mut overflow = Vec::new();

    for &(index, guest) in guests {
        let demand = guest.seat_demand();
        if !overflow.is_empty() || demand > free {
            overflow.push(index);
            continue;
        }
        place(tables, targets, guest);
        free -= demand;
    }

    overflow
}

/// Seat guests in order onto the free seats of `targets`, skipping parties
/// that no longer fit so later, smaller parties can still take the seats.
fn seat_where_room(
    tables: &mut [PlannedTable],
    targets: &[usize],
    guests: &[(usize, &GuestRecord)],
) -> Vec<usize> {
    let mut free: u32 = targets.iter().map(|&t| tables[t].free_seats()).sum();
    let mut skipped = Vec::new();

    for &(index, guest) in guests {
        let demand = guest.seat_demand();
        if demand > free {
            skipped.push(index);
            continue;
        }
        place(tables, targets, guest);
        free -= demand;
    }

    skipped
}

/// Give `guest` as many seats as it needs, filling `targets` in order.
///
/// A party may span several tables when no single table has room for it.
/// The caller checks that enough free seats exist.
fn place(tables: &mut [PlannedTable], targets: &[usize], guest: &GuestRecord) {
    let mut left = guest.seat_demand();
    for &t in targets {
        let table = &mut tables[t];
        while left > 0 && table.free_seats() > 0 {
            let seat_number = table.assignments.len() as u32 + 1;
            table.assignments.push(SeatAssignment {
                seat_number,
                guest: guest.id.clone(),
            });
            left -= 1;
        }
        if left == 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::TableShape;
    use crate::planner::types::{GuestId, PlanMode};

    fn guests(group: &str, count: usize) -> Vec<GuestRecord> {
        (1..=count)
            .map(|i| GuestRecord::new(format!("{}-{}", group, i)).with_group(group))
            .collect()
    }

    #[test]
    fn test_reservation_blocks() {
        let request = TableTypeRequest::new(TableShape::Circle, 8, 5).for_groups(["a", "b"]);
        let reserved: Vec<Vec<String>> = (0..5).map(|i| reservation(&request, i)).collect();
        assert_eq!(reserved[0], vec!["a"]);
        assert_eq!(reserved[1], vec!["a"]);
        assert_eq!(reserved[2], vec!["b"]);
        assert_eq!(reserved[3], vec!["b"]);
        assert_eq!(reserved[4], vec!["a", "b"]);
    }

    #[test]
    fn test_tables_are_numbered_from_offset() {
        let requests = vec![
            TableTypeRequest::new(TableShape::Circle, 8, 2),
            TableTypeRequest::new(TableShape::Square, 4, 1),
        ];
        let options = PlanOptions::new().with_first_table_number(7);
        let plan = execute(&[], &requests, &options);
        let names: Vec<&str> = plan.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Table 7", "Table 8", "Table 9"]);
        assert!(plan.tables.iter().all(|t| t.seats.len() == t.capacity as usize));
    }

    #[test]
    fn test_empty_tables_mode_seats_nobody() {
        let roster = guests("family", 3);
        let requests = vec![TableTypeRequest::new(TableShape::Circle, 8, 1)];
        let options = PlanOptions::new().with_assignment(AssignmentMode::EmptyTables);
        let plan = execute(&roster, &requests, &options);
        assert_eq!(plan.tables.len(), 1);
        assert!(plan.tables[0].assignments.is_empty());
        assert_eq!(plan.seated_guests, 0);
        assert_eq!(plan.unassigned.len(), 3);
        assert!(plan
            .unassigned
            .iter()
            .all(|u| u.reason == UnassignedReason::EmptyTablesRequested));
    }

    #[test]
    fn test_party_spans_tables() {
        let roster = vec![
            GuestRecord::new("solo"),
            GuestRecord::new("party").with_seats(4),
        ];
        let requests = vec![TableTypeRequest::new(TableShape::Square, 3, 2)];
        let plan = execute(&roster, &requests, &PlanOptions::default());
        assert_eq!(plan.seated_guests, 2);
        assert_eq!(plan.tables_for(&GuestId::new("party")), vec![1, 2]);
        assert_eq!(plan.tables[0].free_seats(), 0);
        assert_eq!(plan.tables[1].free_seats(), 1);
    }

    #[test]
    fn test_leave_remaining_keeps_open_tables_empty() {
        let mut roster = guests("family", 2);
        roster.push(GuestRecord::new("stranger"));
        let requests = vec![
            TableTypeRequest::new(TableShape::Circle, 4, 1).for_groups(["family"]),
            TableTypeRequest::new(TableShape::Circle, 4, 1),
        ];
        let options = PlanOptions::new().with_assignment(AssignmentMode::LeaveRemaining);
        let plan = execute(&roster, &requests, &options);
        assert_eq!(plan.tables[0].assignments.len(), 2);
        assert!(plan.tables[1].assignments.is_empty());
        assert_eq!(plan.unassigned.len(), 1);
        assert_eq!(plan.unassigned[0].reason, UnassignedReason::LeftUnassigned);
    }

    #[test]
    fn test_group_overflow_mixes_into_open_pool() {
        let roster = guests("family", 6);
        let requests = vec![
            TableTypeRequest::new(TableShape::Circle, 4, 1).for_groups(["family"]),
            TableTypeRequest::new(TableShape::Circle, 1, 1),
        ];
        let plan = execute(&roster, &requests, &PlanOptions::default());
        assert_eq!(plan.tables[1].occupant(1), Some(&GuestId::new("family-5")));
        assert_eq!(plan.unassigned.len(), 1);
        assert_eq!(plan.unassigned[0].guest, GuestId::new("family-6"));
        assert_eq!(plan.unassigned[0].reason, UnassignedReason::GroupOverflow);
    }

    #[test]
    fn test_add_mode_skips_seated_guests() {
        let roster = vec![
            GuestRecord::new("a").seated_at("Table 1"),
            GuestRecord::new("b"),
        ];
        let requests = vec![TableTypeRequest::new(TableShape::Circle, 4, 1)];
        let options = PlanOptions::new()
            .with_mode(PlanMode::Add)
            .with_first_table_number(2);
        let plan = execute(&roster, &requests, &options);
        assert_eq!(plan.preview.already_seated, 1);
        assert_eq!(plan.seated_guests, 1);
        assert_eq!(plan.tables[0].occupant(1), Some(&GuestId::new("b")));
        assert_eq!(plan.tables[0].number, 2);
    }

    #[test]
    fn test_scarce_tables_leave_later_groups_unseated() {
        let mut roster = guests("a", 1);
        roster.extend(guests("b", 1));
        let requests = vec![TableTypeRequest::new(TableShape::Circle, 4, 1).for_groups(["a", "b"])];
        let plan = execute(&roster, &requests, &PlanOptions::default());
        assert_eq!(plan.tables.len(), 1);
        assert_eq!(plan.tables[0].reserved_for, vec!["a"]);
        assert_eq!(plan.seated_guests, 1);
        assert_eq!(plan.unassigned[0].guest, GuestId::new("b-1"));
    }

    #[test]
    fn test_open_pool_skips_parties_that_do_not_fit() {
        let roster = vec![
            GuestRecord::new("big").with_seats(3),
            GuestRecord::new("small"),
        ];
        let requests = vec![TableTypeRequest::new(TableShape::Circle, 2, 1)];
        let plan = execute(&roster, &requests, &PlanOptions::default());
        assert_eq!(plan.tables[0].occupant(1), Some(&GuestId::new("small")));
        assert_eq!(plan.unassigned.len(), 1);
        assert_eq!(plan.unassigned[0].guest, GuestId::new("big"));
        assert_eq!(plan.unassigned[0].reason, UnassignedReason::NoOpenSeats);
    }

    #[test]
    fn test_group_seating_keeps_cutoff() {
        let roster = vec![
            GuestRecord::new("big").with_group("family").with_seats(3),
            GuestRecord::new("small").with_group("family"),
        ];
        let requests = vec![TableTypeRequest::new(TableShape::Circle, 2, 1).for_groups(["family"])];
        let options = PlanOptions::new().with_assignment(AssignmentMode::LeaveRemaining);
        let plan = execute(&roster, &requests, &options);
        assert!(plan.tables[0].assignments.is_empty());
        assert_eq!(plan.unassigned.len(), 2);
    }
}
