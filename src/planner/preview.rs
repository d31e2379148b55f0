//! Capacity allocation and overflow preview
//!
//! The preview is cheap and recomputed on every filter or table change. It
//! never fails: shortfalls are reported through `has_enough_seats` and
//! `remaining_guests`.

use std::collections::BTreeMap;

use super::types::{ArrangementPreview, GuestRecord, PlanMode, TableTypeRequest};

/// Seat reservations derived from the table-type requests
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Allocation {
    /// Seats reserved per group
    pub group_capacity: BTreeMap<String, u32>,
    /// Groups in order of first appearance across requests
    pub group_order: Vec<String>,
    /// Seats on tables not reserved for any group
    pub open_pool_seats: u32,
}

impl Allocation {
    pub fn has_group(&self, group: Option<&str>) -> bool {
        group.is_some_and(|g| self.group_capacity.contains_key(g))
    }
}

/// Tally reserved seats per group and the open pool.
///
/// Each named group of a request receives `tables_per_group × capacity`
/// seats. Capacity reserved for a group is never handed back to the open
/// pool, even when the group has no eligible guests.
pub(crate) fn allocate(requests: &[TableTypeRequest]) -> Allocation {
    let mut allocation = Allocation::default();

    for request in requests {
        if request.is_open_pool() {
            allocation.open_pool_seats = allocation
                .open_pool_seats
                .saturating_add(request.total_seats());
            continue;
        }

        let seats = request.tables_per_group().saturating_mul(request.capacity);
        for group in &request.groups {
            if !allocation.group_capacity.contains_key(group) {
                allocation.group_order.push(group.clone());
            }
            let tally = allocation.group_capacity.entry(group.clone()).or_insert(0);
            *tally = tally.saturating_add(seats);
        }
    }

    allocation
}

/// Guests under consideration for this run, and how many were skipped as already seated
pub(crate) fn eligible_pool(roster: &[GuestRecord], mode: PlanMode) -> (Vec<&GuestRecord>, usize) {
    match mode {
        PlanMode::Replace => (roster.iter().collect(), 0),
        PlanMode::Add => {
            let eligible: Vec<&GuestRecord> = roster.iter().filter(|g| !g.is_seated()).collect();
            let already_seated = roster.len() - eligible.len();
            (eligible, already_seated)
        }
    }
}

/// Split guests into those that fit `capacity` seats and those that do not.
///
/// Guests are taken in the given order. The first guest whose demand would
/// exceed the remaining seats, and everyone after them, overflow; guests are
/// never reordered to pack more tightly.
pub(crate) fn first_fit<'a, I>(
    guests: I,
    capacity: u32,
) -> (Vec<&'a GuestRecord>, Vec<&'a GuestRecord>)
where
    I: IntoIterator<Item = &'a GuestRecord>,
{
    let mut fitted = Vec::new();
    let mut overflow = Vec::new();
    let mut used: u32 = 0;

    for guest in guests {
        let demand = guest.seat_demand();
        if overflow.is_empty() && used.saturating_add(demand) <= capacity {
            used += demand;
            fitted.push(guest);
        } else {
            overflow.push(guest);
        }
    }

    (fitted, overflow)
}

/// Normalize every request before planning
pub(crate) fn normalize(requests: &[TableTypeRequest]) -> Vec<TableTypeRequest> {
    requests.iter().map(TableTypeRequest::normalized).collect()
}

/// Compute the arrangement preview for a roster and a set of table requests
///
/// # Example
///
/// ```rust
/// use table_seating::geometry::TableShape;
/// use table_seating::planner::{preview, GuestRecord, PlanMode, TableTypeRequest};
///
/// let roster: Vec<_> = (0..25).map(|i| GuestRecord::new(format!("g{}", i))).collect();
/// let tables = [TableTypeRequest::new(TableShape::Circle, 10, 3)];
///
/// let result = preview(&roster, &tables, PlanMode::Replace);
/// assert_eq!(result.total_seats, 30);
/// assert!(result.has_enough_seats);
/// assert_eq!(result.remaining_guests, 0);
/// ```
pub fn preview(
    roster: &[GuestRecord],
    requests: &[TableTypeRequest],
    mode: PlanMode,
) -> ArrangementPreview {
    let requests = normalize(requests);
    let allocation = allocate(&requests);
    let (eligible, already_seated) = eligible_pool(roster, mode);

    let seats_needed = eligible
        .iter()
        .fold(0u32, |acc, g| acc.saturating_add(g.seat_demand()));
    let total_tables = requests.iter().fold(0u32, |acc, r| acc.saturating_add(r.count));
    let total_seats = requests
        .iter()
        .fold(0u32, |acc, r| acc.saturating_add(r.total_seats()));

    let mut group_overflow = BTreeMap::new();
    let mut grouped_guests = 0;
    for (group, &capacity) in &allocation.group_capacity {
        let members: Vec<&GuestRecord> = eligible
            .iter()
            .copied()
            .filter(|g| g.group.as_deref() == Some(group.as_str()))
            .collect();
        grouped_guests += members.len();

        let (_, overflow) = first_fit(members, capacity);
        if !overflow.is_empty() {
            tracing::debug!(group = %group, capacity, overflow = overflow.len(), "group overflow");
        }
        group_overflow.insert(group.clone(), overflow.len());
    }

    let ungrouped_guests = eligible.len() - grouped_guests;
    let pool_overflow = ungrouped_guests.saturating_sub(allocation.open_pool_seats as usize);
    let total_overflow: usize = group_overflow.values().sum();
    let remaining_guests = (total_overflow + pool_overflow).min(eligible.len());

    tracing::debug!(
        ?mode,
        eligible = eligible.len(),
        total_seats,
        open_pool = allocation.open_pool_seats,
        remaining = remaining_guests,
        "arrangement preview"
    );

    ArrangementPreview {
        mode,
        total_eligible_guests: eligible.len(),
        already_seated,
        total_tables,
        total_seats,
        group_capacity: allocation.group_capacity,
        group_overflow,
        ungrouped_guests,
        open_pool_seats: allocation.open_pool_seats,
        remaining_guests,
        seats_needed,
        has_enough_seats: total_seats >= seats_needed,
    }
}
