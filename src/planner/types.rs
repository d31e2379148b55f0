//! Input and output types for the arrangement planner

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geometry::{
    clamp_capacity, seats_to_canvas, CanvasSeat, SeatArrangementStyle, SeatPosition,
    TablePlacement, TableShape,
};

/// Stable guest identifier supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuestId(pub String);

impl GuestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for GuestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn one() -> u32 {
    1
}

/// One guest (or party) on the roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestRecord {
    pub id: GuestId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub group: Option<String>,
    #[serde(default)]
    pub side: Option<String>,
    /// Seats the party occupies; values below 1 count as 1
    #[serde(default = "one")]
    pub seats_needed: u32,
    /// Existing table assignment, consulted only in add mode
    #[serde(default)]
    pub table: Option<String>,
}

impl GuestRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: GuestId::new(id),
            name: None,
            group: None,
            side: None,
            seats_needed: 1,
            table: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_side(mut self, side: impl Into<String>) -> Self {
        self.side = Some(side.into());
        self
    }

    pub fn with_seats(mut self, seats: u32) -> Self {
        self.seats_needed = seats;
        self
    }

    pub fn seated_at(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Seat demand, never less than one
    pub fn seat_demand(&self) -> u32 {
        self.seats_needed.max(1)
    }

    pub fn is_seated(&self) -> bool {
        self.table.is_some()
    }
}

/// A request for `count` identical tables, optionally reserved for groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableTypeRequest {
    pub shape: TableShape,
    pub capacity: u32,
    pub count: u32,
    #[serde(default)]
    pub style: SeatArrangementStyle,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub height: Option<f64>,
    /// Groups these tables are reserved for; empty means open pool
    #[serde(default)]
    pub groups: Vec<String>,
}

impl TableTypeRequest {
    pub fn new(shape: TableShape, capacity: u32, count: u32) -> Self {
        Self {
            shape,
            capacity,
            count,
            style: SeatArrangementStyle::Even,
            width: None,
            height: None,
            groups: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: SeatArrangementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn for_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Copy with capacity clamped to the supported range and group names deduplicated
    pub fn normalized(&self) -> Self {
        let mut groups: Vec<String> = Vec::with_capacity(self.groups.len());
        for group in &self.groups {
            if !groups.contains(group) {
                groups.push(group.clone());
            }
        }
        Self {
            capacity: clamp_capacity(self.capacity),
            groups,
            ..self.clone()
        }
    }

    pub fn is_open_pool(&self) -> bool {
        self.groups.is_empty()
    }

    /// Tables handed to each named group: `max(1, count / groups)`
    pub fn tables_per_group(&self) -> u32 {
        if self.groups.is_empty() {
            0
        } else {
            (self.count / self.groups.len() as u32).max(1)
        }
    }

    pub fn total_seats(&self) -> u32 {
        self.capacity.saturating_mul(self.count)
    }
}

/// Whether planning replaces existing seating or adds to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanMode {
    /// Every guest on the roster is placed from scratch
    #[default]
    Replace,
    /// Only guests without a table are placed
    Add,
}

/// What to do with guests once the tables exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentMode {
    /// Seat groups first, then mix everyone left into open-pool seats
    #[default]
    MixRemaining,
    /// Seat groups only; everyone left stays unassigned
    LeaveRemaining,
    /// Create the tables without seating anybody
    EmptyTables,
}

/// Options for one planning run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanOptions {
    #[serde(default)]
    pub mode: PlanMode,
    #[serde(default)]
    pub assignment: AssignmentMode,
    /// Number given to the first created table
    #[serde(default = "one")]
    pub first_table_number: u32,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            mode: PlanMode::Replace,
            assignment: AssignmentMode::MixRemaining,
            first_table_number: 1,
        }
    }
}

impl PlanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: PlanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_assignment(mut self, assignment: AssignmentMode) -> Self {
        self.assignment = assignment;
        self
    }

    pub fn with_first_table_number(mut self, number: u32) -> Self {
        self.first_table_number = number;
        self
    }
}

/// Aggregate counts shown before the plan is executed
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArrangementPreview {
    pub mode: PlanMode,
    pub total_eligible_guests: usize,
    /// Guests skipped in add mode because they already have a table
    pub already_seated: usize,
    pub total_tables: u32,
    pub total_seats: u32,
    /// Seats reserved per group
    pub group_capacity: BTreeMap<String, u32>,
    /// Guests per group that do not fit the reserved seats
    pub group_overflow: BTreeMap<String, usize>,
    /// Eligible guests not covered by any group reservation
    pub ungrouped_guests: usize,
    pub open_pool_seats: u32,
    pub remaining_guests: usize,
    /// Seat demand of the eligible pool
    pub seats_needed: u32,
    pub has_enough_seats: bool,
}

impl ArrangementPreview {
    pub fn total_group_overflow(&self) -> usize {
        self.group_overflow.values().sum()
    }
}

impl fmt::Display for ArrangementPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} guests ({} seats) across {} tables ({} seats)",
            self.total_eligible_guests, self.seats_needed, self.total_tables, self.total_seats
        )?;
        if self.already_seated > 0 {
            writeln!(f, "{} guests already seated", self.already_seated)?;
        }
        for (group, capacity) in &self.group_capacity {
            let overflow = self.group_overflow.get(group).copied().unwrap_or(0);
            writeln!(f, "group {}: {} seats, {} overflow", group, capacity, overflow)?;
        }
        writeln!(
            f,
            "open pool: {} seats for {} ungrouped guests",
            self.open_pool_seats, self.ungrouped_guests
        )?;
        if !self.has_enough_seats {
            writeln!(f, "warning: not enough seats")?;
        }
        write!(f, "remaining: {}", self.remaining_guests)
    }
}

/// One guest placed on one seat
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    pub seat_number: u32,
    pub guest: GuestId,
}

/// A physical table produced by plan execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedTable {
    pub number: u32,
    pub name: String,
    pub shape: TableShape,
    pub style: SeatArrangementStyle,
    pub capacity: u32,
    pub width: Option<f64>,
    pub height: Option<f64>,
    /// Groups this table is reserved for; empty means open pool
    pub reserved_for: Vec<String>,
    pub seats: Vec<SeatPosition>,
    pub assignments: Vec<SeatAssignment>,
}

impl PlannedTable {
    pub fn is_open_pool(&self) -> bool {
        self.reserved_for.is_empty()
    }

    pub fn free_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.assignments.len() as u32)
    }

    /// Guest sitting in a given seat
    pub fn occupant(&self, seat_number: u32) -> Option<&GuestId> {
        self.assignments
            .iter()
            .find(|a| a.seat_number == seat_number)
            .map(|a| &a.guest)
    }

    /// Seats in canvas coordinates for a table drawn at `(x, y)`
    ///
    /// Tables without a physical size are drawn as `fallback_size` squares.
    pub fn canvas_seats(
        &self,
        x: f64,
        y: f64,
        rotation: f64,
        fallback_size: f64,
    ) -> Vec<CanvasSeat> {
        let width = self.width.unwrap_or(fallback_size);
        let height = self.height.unwrap_or(fallback_size);
        let placement = TablePlacement::new(x, y, width, height).with_rotation(rotation);
        seats_to_canvas(&self.seats, &placement)
    }
}

/// Why a guest was left without a seat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnassignedReason {
    /// The group's reserved tables are full
    GroupOverflow,
    /// No open-pool seat was left
    NoOpenSeats,
    /// The caller chose to leave remaining guests unassigned
    LeftUnassigned,
    /// The caller asked for empty tables
    EmptyTablesRequested,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnassignedGuest {
    pub guest: GuestId,
    pub reason: UnassignedReason,
}

/// Concrete tables and seat assignments, ready to be persisted by the caller
///
/// A party needing several seats takes that many individual seats. When a
/// party does not fit on one table it continues on the next table with room,
/// so members of one party are not guaranteed to sit together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrangementPlan {
    /// Projection computed before any guest was seated. Execution may seat
    /// group overflow in open-pool seats, so `preview.remaining_guests` can
    /// exceed `remaining_guests()`; the executed counts are authoritative.
    pub preview: ArrangementPreview,
    pub tables: Vec<PlannedTable>,
    pub unassigned: Vec<UnassignedGuest>,
    /// Guests with every needed seat assigned
    pub seated_guests: usize,
}

impl ArrangementPlan {
    pub fn remaining_guests(&self) -> usize {
        self.unassigned.len()
    }

    /// Every table that holds `guest`, in table order
    pub fn tables_for(&self, guest: &GuestId) -> Vec<u32> {
        self.tables
            .iter()
            .filter(|t| t.assignments.iter().any(|a| &a.guest == guest))
            .map(|t| t.number)
            .collect()
    }
}

impl fmt::Display for ArrangementPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} tables, {} of {} guests seated",
            self.tables.len(),
            self.seated_guests,
            self.preview.total_eligible_guests
        )?;
        for table in &self.tables {
            writeln!(
                f,
                "{} ({} {}): {}/{} seated",
                table.name,
                table.shape,
                table.style,
                table.assignments.len(),
                table.capacity
            )?;
        }
        write!(f, "remaining: {}", self.remaining_guests())
    }
}
