//! Guest arrangement planner
//!
//! Assigns a filtered guest roster to a set of configured tables using a
//! deterministic heuristic: each group first fills the seats reserved for
//! it, then everyone left is optionally mixed into open-pool seats. Guests
//! are taken in the order the caller supplies them; the planner never sorts
//! or reorders the roster, so which guests overflow is fully explained by
//! that order.
//!
//! The planner is advisory and never fails. Shortfalls show up as data in
//! [`ArrangementPreview`] and [`ArrangementPlan`].

pub mod execute;
pub mod preview;
pub mod types;

pub use execute::{execute, execute_with_config};
pub use preview::preview;
pub use types::*;
