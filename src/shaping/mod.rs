//! Post-processing applied to query results before they leave the API.
//!
//! Every datetime column is shifted to the display timezone, content lengths
//! become whole minutes, and flat membership rows are folded per group.

pub mod duration;
pub mod grouping;
pub mod lookup;
pub mod timezone;

pub use duration::seconds_to_minutes;
pub use grouping::{GroupSummary, MemberRow, group_members};
pub use lookup::Lookup;
pub use timezone::{Normalize, Normalizer};
