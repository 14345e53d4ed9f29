//! Aggregated mission view for reporting.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::fleet::mission::{Mission, MissionStatus};
use crate::fleet::rocket::RocketStatus;

/// Name and status of one rocket assigned to a mission.
///
/// The pair collection on [`MissionSummary`] has set semantics: two rockets
/// sharing the same name and status contribute a single entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RocketSummary {
    /// Rocket display name
    pub name: String,
    /// Rocket status at the time the summary was taken
    pub status: RocketStatus,
}

/// Aggregated view of one mission for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionSummary {
    /// Mission display name
    pub mission_name: String,
    /// Mission status at the time the summary was taken
    pub mission_status: MissionStatus,
    /// Deduplicated name/status pairs of the assigned rockets
    pub rockets: BTreeSet<RocketSummary>,
}

/// Display ordering for mission listings.
///
/// Missions with more assigned rockets come first. Ties break by name in
/// descending codepoint order, then by mission id, descending, so the
/// ordering is total and deterministic for any input.
pub fn mission_display_order(a: &Mission, b: &Mission) -> Ordering {
    b.rocket_ids
        .len()
        .cmp(&a.rocket_ids.len())
        .then_with(|| b.name.cmp(&a.name))
        .then_with(|| b.id.cmp(&a.id))
}
