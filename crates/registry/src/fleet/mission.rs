//! Mission domain model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Mission lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MissionStatus {
    /// Mission is scheduled and accepting rockets
    Scheduled,
    /// Mission is on hold, typically because an assigned rocket entered repair
    Pending,
    /// Mission is underway
    InProgress,
    /// Mission has ended and holds no rockets
    Ended,
}

/// A mission tracked by the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    /// Unique mission identifier, assigned by the registry
    pub id: String,

    /// Display name
    pub name: String,

    /// Current lifecycle status
    pub status: MissionStatus,

    /// Identifiers of the rockets currently assigned to this mission
    pub rocket_ids: HashSet<String>,
}

impl Mission {
    /// Create a new scheduled mission with no rockets.
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            status: MissionStatus::Scheduled,
            rocket_ids: HashSet::new(),
        }
    }

    /// Add a rocket to this mission's assignment set.
    pub fn add_rocket(&mut self, rocket_id: String) {
        self.rocket_ids.insert(rocket_id);
    }

    /// Number of rockets currently assigned.
    pub fn rocket_count(&self) -> usize {
        self.rocket_ids.len()
    }
}
