//! Rocket domain model

use serde::{Deserialize, Serialize};

/// Rocket lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RocketStatus {
    /// Rocket is on the ground, available for assignment
    OnGround,
    /// Rocket is flying a mission
    InSpace,
    /// Rocket is undergoing repair
    InRepair,
}

/// A rocket tracked by the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rocket {
    /// Unique rocket identifier, assigned by the registry
    pub id: String,

    /// Display name
    pub name: String,

    /// Current lifecycle status
    pub status: RocketStatus,

    /// Mission this rocket is currently assigned to, if any
    pub mission_id: Option<String>,
}

impl Rocket {
    /// Create a new rocket on the ground with no mission.
    pub fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            status: RocketStatus::OnGround,
            mission_id: None,
        }
    }

    /// Check whether the rocket is currently assigned to a mission.
    pub fn is_assigned(&self) -> bool {
        self.mission_id.is_some()
    }
}
