//! The fleet registry: sole owner of rocket and mission state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use crate::error::{RegistryError, RegistryResult};
use crate::fleet::mission::{Mission, MissionStatus};
use crate::fleet::rocket::{Rocket, RocketStatus};
use crate::fleet::store::EntityStore;
use crate::fleet::summary::{self, MissionSummary, RocketSummary};

/// Registry owning the rocket and mission stores.
///
/// All creation, assignment, status-change, and reporting operations go
/// through this type; it is the only place lifecycle invariants are checked.
/// Operations take `&self` and are safe under parallel callers: each store
/// guards its own map, id counters are atomic, and the one check-then-act
/// sequence spanning both stores (assignment) is serialized by an internal
/// lock. Every operation either fully applies its effect or applies none of
/// it.
#[derive(Debug)]
pub struct FleetRegistry {
    rockets: EntityStore<Rocket>,
    missions: EntityStore<Mission>,
    rocket_seq: AtomicU64,
    mission_seq: AtomicU64,
    /// Serializes the assignment critical section across both stores.
    assign_lock: Mutex<()>,
}

impl FleetRegistry {
    /// Create a registry over two empty stores supplied by the caller.
    ///
    /// Id counters start at 1 and never reuse a value for the lifetime of
    /// this instance.
    pub fn new(rockets: EntityStore<Rocket>, missions: EntityStore<Mission>) -> Self {
        Self {
            rockets,
            missions,
            rocket_seq: AtomicU64::new(1),
            mission_seq: AtomicU64::new(1),
            assign_lock: Mutex::new(()),
        }
    }

    /// Create a rocket and store it.
    ///
    /// The new rocket starts on the ground with no mission. Returns the
    /// generated id, `rocket<N>` with `N` counting up from 1.
    pub fn create_rocket(&self, name: &str) -> RegistryResult<String> {
        if name.is_empty() {
            return Err(RegistryError::InvalidArgument(
                "rocket name must not be empty".to_string(),
            ));
        }

        let id = format!("rocket{}", self.rocket_seq.fetch_add(1, Ordering::Relaxed));
        self.rockets
            .insert(id.clone(), Rocket::new(id.clone(), name.to_string()));
        tracing::debug!(rocket_id = %id, name, "rocket created");
        Ok(id)
    }

    /// Create a mission and store it.
    ///
    /// The new mission starts scheduled with no rockets. Returns the
    /// generated id, `mission<N>` with `N` counting up from 1.
    pub fn create_mission(&self, name: &str) -> RegistryResult<String> {
        if name.is_empty() {
            return Err(RegistryError::InvalidArgument(
                "mission name must not be empty".to_string(),
            ));
        }

        let id = format!("mission{}", self.mission_seq.fetch_add(1, Ordering::Relaxed));
        self.missions
            .insert(id.clone(), Mission::new(id.clone(), name.to_string()));
        tracing::debug!(mission_id = %id, name, "mission created");
        Ok(id)
    }

    /// Assign a rocket to a mission, putting the rocket in space.
    ///
    /// Fails when either id is empty or unknown, when the mission has ended,
    /// or when the rocket already flies a mission; there is no release
    /// operation, so a rocket cannot be reassigned. On success the rocket
    /// joins the mission's set, references it back, and becomes
    /// [`RocketStatus::InSpace`], as one atomic effect.
    pub fn assign_rocket_to_mission(
        &self,
        rocket_id: &str,
        mission_id: &str,
    ) -> RegistryResult<()> {
        if rocket_id.is_empty() || mission_id.is_empty() {
            return Err(RegistryError::InvalidArgument(
                "rocket id and mission id must not be empty".to_string(),
            ));
        }

        // The lock spans the whole check-then-act: two parallel assignments
        // of the same rocket must not both pass the already-assigned check.
        let _guard = self.assign_lock.lock().unwrap();

        let rocket = self.rockets.get(rocket_id).ok_or_else(|| {
            RegistryError::InvalidArgument(format!("rocket with id [{rocket_id}] does not exist"))
        })?;
        let mission = self.missions.get(mission_id).ok_or_else(|| {
            RegistryError::InvalidArgument(format!("mission with id [{mission_id}] does not exist"))
        })?;

        if mission.status == MissionStatus::Ended {
            return Err(RegistryError::InvalidState(format!(
                "mission [{mission_id}] has already ended"
            )));
        }
        if let Some(current) = &rocket.mission_id {
            return Err(RegistryError::InvalidState(format!(
                "rocket [{rocket_id}] is already assigned to mission [{current}]"
            )));
        }

        self.missions
            .update(mission_id, |m| m.add_rocket(rocket_id.to_string()));
        self.rockets.update(rocket_id, |r| {
            r.mission_id = Some(mission_id.to_string());
            r.status = RocketStatus::InSpace;
        });
        tracing::info!(rocket_id, mission_id, "rocket assigned to mission");
        Ok(())
    }

    /// Set a rocket's status.
    ///
    /// Any status may follow any status; no transition table applies.
    /// Entering repair while assigned suspends the mission: its status is
    /// forced to [`MissionStatus::Pending`] whatever it was, including
    /// `InProgress`.
    pub fn set_rocket_status(
        &self,
        rocket_id: &str,
        new_status: RocketStatus,
    ) -> RegistryResult<()> {
        if rocket_id.is_empty() {
            return Err(RegistryError::InvalidArgument(
                "rocket id must not be empty".to_string(),
            ));
        }

        let rocket = self.rockets.get(rocket_id).ok_or_else(|| {
            RegistryError::InvalidState(format!(
                "rocket with id [{rocket_id}] is not in the registry"
            ))
        })?;

        self.rockets.update(rocket_id, |r| r.status = new_status);
        tracing::debug!(rocket_id, status = ?new_status, "rocket status changed");

        if new_status == RocketStatus::InRepair {
            self.suspend_mission_for_repair(&rocket);
        }
        Ok(())
    }

    /// Demote the mission of a rocket that entered repair to `Pending`.
    ///
    /// The overwrite bypasses mission transition validation. Skipped silently
    /// when the rocket flies no mission or the referenced mission is no
    /// longer stored.
    fn suspend_mission_for_repair(&self, rocket: &Rocket) {
        let Some(mission_id) = rocket.mission_id.as_deref() else {
            return;
        };

        let suspended = self
            .missions
            .update(mission_id, |m| m.status = MissionStatus::Pending);
        if suspended {
            tracing::warn!(
                mission_id,
                rocket_id = %rocket.id,
                "mission suspended, assigned rocket entered repair"
            );
        }
    }

    /// Set a mission's status.
    ///
    /// `Scheduled` and `Pending` are always allowed. `InProgress` requires at
    /// least one assigned rocket and none of them in repair. `Ended` requires
    /// an empty rocket set.
    pub fn set_mission_status(
        &self,
        mission_id: &str,
        new_status: MissionStatus,
    ) -> RegistryResult<()> {
        if mission_id.is_empty() {
            return Err(RegistryError::InvalidArgument(
                "mission id must not be empty".to_string(),
            ));
        }

        let mission = self.missions.get(mission_id).ok_or_else(|| {
            RegistryError::InvalidState(format!(
                "mission with id [{mission_id}] is not in the registry"
            ))
        })?;

        match new_status {
            MissionStatus::InProgress => self.validate_in_progress(&mission)?,
            MissionStatus::Ended => {
                if !mission.rocket_ids.is_empty() {
                    return Err(RegistryError::InvalidState(format!(
                        "mission [{mission_id}] still has rockets assigned"
                    )));
                }
            }
            MissionStatus::Scheduled | MissionStatus::Pending => {}
        }

        self.missions.update(mission_id, |m| m.status = new_status);
        tracing::debug!(mission_id, status = ?new_status, "mission status changed");
        Ok(())
    }

    fn validate_in_progress(&self, mission: &Mission) -> RegistryResult<()> {
        if mission.rocket_ids.is_empty() {
            return Err(RegistryError::InvalidState(format!(
                "mission [{}] has no rockets assigned",
                mission.id
            )));
        }

        // Live lookup; ids that no longer resolve are ignored.
        let in_repair = mission
            .rocket_ids
            .iter()
            .filter_map(|id| self.rockets.get(id))
            .find(|rocket| rocket.status == RocketStatus::InRepair);

        if let Some(rocket) = in_repair {
            return Err(RegistryError::InvalidState(format!(
                "rocket [{}] assigned to mission [{}] is in repair",
                rocket.id, mission.id
            )));
        }
        Ok(())
    }

    /// Aggregated view of every stored mission, in display order.
    ///
    /// Missions are listed by assigned-rocket count, descending, with ties
    /// broken by name, descending (see
    /// [`summary::mission_display_order`]). Rocket ids that no longer
    /// resolve are dropped from the pair set.
    pub fn missions_summary(&self) -> Vec<MissionSummary> {
        let mut missions = self.missions.snapshot();
        missions.sort_by(summary::mission_display_order);
        missions
            .iter()
            .map(|mission| self.summarize(mission))
            .collect()
    }

    fn summarize(&self, mission: &Mission) -> MissionSummary {
        let rockets = mission
            .rocket_ids
            .iter()
            .filter_map(|id| self.rockets.get(id))
            .map(|rocket| RocketSummary {
                name: rocket.name,
                status: rocket.status,
            })
            .collect();

        MissionSummary {
            mission_name: mission.name.clone(),
            mission_status: mission.status,
            rockets,
        }
    }

    /// Fetch a snapshot of the rocket with the given id.
    pub fn rocket(&self, rocket_id: &str) -> Option<Rocket> {
        self.rockets.get(rocket_id)
    }

    /// Fetch a snapshot of the mission with the given id.
    pub fn mission(&self, mission_id: &str) -> Option<Mission> {
        self.missions.get(mission_id)
    }

    /// Number of rockets in the registry.
    pub fn rocket_count(&self) -> usize {
        self.rockets.len()
    }

    /// Number of missions in the registry.
    pub fn mission_count(&self) -> usize {
        self.missions.len()
    }
}
