//! Fleet domain models and the registry that owns them.
//!
//! Two leaf entities, [`Rocket`] and [`Mission`], live in two independent
//! key-value stores. The [`FleetRegistry`] is the sole owner of both stores
//! and the only place lifecycle invariants are checked and enforced.

pub mod mission;
pub mod registry;
pub mod rocket;
pub mod store;
pub mod summary;

pub use mission::{Mission, MissionStatus};
pub use registry::FleetRegistry;
pub use rocket::{Rocket, RocketStatus};
pub use store::EntityStore;
pub use summary::{MissionSummary, RocketSummary};
