//! RocketFleet registry
//!
//! In-memory lifecycle tracking for a fleet of rockets and the missions they
//! are assigned to.
//!
//! This crate provides:
//! - Rocket and mission domain models with explicit status enums
//! - A guarded key-value store abstraction for shared in-process state
//! - The [`FleetRegistry`], sole owner of all mutation and query logic
//! - An aggregated mission summary view for reporting
//!
//! All state lives in memory for the lifetime of the process; there is no
//! durable storage and no wire boundary. The registry is safe to share
//! between threads: every operation runs to completion and returns or fails
//! synchronously.
//!
//! # Example
//!
//! ```
//! use rocketfleet_registry::{EntityStore, FleetRegistry};
//!
//! let registry = FleetRegistry::new(EntityStore::new(), EntityStore::new());
//! let rocket = registry.create_rocket("Dragon XL").unwrap();
//! let mission = registry.create_mission("Transit").unwrap();
//! registry.assign_rocket_to_mission(&rocket, &mission).unwrap();
//!
//! let summary = registry.missions_summary();
//! assert_eq!(summary[0].mission_name, "Transit");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod fleet;
pub mod logging;

pub use config::{Config, LoggingConfig};
pub use error::{RegistryError, RegistryResult};
pub use fleet::{
    EntityStore, FleetRegistry, Mission, MissionStatus, MissionSummary, Rocket, RocketStatus,
    RocketSummary,
};
