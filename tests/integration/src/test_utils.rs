//! Shared helpers for the integration suite.

use rocketfleet_registry::{EntityStore, FleetRegistry};

/// Build a registry over two fresh stores.
pub fn fresh_registry() -> FleetRegistry {
    FleetRegistry::new(EntityStore::new(), EntityStore::new())
}

/// Install the test subscriber, ignoring repeat installs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt::try_init();
}
