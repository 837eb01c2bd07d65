// Resource facade: one thin struct per operation group. Each method is a
// fixed (verb, path, schema) triple delegated to the request wrapper:
// exactly one HTTP call, no pagination loops, no client-side checks beyond
// what response validation performs.

mod agents;
mod contracts;
mod factions;
mod fleet;
mod server;
mod systems;

pub use agents::AgentsResource;
pub use contracts::ContractsResource;
pub use factions::FactionsResource;
pub use fleet::{CargoResource, FleetResource, ScanResource};
pub use server::ServerResource;
pub use systems::{SystemsResource, WaypointsResource};
