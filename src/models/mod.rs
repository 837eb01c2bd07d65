// Schema set: one file per entity family. All models are immutable value
// objects constructed fresh from each response.

pub mod agent;
pub mod contract;
pub mod faction;
pub mod market;
pub mod meta;
pub mod mining;
pub mod navigation;
pub mod register;
pub mod server;
pub mod ship;
pub mod shipyard;
pub mod system;
pub mod waypoint;

pub(crate) mod validate;

pub use agent::*;
pub use contract::*;
pub use faction::*;
pub use market::*;
pub use meta::*;
pub use mining::*;
pub use navigation::*;
pub use register::*;
pub use server::*;
pub use ship::*;
pub use shipyard::*;
pub use system::*;
pub use waypoint::*;
