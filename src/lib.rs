//! Typed client for the SpaceTraders v2 HTTP API.
//!
//! Every API operation is exposed through a resource group on
//! [`StarTradersClient`] (agents, systems, contracts, factions, fleet,
//! server). Responses are deserialized into validated models; the server's
//! `{"error": ...}` envelope surfaces as [`Error::Api`] instead of a value.
//!
//! ```no_run
//! use startraders::StarTradersClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), startraders::Error> {
//!     let client = StarTradersClient::set_up("your-agent-token")?;
//!
//!     let agent = client.agents().info().await?;
//!     println!("{} has {} credits", agent.symbol, agent.credits);
//!
//!     let contracts = client.contracts().list(Default::default()).await?;
//!     println!("{} contracts known", contracts.meta.total);
//!     Ok(())
//! }
//! ```
//!
//! The library issues exactly one HTTP request per method call: no retries,
//! no rate limiting, no caching. Those policies belong to the host
//! application, as does the transport lifecycle; the underlying connection
//! pool closes when the last clone of the client drops.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;

pub use client::StarTradersClient;
pub use config::ClientConfig;
pub use error::Error;

pub use models::{
    agent::Agent,
    contract::{Contract, ContractType},
    faction::{Faction, FactionSymbol},
    meta::{Meta, Page, Paginated},
    ship::{Cooldown, Ship, ShipCargo, ShipNav},
    system::System,
    waypoint::Waypoint,
};

/// Production API endpoint. Pass a different URL to
/// [`StarTradersClient::set_up_with_url`] to target a mock or test server.
pub const DEFAULT_BASE_URL: &str = "https://api.spacetraders.io/v2";
