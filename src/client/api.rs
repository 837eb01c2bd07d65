//! The client facade: owns the wrapper and one instance of each resource
//! group.

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::DEFAULT_BASE_URL;
use crate::client::wrapper::HttpWrapper;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::models::register::{RegisterRequest, RegistrationData};
use crate::resources::{
    AgentsResource, ContractsResource, FactionsResource, FleetResource, ServerResource,
    SystemsResource,
};

/// Typed access to the whole API surface. Cloning shares the underlying
/// connection pool; the pool shuts down when the last clone drops.
#[derive(Clone)]
pub struct StarTradersClient {
    client: HttpWrapper,
    agents: AgentsResource,
    systems: SystemsResource,
    contracts: ContractsResource,
    factions: FactionsResource,
    fleet: FleetResource,
    server: ServerResource,
}

impl StarTradersClient {
    /// Build from an injected, already-configured transport. The transport
    /// must attach the bearer token itself; prefer [`set_up`](Self::set_up)
    /// unless you need custom transport options.
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let client = HttpWrapper::new(http, base_url);
        Self {
            agents: AgentsResource::new(client.clone()),
            systems: SystemsResource::new(client.clone()),
            contracts: ContractsResource::new(client.clone()),
            factions: FactionsResource::new(client.clone()),
            fleet: FleetResource::new(client.clone()),
            server: ServerResource::new(client.clone()),
            client,
        }
    }

    /// Build a transport with the default headers (bearer token, JSON
    /// content type) against the production API.
    pub fn set_up(token: &str) -> Result<Self, Error> {
        Self::set_up_with_url(token, DEFAULT_BASE_URL)
    }

    /// Same as [`set_up`](Self::set_up) against a different endpoint.
    pub fn set_up_with_url(token: &str, base_url: &str) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| Error::InvalidToken)?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder().default_headers(headers).build()?;
        Ok(Self::new(http, base_url))
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, Error> {
        Self::set_up_with_url(&config.token, &config.base_url)
    }

    /// Register a new agent. The only unauthenticated operation; the
    /// returned [`RegistrationData::token`] is what every other call needs.
    pub async fn register(&self, request: &RegisterRequest) -> Result<RegistrationData, Error> {
        let body = serde_json::json!({
            "faction": request.faction,
            "symbol": request.symbol,
        });
        self.client
            .request_to_model(Method::POST, "/register", &[], Some(&body))
            .await
    }

    /// Your agent: the player-controlled entity that owns ships and credits.
    pub fn agents(&self) -> &AgentsResource {
        &self.agents
    }

    /// Systems and their waypoints, markets, shipyards, and jump gates.
    pub fn systems(&self) -> &SystemsResource {
        &self.systems
    }

    /// Faction contracts: terms, acceptance, delivery, fulfillment.
    pub fn contracts(&self) -> &ContractsResource {
        &self.contracts
    }

    /// The NPC factions and their traits.
    pub fn factions(&self) -> &FactionsResource {
        &self.factions
    }

    /// Your ships: navigation, cargo, mining, scanning, purchase.
    pub fn fleet(&self) -> &FleetResource {
        &self.fleet
    }

    /// Server status, universe counts, and leaderboards.
    pub fn server(&self) -> &ServerResource {
        &self.server
    }
}
