//! Agent registration, the API's unauthenticated entry point.

use serde::{Deserialize, Serialize};

use crate::models::agent::Agent;
use crate::models::contract::Contract;
use crate::models::faction::{Faction, FactionSymbol};
use crate::models::ship::Ship;

/// Body of POST `/register`. The chosen faction determines the agent's
/// headquarters; the symbol is how other agents will see your ships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub faction: FactionSymbol,
    pub symbol: String,
}

impl RegisterRequest {
    pub fn new(faction: FactionSymbol, symbol: impl Into<String>) -> Self {
        Self {
            faction,
            symbol: symbol.into(),
        }
    }
}

/// Everything a fresh agent starts with, including the bearer token used
/// for every subsequent request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationData {
    pub agent: Agent,
    pub contract: Contract,
    pub faction: Faction,
    pub ship: Ship,
    pub token: String,
}
