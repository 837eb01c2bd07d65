use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::agent::Agent;
use crate::models::ship::{
    Ship, ShipEngine, ShipFrame, ShipModule, ShipMount, ShipReactor, ShipType,
};
use crate::models::validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipyardShipType {
    #[serde(rename = "type")]
    pub ship_type: Option<ShipType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipyardTransaction {
    pub waypoint_symbol: String,
    /// Symbol of the ship that was purchased.
    pub ship_symbol: String,
    #[serde(deserialize_with = "validate::at_least_one")]
    pub price: u32,
    pub agent_symbol: String,
    pub timestamp: DateTime<Utc>,
}

/// Listing for a hull currently on sale, with the full loadout it ships with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipyardShip {
    #[serde(rename = "type")]
    pub ship_type: Option<ShipType>,
    pub name: String,
    pub description: String,
    pub purchase_price: u32,
    pub frame: ShipFrame,
    pub reactor: ShipReactor,
    pub engine: ShipEngine,
    pub modules: Vec<ShipModule>,
    pub mounts: Vec<ShipMount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipyard {
    /// Same symbol as the waypoint the shipyard sits at.
    #[serde(deserialize_with = "validate::non_empty")]
    pub symbol: String,
    pub ship_types: Vec<ShipyardShipType>,
    /// Present only when a ship is at the shipyard.
    pub transactions: Option<Vec<ShipyardTransaction>>,
    /// Present only when a ship is at the shipyard.
    pub ships: Option<Vec<ShipyardShip>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseShipData {
    pub agent: Agent,
    pub ship: Ship,
    pub transaction: ShipyardTransaction,
}
